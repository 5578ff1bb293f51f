//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::core::output_format::{add_dot, add_newline, ends_with_line_terminator};
use rust_log_facade::prelude::*;
use rust_log_facade::{dispatch, severity_from_name, severity_name, LOG_LINE_SIZE_MAX};

fn ordered_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ORDERED.to_vec())
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

// ============================================================================
// Gating
// ============================================================================

proptest! {
    /// Threshold L enables exactly the ordered severities S with S >= L
    #[test]
    fn test_threshold_boundary(level in ordered_severity(), threshold in ordered_severity()) {
        let logger = MemoryLogger::new();
        logger.set_log_level(threshold);
        prop_assert_eq!(logger.enabled(level), level.as_u8() >= threshold.as_u8());
        prop_assert_eq!(logger.enabled(level), level >= threshold);
    }

    /// STATE and TRACE follow only their own toggles
    #[test]
    fn test_state_and_trace_ignore_threshold(
        threshold in any_severity(),
        state_on in any::<bool>(),
        trace_on in any::<bool>(),
    ) {
        let logger = MemoryLogger::new();
        logger.enable_state_log(state_on);
        logger.enable_trace_log(trace_on);
        logger.set_log_level(threshold);

        prop_assert_eq!(logger.enabled(Severity::State), state_on);
        prop_assert_eq!(logger.enabled(Severity::Trace), trace_on);
    }

    /// Lowering the threshold never switches TRACE on
    #[test]
    fn test_ordered_band_does_not_enable_trace(threshold in ordered_severity()) {
        let logger = MemoryLogger::new();
        logger.set_log_level(threshold);
        prop_assert!(!logger.enabled(Severity::Trace));
    }

    /// A filtered dispatch leaves the logger untouched
    #[test]
    fn test_filtered_dispatch_records_nothing(
        level in ordered_severity(),
        threshold in ordered_severity(),
        message in ".{0,64}",
    ) {
        let logger = MemoryLogger::new();
        logger.set_log_level(threshold);
        dispatch::log_to(&logger, level, CallSite::caller(), None, format_args!("{}", message));
        prop_assert_eq!(logger.len(), usize::from(level >= threshold));
    }
}

// ============================================================================
// Auto-punctuation
// ============================================================================

proptest! {
    #[test]
    fn test_add_dot_idempotent(message in ".{0,64}") {
        let mut once = message.clone();
        add_dot(&mut once);
        let mut twice = once.clone();
        add_dot(&mut twice);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with(&message));
        prop_assert!(once.len() - message.len() <= 1);
    }

    #[test]
    fn test_add_newline_idempotent(message in ".{0,64}") {
        let mut once = message.clone();
        add_newline(&mut once);
        let mut twice = once.clone();
        add_newline(&mut twice);
        prop_assert_eq!(&once, &twice);
        prop_assert!(ends_with_line_terminator(&once));
    }

    /// A message already ending in `.` or a line terminator keeps its ending
    #[test]
    fn test_terminated_message_unchanged(body in "[a-z ]{0,32}", terminator in prop_oneof![Just("."), Just("\n"), Just("\r\n")]) {
        let original = format!("{}{}", body, terminator);
        let mut message = original.clone();
        add_dot(&mut message);
        prop_assert_eq!(message, original);
    }

    #[test]
    fn test_finished_message_punctuated_once(message in "[a-z ]{0,32}[.\n]?") {
        let logger = MemoryLogger::new();
        logger.enable_auto_adddot(true);
        dispatch::log_to(&logger, Severity::Info, CallSite::caller(), None, format_args!("{}", message));

        let finished = &logger.messages()[0];
        prop_assert!(finished.ends_with('\n'));
        prop_assert!(!finished.ends_with("..\n"));
        prop_assert!(!finished.ends_with("\n\n"));
    }
}

// ============================================================================
// Name lookup
// ============================================================================

proptest! {
    #[test]
    fn test_name_roundtrip(level in any_severity()) {
        let name = severity_name(level.as_u8()).unwrap();
        prop_assert_eq!(name, level.name());
        prop_assert_eq!(severity_from_name(name).unwrap(), level);
    }

    /// Lookup is case-sensitive: only the upper-case spelling parses
    #[test]
    fn test_name_lookup_case_sensitive(level in any_severity()) {
        let lower = level.name().to_lowercase();
        prop_assert!(
            matches!(severity_from_name(&lower), Err(LoggerError::InvalidLevelName(_))),
            "lower-case name must be rejected"
        );
    }

    #[test]
    fn test_invalid_value(value in 8u8..=u8::MAX) {
        prop_assert!(severity_name(value).is_none());
        prop_assert!(Severity::try_from(value).is_err());
    }

    #[test]
    fn test_severity_json_serialization(level in any_severity()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(json.trim_matches('"'), level.name());
        let parsed: Severity = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, level);
    }
}

#[test]
fn test_unrecognized_name_and_value() {
    assert!(matches!(
        severity_from_name("BOGUS"),
        Err(LoggerError::InvalidLevelName(name)) if name == "BOGUS"
    ));
    assert_eq!(severity_name(99), None);
    assert!(matches!(Severity::try_from(99u8), Err(LoggerError::InvalidLevelValue(99))));
}

// ============================================================================
// Binary payloads
// ============================================================================

proptest! {
    #[test]
    fn test_payload_length_boundary(len in 0usize..=(LOG_LINE_SIZE_MAX * 2 + 2)) {
        let bytes = vec![0xabu8; len];
        match BinaryPayload::new(&bytes) {
            Ok(payload) => {
                prop_assert!(len <= LOG_LINE_SIZE_MAX);
                prop_assert_eq!(usize::from(payload.len()), len);
            }
            Err(LoggerError::PayloadTooLarge { len: rejected, max }) => {
                prop_assert!(len > LOG_LINE_SIZE_MAX);
                prop_assert_eq!(rejected, len);
                prop_assert_eq!(max, LOG_LINE_SIZE_MAX);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
