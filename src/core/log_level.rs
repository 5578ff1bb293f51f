//! Severity definitions and name lookup
//!
//! Severities `Detail` through `Fatal` form a totally ordered band that a
//! logger's threshold filters. `State` and `Trace` sit outside that band: they
//! are switched on and off independently and never compare against the
//! ordered severities.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Detail = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    /// Status snapshots only
    State = 6,
    Trace = 7,
}

impl Severity {
    /// Every severity, in numeric order.
    pub const ALL: [Severity; 8] = [
        Severity::Detail,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::State,
        Severity::Trace,
    ];

    /// The severities a threshold can select, lowest first.
    pub const ORDERED: [Severity; 6] = [
        Severity::Detail,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Detail => "DETAIL",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::State => "STATE",
            Severity::Trace => "TRACE",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this severity belongs to the threshold-filtered band.
    #[inline]
    pub const fn is_ordered(self) -> bool {
        self.as_u8() <= Severity::Fatal.as_u8()
    }

    /// Whether a threshold of `threshold` lets this severity through.
    ///
    /// Always false for `State` and `Trace`, and for an out-of-band threshold.
    #[inline]
    pub const fn passes(self, threshold: Severity) -> bool {
        self.is_ordered() && threshold.is_ordered() && self.as_u8() >= threshold.as_u8()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Severity::Debug => Some(BrightBlack),
            Severity::Warn => Some(BrightYellow),
            Severity::Error => Some(Red),
            Severity::Fatal => Some(Yellow),
            Severity::Detail | Severity::Info | Severity::State | Severity::Trace => None,
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_ordered() && other.is_ordered() {
            Some(self.as_u8().cmp(&other.as_u8()))
        } else {
            None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    /// Case-sensitive: `"info"` is not a severity name.
    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .iter()
            .copied()
            .find(|level| level.name() == s)
            .ok_or_else(|| LoggerError::invalid_level_name(s))
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LoggerError::InvalidLevelValue(value))
    }
}

/// Look up a severity by its canonical name.
///
/// # Errors
///
/// Returns [`LoggerError::InvalidLevelName`] for anything outside the fixed
/// vocabulary. There is no fallback severity.
pub fn severity_from_name(name: &str) -> Result<Severity> {
    name.parse()
}

/// Canonical name of a raw severity value, or `None` if the value names no severity.
pub fn severity_name(value: u8) -> Option<&'static str> {
    Severity::try_from(value).ok().map(Severity::name)
}
