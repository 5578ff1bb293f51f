//! Source location of a log statement

use std::fmt;
use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the enclosing `#[track_caller]` chain.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn capture() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn test_caller_reports_the_calling_line() {
        let expected_line = line!() + 1;
        let site = capture();
        assert_eq!(site.line(), expected_line);
        assert!(site.file().ends_with("call_site.rs"));
    }

    #[test]
    fn test_display() {
        let site = CallSite::new("src/main.rs", 42);
        assert_eq!(site.to_string(), "src/main.rs:42");
    }
}
