//! Log verbosity for the client boundary

use std::fmt;

/// Boundary log verbosity
///
/// Raw values match the published C constants and control the logging
/// collaborator, never the pipeline's control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i32)]
pub enum LogLevel {
    Info = 0,
    Warn = 1,
    Error = 2,
}

impl LogLevel {
    /// Parse the raw boundary value
    pub fn from_raw(raw: i32) -> Option<LogLevel> {
        match raw {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Error),
            _ => None,
        }
    }

    #[inline]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Default tracing filter directive for this level
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(LogLevel::from_raw(level.as_raw()), Some(level));
        }
        assert_eq!(LogLevel::from_raw(3), None);
        assert_eq!(LogLevel::from_raw(-1), None);
    }
}
