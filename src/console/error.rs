//! Console error types

/// Console error with code and message
///
/// Never propagated past the dispatcher: it is printed and the console
/// returns to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Unknown command
    UnknownCommand,
    /// E02: Invalid value format
    InvalidValue,
    /// E03: Missing required argument (names the argument)
    MissingArg(&'static str),
    /// E04: Bit index outside the 32-bit register
    BitOutOfRange,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::InvalidValue => "E02",
            Self::MissingArg(_) => "E03",
            Self::BitOutOfRange => "E04",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown command",
            Self::InvalidValue => "invalid value",
            Self::MissingArg(_) => "missing",
            Self::BitOutOfRange => "bit must be between 0 and 31",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingArg(what) => write!(f, "{}: {} {}", self.code(), self.message(), what),
            _ => write!(f, "{}: {}", self.code(), self.message()),
        }
    }
}
