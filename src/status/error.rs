use std::fmt;

/// Errors raised when turning text into a [`Status`](super::Status)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
    /// Input was empty or only whitespace
    Empty,
    /// Input did not name one of the known statuses
    Unknown(String),
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStatusError::Empty => write!(f, "Status is empty"),
            ParseStatusError::Unknown(value) => write!(
                f,
                "Unknown status: {} (expected one of Pending, Approved, Completed, Rejected)",
                value
            ),
        }
    }
}

impl std::error::Error for ParseStatusError {}

/// Result type for status parsing
pub type ParseStatusResult<T> = Result<T, ParseStatusError>;
