//! The status domain: the closed set of states a record can be in, and the
//! colors each one is painted with.

pub mod error;
pub mod style;

pub use error::*;
pub use style::StatusStyle;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl Status {
    /// Every status, in the order options are listed
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Approved,
        Status::Completed,
        Status::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Completed => "Completed",
            Status::Rejected => "Rejected",
        }
    }

    pub fn style(self) -> &'static StatusStyle {
        StatusStyle::of(self)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Parses a status label, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> ParseStatusResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseStatusError::Empty);
        }

        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStatusError::Unknown(trimmed.to_string()))
    }
}
