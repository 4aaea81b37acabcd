//! Error types for span generation and radius input.
//!
//! [`SpanError`] covers the generator itself; [`ParseRadiusError`] covers
//! turning untrusted text into a [`Radius`](crate::Radius).

use std::error::Error;
use std::fmt;

/// Errors from span generation and span table construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanError {
    /// The requested radius is negative.
    InvalidInput {
        /// The rejected radius.
        radius: i64,
    },
    /// A span vector handed to
    /// [`SpanTable::from_spans`](crate::SpanTable::from_spans) breaks a
    /// table invariant.
    MalformedTable {
        /// First offending row.
        row: usize,
        /// Which invariant was broken.
        reason: &'static str,
    },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::MalformedTable { row, reason } => {
                write!(f, "malformed span table at row {row}: {reason}")
            }
        }
    }
}

impl Error for SpanError {}

/// Errors from parsing a radius out of user-supplied text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseRadiusError {
    /// The input was empty or only whitespace.
    Empty,
    /// The input is not an integer.
    NotAnInteger {
        /// The offending input, trimmed.
        input: String,
    },
    /// The input is an integer but does not fit in a radius.
    OutOfRange {
        /// The offending input, trimmed.
        input: String,
    },
    /// The input parsed but was rejected by the generator contract.
    Invalid(SpanError),
}

impl fmt::Display for ParseRadiusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "radius is empty"),
            Self::NotAnInteger { input } => {
                write!(f, "radius '{input}' is not an integer")
            }
            Self::OutOfRange { input } => {
                write!(
                    f,
                    "radius '{input}' is out of range (maximum {})",
                    i32::MAX
                )
            }
            Self::Invalid(e) => write!(f, "invalid radius: {e}"),
        }
    }
}

impl Error for ParseRadiusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpanError> for ParseRadiusError {
    fn from(e: SpanError) -> Self {
        Self::Invalid(e)
    }
}
