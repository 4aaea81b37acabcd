//! The validated [`Radius`] input.

use crate::error::{ParseRadiusError, SpanError};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A non-negative circle radius.
///
/// Constructed from a signed integer so that negative requests can be
/// represented and rejected. Once built, every row index in
/// `0..=radius` is valid.
///
/// # Examples
///
/// ```
/// use semispan_core::Radius;
///
/// let r = Radius::new(5).unwrap();
/// assert_eq!(r.get(), 5);
/// assert_eq!(r.rows(), 6);
/// assert!(Radius::new(-1).is_err());
///
/// let parsed: Radius = " 12 ".parse().unwrap();
/// assert_eq!(parsed.get(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radius(pub(crate) u32);

impl Radius {
    /// Largest accepted radius. Rows are addressed with `i32` on the input
    /// side, so the radius must fit.
    pub const MAX: u32 = i32::MAX as u32;

    /// The degenerate point circle.
    pub const ZERO: Radius = Radius(0);

    /// Validate a requested radius.
    ///
    /// Returns `Err(SpanError::InvalidInput)` if `radius < 0`.
    pub fn new(radius: i32) -> Result<Self, SpanError> {
        u32::try_from(radius)
            .map(Self)
            .map_err(|_| SpanError::InvalidInput {
                radius: i64::from(radius),
            })
    }

    /// The radius as an unsigned integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of rows in a span table for this radius (`radius + 1`).
    pub fn rows(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Radius> for u32 {
    fn from(r: Radius) -> Self {
        r.0
    }
}

impl TryFrom<i32> for Radius {
    type Error = SpanError;

    fn try_from(radius: i32) -> Result<Self, Self::Error> {
        Self::new(radius)
    }
}

impl FromStr for Radius {
    type Err = ParseRadiusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseRadiusError::Empty);
        }
        let value: i64 = input.parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ParseRadiusError::OutOfRange {
                        input: input.to_owned(),
                    }
                }
                _ => ParseRadiusError::NotAnInteger {
                    input: input.to_owned(),
                },
            }
        })?;
        if value < 0 {
            return Err(SpanError::InvalidInput { radius: value }.into());
        }
        let value = i32::try_from(value).map_err(|_| ParseRadiusError::OutOfRange {
            input: input.to_owned(),
        })?;
        Ok(Self::new(value)?)
    }
}
