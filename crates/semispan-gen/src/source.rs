//! The `SpanSource` trait and strategy selection.

use crate::exact::ExactSpans;
use crate::midpoint::MidpointSpans;
use semispan_core::{Radius, SpanError, SpanTable};
use std::fmt;

/// Produces a complete [`SpanTable`] for a validated radius.
///
/// Every implementation must return a table of `radius + 1` rows with the
/// apex at `0`, the equator at `radius`, and spans that never widen
/// towards the apex. Implementations are stateless, so one instance can
/// serve any number of threads.
pub trait SpanSource: Send + Sync {
    /// Short identifier used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Build the table for an already-validated radius.
    fn spans(&self, radius: Radius) -> SpanTable;

    /// Validate `radius` and build its table.
    ///
    /// Fails with [`SpanError::InvalidInput`] if `radius < 0`; no table
    /// work is done in that case.
    fn generate(&self, radius: i32) -> Result<SpanTable, SpanError> {
        let radius = Radius::new(radius)?;
        Ok(self.spans(radius))
    }
}

/// Which [`SpanSource`] to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpanStrategy {
    /// Octant midpoint walk with reflection ([`MidpointSpans`]).
    #[default]
    Midpoint,
    /// Per-row largest `x` with `x² + y² <= r²` ([`ExactSpans`]).
    Exact,
}

impl SpanStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [SpanStrategy; 2] = [SpanStrategy::Midpoint, SpanStrategy::Exact];

    /// The source implementing this strategy.
    pub fn source(self) -> &'static dyn SpanSource {
        match self {
            Self::Midpoint => &MidpointSpans,
            Self::Exact => &ExactSpans,
        }
    }

    /// Shorthand for `self.source().generate(radius)`.
    pub fn generate(self, radius: i32) -> Result<SpanTable, SpanError> {
        self.source().generate(radius)
    }
}

impl fmt::Display for SpanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_midpoint() {
        assert_eq!(SpanStrategy::default(), SpanStrategy::Midpoint);
    }

    #[test]
    fn names_are_distinct() {
        assert_eq!(SpanStrategy::Midpoint.to_string(), "midpoint");
        assert_eq!(SpanStrategy::Exact.to_string(), "exact");
    }

    #[test]
    fn every_strategy_rejects_negative_radius() {
        for strategy in SpanStrategy::ALL {
            assert_eq!(
                strategy.generate(-1),
                Err(SpanError::InvalidInput { radius: -1 }),
                "{strategy}"
            );
        }
    }

    #[test]
    fn sources_are_usable_as_trait_objects() {
        let sources: Vec<&dyn SpanSource> =
            SpanStrategy::ALL.iter().map(|s| s.source()).collect();
        for src in sources {
            let table = src.generate(4).unwrap();
            assert_eq!(table.len(), 5);
        }
    }
}
