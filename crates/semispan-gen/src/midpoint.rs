//! Octant midpoint walk with diagonal reflection.

use crate::octant::{OctantPoint, OctantWalk};
use crate::source::SpanSource;
use semispan_core::{Radius, SpanTable, SpanTableBuilder};
use smallvec::SmallVec;
use tracing::debug;

/// Inline capacity of the half-table. Walks for radii up to about 40 stay
/// off the heap.
const INLINE_OCTANT: usize = 32;

/// Spans derived from the integer midpoint walk.
///
/// Built in two phases:
///
/// 1. run [`OctantWalk`] from the apex to the diagonal into a half-table;
/// 2. record every point `(x, y)` at its own row and its reflection
///    `(y, x)` at row `x`, then let [`SpanTableBuilder::finish`] pin the
///    apex and equator and fill the remaining rows with the running
///    maximum.
///
/// # Examples
///
/// ```
/// use semispan_gen::{MidpointSpans, SpanSource};
///
/// let table = MidpointSpans.generate(5).unwrap();
/// assert_eq!(table.as_slice(), &[5, 5, 4, 3, 2, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MidpointSpans;

impl MidpointSpans {
    /// Phase 1: the raw octant points, apex excluded.
    pub fn octant(radius: Radius) -> SmallVec<[OctantPoint; INLINE_OCTANT]> {
        OctantWalk::new(radius).collect()
    }
}

impl SpanSource for MidpointSpans {
    fn name(&self) -> &'static str {
        "midpoint"
    }

    fn spans(&self, radius: Radius) -> SpanTable {
        let octant = Self::octant(radius);

        let mut builder = SpanTableBuilder::new(radius);
        for p in &octant {
            builder.record(p.y, p.x);
            builder.record(p.x, p.y);
        }
        debug!(
            radius = radius.get(),
            octant_points = octant.len(),
            observed_rows = builder.recorded_rows(),
            "midpoint walk complete"
        );
        builder.finish()
    }
}
