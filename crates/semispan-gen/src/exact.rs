//! Per-row exact spans by incremental descent.

use crate::source::SpanSource;
use semispan_core::{Radius, SpanTable, SpanTableBuilder};
use tracing::debug;

/// For every row `y`, the largest `x` with `x² + y² <= radius²`.
///
/// Walks rows from the equator to the apex keeping the slack
/// `radius² - x² - y²` up to date with additions only: stepping `y` up
/// costs `2y + 1`, stepping `x` in refunds `2x - 1`. The slack starts at
/// zero on `(radius, 0)`, so `radius²` is never formed.
///
/// Every recorded point lies on or inside the circle. The midpoint walk
/// can overshoot near the apex, where its rows are long flat runs.
///
/// # Examples
///
/// ```
/// use semispan_gen::{ExactSpans, SpanSource};
///
/// let table = ExactSpans.generate(5).unwrap();
/// assert_eq!(table.as_slice(), &[5, 4, 4, 4, 3, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactSpans;

impl SpanSource for ExactSpans {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn spans(&self, radius: Radius) -> SpanTable {
        let r = radius.get();
        let mut builder = SpanTableBuilder::new(radius);
        let mut x = i64::from(r);
        let mut slack = 0i64;
        let mut inward_steps = 0u64;
        for y in 0..=r {
            if y > 0 {
                slack -= 2 * i64::from(y) - 1;
            }
            while slack < 0 {
                slack += 2 * x - 1;
                x -= 1;
                inward_steps += 1;
            }
            builder.record(y, x as u32);
        }
        debug!(radius = r, inward_steps, "exact descent complete");
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn spans(r: i32) -> Vec<u32> {
        ExactSpans.generate(r).unwrap().into_vec()
    }

    #[test]
    fn small_radii() {
        assert_eq!(spans(0), vec![0]);
        assert_eq!(spans(1), vec![1, 0]);
        assert_eq!(spans(2), vec![2, 1, 0]);
        assert_eq!(spans(3), vec![3, 2, 2, 0]);
        assert_eq!(spans(5), vec![5, 4, 4, 4, 3, 0]);
    }

    #[test]
    fn radius_ten() {
        assert_eq!(spans(10), vec![10, 9, 9, 9, 9, 8, 8, 7, 6, 4, 0]);
    }

    #[test]
    fn pythagorean_rows_are_exact() {
        // 3-4-5 and 5-12-13 triangles land on the circle itself.
        let t = ExactSpans.generate(5).unwrap();
        assert_eq!(t[3], 4);
        assert_eq!(t[4], 3);
        let t = ExactSpans.generate(13).unwrap();
        assert_eq!(t[5], 12);
        assert_eq!(t[12], 5);
    }

    #[test]
    fn compliance_small_radii() {
        for r in 0..=64 {
            compliance::run_full_compliance(&ExactSpans, r);
        }
    }

    #[test]
    fn compliance_large_radius() {
        compliance::run_full_compliance(&ExactSpans, 10_000);
    }

    proptest! {
        #[test]
        fn every_row_is_the_widest_inside(r in 0i32..20_000, row_seed in 0u32..u32::MAX) {
            let table = ExactSpans.generate(r).unwrap();
            let r = u64::from(r as u32);
            let y = u64::from(row_seed) % (r + 1);
            let x = u64::from(table[y as usize]);
            prop_assert!(x * x + y * y <= r * r);
            prop_assert!((x + 1) * (x + 1) + y * y > r * r);
        }
    }
}
