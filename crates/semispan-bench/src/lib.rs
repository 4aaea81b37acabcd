//! Benchmark profiles for semispan.
//!
//! - [`BENCH_RADII`]: radii spanning small, medium, and large tables
//! - [`sweep_checksum`]: generate every radius in a range and fold the
//!   spans into one number, so the optimizer cannot drop the work

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use semispan_gen::SpanStrategy;

/// Radii used by the per-radius benchmarks.
pub const BENCH_RADII: &[i32] = &[16, 256, 4_096, 65_536, 1_048_576];

/// Generate every radius in `0..=max_radius` with `strategy` and return the
/// wrapping sum of all spans.
///
/// Returns `None` if `max_radius` is negative.
pub fn sweep_checksum(strategy: SpanStrategy, max_radius: i32) -> Option<u64> {
    if max_radius < 0 {
        return None;
    }
    let source = strategy.source();
    let mut sum = 0u64;
    for r in 0..=max_radius {
        let table = source.generate(r).ok()?;
        sum = table
            .iter()
            .fold(sum, |acc, s| acc.wrapping_add(u64::from(s)));
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_rejects_negative_bound() {
        assert_eq!(sweep_checksum(SpanStrategy::Midpoint, -1), None);
    }

    #[test]
    fn sweep_small_range() {
        // Radii 0..=2 give [0], [1, 0], [2, 1, 0] under both strategies.
        assert_eq!(sweep_checksum(SpanStrategy::Midpoint, 2), Some(4));
        assert_eq!(sweep_checksum(SpanStrategy::Exact, 2), Some(4));
    }

    #[test]
    fn sweep_is_deterministic() {
        let a = sweep_checksum(SpanStrategy::Midpoint, 200);
        let b = sweep_checksum(SpanStrategy::Midpoint, 200);
        assert_eq!(a, b);
    }
}
