//! SpanSource contract compliance helpers.
//!
//! These functions verify that a `SpanSource` implementation satisfies the
//! table contract. Reused across the strategy test modules (Midpoint,
//! Exact).

use crate::source::SpanSource;
use semispan_core::{SpanError, SpanTable};

fn table(source: &dyn SpanSource, radius: i32) -> SpanTable {
    source
        .generate(radius)
        .unwrap_or_else(|e| panic!("{}: generate({radius}) failed: {e}", source.name()))
}

/// Assert the table has exactly `radius + 1` rows.
pub fn assert_row_count(source: &dyn SpanSource, radius: i32) {
    let t = table(source, radius);
    assert_eq!(
        t.len(),
        radius as usize + 1,
        "{}: radius {radius} produced {} rows",
        source.name(),
        t.len()
    );
    assert_eq!(t.radius().get(), radius as u32);
}

/// Assert `table[radius] == 0` and `table[0] == radius`.
pub fn assert_endpoints(source: &dyn SpanSource, radius: i32) {
    let t = table(source, radius);
    let apex = radius as usize;
    assert_eq!(t[apex], 0, "{}: apex span for radius {radius}", source.name());
    assert_eq!(
        t[0], radius as u32,
        "{}: equator span for radius {radius}",
        source.name()
    );
}

/// Assert spans never widen from one row to the row above it.
pub fn assert_monotone(source: &dyn SpanSource, radius: i32) {
    let t = table(source, radius);
    for (row, w) in t.as_slice().windows(2).enumerate() {
        assert!(
            w[0] >= w[1],
            "{}: radius {radius}: row {row} span {} < row {} span {}",
            source.name(),
            w[0],
            row + 1,
            w[1]
        );
    }
}

/// Assert `0 <= span <= radius` on every row.
pub fn assert_bounded(source: &dyn SpanSource, radius: i32) {
    let t = table(source, radius);
    for (row, span) in t.iter().enumerate() {
        assert!(
            span <= radius as u32,
            "{}: radius {radius}: row {row} span {span} exceeds radius",
            source.name()
        );
    }
}

/// Assert two calls return identical tables.
pub fn assert_deterministic(source: &dyn SpanSource, radius: i32) {
    let a = table(source, radius);
    let b = table(source, radius);
    assert_eq!(a, b, "{}: radius {radius} is non-deterministic", source.name());
}

/// Assert the generated table passes the checked constructor.
pub fn assert_well_formed(source: &dyn SpanSource, radius: i32) {
    let t = table(source, radius);
    let rebuilt = SpanTable::from_spans(t.as_slice().to_vec());
    assert_eq!(rebuilt.as_ref(), Ok(&t), "{}: radius {radius}", source.name());
}

/// Assert negative radii are rejected with `InvalidInput`.
pub fn assert_rejects_negative(source: &dyn SpanSource) {
    for radius in [-1, -2, -1000, i32::MIN] {
        assert_eq!(
            source.generate(radius),
            Err(SpanError::InvalidInput {
                radius: i64::from(radius)
            }),
            "{}: radius {radius}",
            source.name()
        );
    }
}

/// Run all 7 compliance checks on a source at `radius`.
pub fn run_full_compliance(source: &dyn SpanSource, radius: i32) {
    assert_row_count(source, radius);
    assert_endpoints(source, radius);
    assert_monotone(source, radius);
    assert_bounded(source, radius);
    assert_deterministic(source, radius);
    assert_well_formed(source, radius);
    assert_rejects_negative(source);
}
