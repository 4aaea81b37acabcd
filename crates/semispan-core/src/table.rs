//! The immutable [`SpanTable`] and the [`SpanTableBuilder`] that produces it.
//!
//! A finished table always satisfies:
//!
//! 1. `table[radius] == 0` (the apex is a single point),
//! 2. `table[0] == radius` (the equator spans the full radius),
//! 3. `table[row] >= table[row + 1]` (spans shrink towards the apex),
//! 4. every row in `0..=radius` has a value.
//!
//! The builder is the only place a table is mutated. Generators feed it
//! boundary observations in any order and [`SpanTableBuilder::finish`]
//! derives the rest.

use crate::error::SpanError;
use crate::radius::Radius;
use std::ops::Index;

/// Per-row spans of the first-quadrant boundary of a circle.
///
/// Index `0` is the equator, index `radius` is the apex.
///
/// # Examples
///
/// ```
/// use semispan_core::{Radius, SpanTable};
///
/// let table = SpanTable::from_spans(vec![5, 5, 4, 3, 2, 0]).unwrap();
/// assert_eq!(table.radius(), Radius::new(5).unwrap());
/// assert_eq!(table[2], 4);
///
/// let from_apex: Vec<_> = table.apex_to_equator().collect();
/// assert_eq!(from_apex[0], (5, 0));
/// assert_eq!(from_apex[5], (0, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanTable {
    spans: Vec<u32>,
}

impl SpanTable {
    /// Build a table from an existing span vector, checking every invariant.
    ///
    /// Returns `Err(SpanError::MalformedTable)` naming the first offending
    /// row if the vector is empty, too long for a [`Radius`], or breaks an
    /// invariant.
    pub fn from_spans(spans: Vec<u32>) -> Result<Self, SpanError> {
        if spans.is_empty() {
            return Err(SpanError::MalformedTable {
                row: 0,
                reason: "table has no rows",
            });
        }
        let apex = spans.len() - 1;
        if apex > Radius::MAX as usize {
            return Err(SpanError::MalformedTable {
                row: apex,
                reason: "table has more rows than the largest radius allows",
            });
        }
        if spans[0] as usize != apex {
            return Err(SpanError::MalformedTable {
                row: 0,
                reason: "equator span differs from the radius",
            });
        }
        if spans[apex] != 0 {
            return Err(SpanError::MalformedTable {
                row: apex,
                reason: "apex span is not zero",
            });
        }
        if let Some(row) = spans.windows(2).position(|w| w[0] < w[1]) {
            return Err(SpanError::MalformedTable {
                row: row + 1,
                reason: "span wider than the row below",
            });
        }
        Ok(Self { spans })
    }

    /// Radius of the circle this table describes.
    pub fn radius(&self) -> Radius {
        Radius((self.spans.len() - 1) as u32)
    }

    /// Number of rows (`radius + 1`).
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always returns `false`: a table has at least the apex row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Span at `row`, or `None` if `row > radius`.
    pub fn span(&self, row: usize) -> Option<u32> {
        self.spans.get(row).copied()
    }

    /// All spans, equator first.
    pub fn as_slice(&self) -> &[u32] {
        &self.spans
    }

    /// Iterate spans from the equator (row 0) to the apex.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u32>> {
        self.spans.iter().copied()
    }

    /// Iterate `(row, span)` pairs from the apex down to the equator.
    pub fn apex_to_equator(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.spans.iter().copied().enumerate().rev()
    }

    /// Consume the table, returning the span vector.
    pub fn into_vec(self) -> Vec<u32> {
        self.spans
    }
}

impl Index<usize> for SpanTable {
    type Output = u32;

    fn index(&self, row: usize) -> &u32 {
        &self.spans[row]
    }
}

impl<'a> IntoIterator for &'a SpanTable {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[u32]> for SpanTable {
    fn as_ref(&self) -> &[u32] {
        &self.spans
    }
}

/// Accumulates boundary observations and finishes them into a [`SpanTable`].
///
/// Observations may arrive in any order and may repeat a row; the widest
/// span recorded for a row wins. [`finish`](Self::finish) then pins the
/// apex to `0`, fills every row with the running maximum from the apex
/// downwards, and pins the equator to `radius`. The running maximum is
/// what makes the result gap-free and monotone regardless of which rows
/// were observed.
///
/// # Examples
///
/// ```
/// use semispan_core::{Radius, SpanTableBuilder};
///
/// let mut b = SpanTableBuilder::new(Radius::new(4).unwrap());
/// b.record(3, 2);
/// b.record(1, 3);
/// // Rows 0 and 2 were never observed.
/// let table = b.finish();
/// assert_eq!(table.as_slice(), &[4, 3, 2, 2, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct SpanTableBuilder {
    radius: Radius,
    spans: Vec<Option<u32>>,
}

impl SpanTableBuilder {
    /// Start an empty table for `radius`.
    pub fn new(radius: Radius) -> Self {
        Self {
            radius,
            spans: vec![None; radius.rows()],
        }
    }

    /// The radius being built.
    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// Record that the boundary reaches column `span` on `row`.
    ///
    /// Rows above the apex are ignored and spans are capped at the radius;
    /// neither can come out of a correct generator.
    pub fn record(&mut self, row: u32, span: u32) {
        let r = self.radius.get();
        debug_assert!(row <= r, "row {row} above apex {r}");
        debug_assert!(span <= r, "span {span} beyond radius {r}");
        if let Some(slot) = self.spans.get_mut(row as usize) {
            let span = span.min(r);
            *slot = Some(slot.map_or(span, |prev| prev.max(span)));
        }
    }

    /// The widest span recorded so far for `row`, if any.
    pub fn recorded(&self, row: u32) -> Option<u32> {
        self.spans.get(row as usize).copied().flatten()
    }

    /// Number of rows that have at least one observation.
    pub fn recorded_rows(&self) -> usize {
        self.spans.iter().filter(|s| s.is_some()).count()
    }

    /// Derive the complete table.
    pub fn finish(self) -> SpanTable {
        let rows = self.spans.len();
        let apex = rows - 1;
        let mut spans = vec![0u32; rows];
        let mut widest = 0u32;
        for row in (0..apex).rev() {
            widest = widest.max(self.spans[row].unwrap_or(0));
            spans[row] = widest;
        }
        spans[0] = self.radius.get();
        SpanTable { spans }
    }
}
