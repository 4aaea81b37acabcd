//! Row-by-row span listing.

use semispan_core::SpanTable;
use std::fmt;

/// Render `table` as a listing, apex row first.
///
/// ```text
/// Radius: 5
///  y | x (right span)
/// ---|---------------
///  5 | 0
///  4 | 2
/// ...
/// ```
///
/// The row column is right-aligned to the wider of two characters and the
/// digit count of the radius.
pub fn render_listing(table: &SpanTable) -> String {
    Listing(table).to_string()
}

struct Listing<'a>(&'a SpanTable);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radius = self.0.radius().get();
        let width = radius.to_string().len().max(2);

        writeln!(f, "Radius: {radius}")?;
        writeln!(f, "{:>width$} | x (right span)", "y")?;
        writeln!(f, "{}|{}", "-".repeat(width + 1), "-".repeat(15))?;
        for (row, span) in self.0.apex_to_equator() {
            writeln!(f, "{row:>width$} | {span}")?;
        }
        Ok(())
    }
}
