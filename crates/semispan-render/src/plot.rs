//! Symmetric text plot of the outline.

use crate::config::{PlotConfig, RenderError};
use semispan_core::SpanTable;
use tracing::debug;

/// Draw the upper half of the outline, apex row first.
///
/// Each line is `2 * radius + 1` glyphs wide with the marker at columns
/// `radius - span` and `radius + span` (a single marker when the span is
/// zero), and ends with a newline.
///
/// # Examples
///
/// ```
/// use semispan_core::SpanTable;
/// use semispan_render::{render_plot, PlotConfig};
///
/// let table = SpanTable::from_spans(vec![2, 1, 0]).unwrap();
/// let plot = render_plot(&table, &PlotConfig::default()).unwrap();
/// assert_eq!(plot, "  *  \n * * \n*   *\n");
/// ```
pub fn render_plot(table: &SpanTable, config: &PlotConfig) -> Result<String, RenderError> {
    config.validate()?;

    let radius = table.radius().get() as usize;
    let width = 2 * radius + 1;
    let mut out = String::with_capacity((width + 1) * table.len());
    let mut line: Vec<char> = Vec::with_capacity(width);

    for (_, span) in table.apex_to_equator() {
        let span = span as usize;
        line.clear();
        line.resize(width, config.blank);
        line[radius - span] = config.marker;
        line[radius + span] = config.marker;
        out.extend(line.iter());
        out.push('\n');
    }

    debug!(radius, width, rows = table.len(), "plot rendered");
    Ok(out)
}
