//! Text presentation of semicircle span tables.
//!
//! Two views over a [`SpanTable`](semispan_core::SpanTable):
//!
//! - [`render_listing`]: one `row | span` line per row, apex first;
//! - [`render_plot`]: the outline drawn with a marker glyph on a grid
//!   `2 * radius + 1` columns wide, apex first.
//!
//! Neither view changes the table; both are pure functions of it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod listing;
pub mod plot;

pub use config::{PlotConfig, RenderError};
pub use listing::render_listing;
pub use plot::render_plot;
