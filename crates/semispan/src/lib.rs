//! Semispan: per-row spans of a circle's upper-right quadrant, computed with
//! integer arithmetic only.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! semispan sub-crates. For most users, adding `semispan` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use semispan::prelude::*;
//!
//! // Midpoint walk, the default strategy.
//! let table = generate(5).unwrap();
//! assert_eq!(table.as_slice(), &[5, 5, 4, 3, 2, 0]);
//!
//! // Negative radii are rejected without producing a table.
//! assert_eq!(generate(-1), Err(SpanError::InvalidInput { radius: -1 }));
//!
//! // Any strategy through the trait object.
//! let exact = SpanStrategy::Exact.source().spans(Radius::new(5).unwrap());
//! assert_eq!(exact[1], 4);
//!
//! // Text views.
//! let listing = render_listing(&table);
//! assert!(listing.starts_with("Radius: 5\n"));
//! let plot = render_plot(&table, &PlotConfig::default()).unwrap();
//! assert_eq!(plot.lines().next(), Some("     *     "));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `semispan-core` | `Radius`, `SpanTable`, `SpanTableBuilder`, errors |
//! | [`spans`] | `semispan-gen` | `SpanSource`, midpoint and exact backends, `OctantWalk` |
//! | [`render`] | `semispan-render` | Listing and plot rendering, `PlotConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`semispan-core`).
///
/// Contains the validated [`types::Radius`], the immutable
/// [`types::SpanTable`], and the [`types::SpanTableBuilder`] that enforces
/// its invariants.
pub use semispan_core as types;

/// Span generation backends (`semispan-gen`).
///
/// Provides the [`spans::SpanSource`] trait with [`spans::MidpointSpans`] and
/// [`spans::ExactSpans`], plus the raw [`spans::OctantWalk`].
pub use semispan_gen as spans;

/// Text presentation (`semispan-render`).
///
/// [`render::render_listing`] and [`render::render_plot`].
pub use semispan_render as render;

/// Common imports for typical semispan usage.
///
/// ```rust
/// use semispan::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use semispan_core::{Radius, SpanTable};

    // Errors
    pub use semispan_core::{ParseRadiusError, SpanError};
    pub use semispan_render::RenderError;

    // Generation
    pub use semispan_gen::{generate, SpanSource, SpanStrategy};

    // Rendering
    pub use semispan_render::{render_listing, render_plot, PlotConfig};
}
