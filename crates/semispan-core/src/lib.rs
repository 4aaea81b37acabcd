//! Core types for semicircle span generation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! validated [`Radius`] input, the immutable [`SpanTable`] output, the
//! [`SpanTableBuilder`] that enforces the table invariants, and the error
//! types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod radius;
pub mod table;

pub use error::{ParseRadiusError, SpanError};
pub use radius::Radius;
pub use table::{SpanTable, SpanTableBuilder};
