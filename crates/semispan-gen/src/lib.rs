//! Per-row semicircle spans from integer-only arithmetic.
//!
//! The crate defines the [`SpanSource`] trait, through which every span
//! table is produced, and two stateless backends:
//!
//! - [`MidpointSpans`]: midpoint decision-variable walk over one octant
//!   ([`OctantWalk`]), reflected across the diagonal. Backs [`generate`].
//! - [`ExactSpans`]: largest in-circle column per row by incremental
//!   descent.
//!
//! Both return tables that satisfy the [`SpanTable`] invariants for any
//! non-negative radius and reject negative radii with
//! [`SpanError::InvalidInput`].
//!
//! ```
//! let table = semispan_gen::generate(5).unwrap();
//! assert_eq!(table.as_slice(), &[5, 5, 4, 3, 2, 0]);
//! assert!(semispan_gen::generate(-1).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod exact;
pub mod midpoint;
pub mod octant;
pub mod source;

#[cfg(test)]
pub(crate) mod compliance;

pub use exact::ExactSpans;
pub use midpoint::MidpointSpans;
pub use octant::{OctantPoint, OctantWalk};
pub use semispan_core::{Radius, SpanError, SpanTable};
pub use source::{SpanSource, SpanStrategy};

/// Span table for `radius` using the midpoint walk.
///
/// Fails with [`SpanError::InvalidInput`] if `radius < 0`.
pub fn generate(radius: i32) -> Result<SpanTable, SpanError> {
    MidpointSpans.generate(radius)
}
