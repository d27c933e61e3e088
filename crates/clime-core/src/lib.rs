//! Core types and errors for the Clime climate simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers, the per-cell attribute selector used
//! by aggregate queries, and the subsystem error enums shared across the
//! Clime workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attribute;
pub mod error;
pub mod id;

pub use attribute::Attribute;
pub use error::{AssemblyError, GridError};
pub use id::{CellIndex, TickId};
