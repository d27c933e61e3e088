//! Grid topology, geographic distance, and the diffusion stencil for Clime.
//!
//! This crate owns everything spatial: the [`GeoCoord`] type and
//! [`haversine`] great-circle distance, the [`LatLonGrid`] of [`Cell`]s
//! with its initialization policies, and the one-time assembly of the
//! sparse diffusion operator ([`assemble_diffusion`] into a [`CscMatrix`]).
//!
//! The grid is a torus in the column direction only: columns wrap, rows
//! absorb at the pole rows (no wraparound across the poles). Assembly
//! happens once after construction; the resulting matrix is immutable for
//! the lifetime of the simulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod edge;
pub mod geo;
pub mod grid;
pub mod sparse;
pub mod stencil;

pub use cell::Cell;
pub use edge::AxisBehavior;
pub use geo::{haversine, DistanceUnit, GeoCoord, EARTH_RADIUS_KM};
pub use grid::{InitPolicy, LatLonGrid};
pub use sparse::CscMatrix;
pub use stencil::assemble_diffusion;
