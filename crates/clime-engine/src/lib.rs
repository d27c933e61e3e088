//! Climate state, tick update, and fixed-step driver for Clime.
//!
//! [`ClimateState`] owns the full simulation: the cell grid, the sparse
//! diffusion operator, and the temperature/humidity state vectors. Each
//! [`tick`](ClimateState::tick) relaxes the temperature field toward its
//! neighbour-diffused value, projects the vectors back onto the cells,
//! and recomputes per-cell albedo.
//!
//! [`FixedStepDriver`] paces an external loop: it accumulates real
//! elapsed time and drains it in fixed logical steps, with a catch-up
//! cap and an optional total-tick budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod feedback;
pub mod metrics;
pub mod state;

pub use config::{ClimateConfig, ConfigError};
pub use driver::{DriverReport, FixedStepDriver, DEFAULT_TIMESTEP_MS, MAX_CATCH_UP_STEPS};
pub use feedback::{albedo_for, ALBEDO_ICE, ALBEDO_LAND, ALBEDO_WATER};
pub use metrics::StepMetrics;
pub use state::ClimateState;
