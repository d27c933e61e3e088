//! Clime: a toroidal-grid climate diffusion simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Clime sub-crates. For most users, adding `clime` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use clime::prelude::*;
//!
//! // Build a 4x4 world, inject a thermal anomaly, and advance it.
//! let mut state = ClimateState::new(ClimateConfig {
//!     rows: 4,
//!     cols: 4,
//!     init: InitPolicy::FlatZero,
//!     ..ClimateConfig::default()
//! })
//! .unwrap();
//!
//! state.set_seed(CellIndex(5), 10_000.0).unwrap();
//! state.tick(1000.0 / 60.0);
//!
//! assert!(state.max(Attribute::Temperature) > 0.0);
//! assert_eq!(state.current_tick(), TickId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `clime-core` | IDs, the attribute selector, error types |
//! | [`space`] | `clime-space` | Geographic grid, haversine distance, diffusion stencil |
//! | [`engine`] | `clime-engine` | Climate state, tick update, fixed-step driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`clime-core`).
///
/// Contains the strongly-typed identifiers, the [`types::Attribute`]
/// selector for aggregate queries, and the subsystem error enums.
pub use clime_core as types;

/// Grid topology and the diffusion stencil (`clime-space`).
///
/// Provides [`space::LatLonGrid`], the [`space::haversine`] distance
/// oracle, and the one-time [`space::assemble_diffusion`] assembly into
/// a [`space::CscMatrix`].
pub use clime_space as space;

/// Climate state and pacing (`clime-engine`).
///
/// [`engine::ClimateState`] for the simulation itself,
/// [`engine::FixedStepDriver`] for fixed-timestep pacing with catch-up
/// and budget valves.
pub use clime_engine as engine;

/// Common imports for typical Clime usage.
///
/// ```rust
/// use clime::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use clime_core::{Attribute, CellIndex, TickId};

    // Errors
    pub use clime_core::{AssemblyError, GridError};
    pub use clime_engine::ConfigError;

    // Space
    pub use clime_space::{
        assemble_diffusion, haversine, Cell, CscMatrix, DistanceUnit, GeoCoord, InitPolicy,
        LatLonGrid,
    };

    // Engine
    pub use clime_engine::{
        ClimateConfig, ClimateState, DriverReport, FixedStepDriver, StepMetrics,
        DEFAULT_TIMESTEP_MS, MAX_CATCH_UP_STEPS,
    };
}
