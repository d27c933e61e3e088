//! Simulation configuration, validation, and engine error types.
//!
//! [`ClimateConfig`] is the single input for constructing a
//! [`ClimateState`](crate::state::ClimateState).
//! [`validate()`](ClimateConfig::validate) is a pure structural pass run
//! before any allocation happens.

use std::error::Error;
use std::fmt;

use clime_core::{AssemblyError, GridError};
use clime_space::InitPolicy;

/// Complete configuration for one simulation.
///
/// Four of the coefficients are reserved: they are validated and carried
/// but no term in the current tick update consumes them.
#[derive(Clone, Debug, PartialEq)]
pub struct ClimateConfig {
    /// Grid rows. Default 100.
    pub rows: u32,
    /// Grid columns. Default 100.
    pub cols: u32,
    /// Initial altitude/temperature assignment.
    pub init: InitPolicy,
    /// Fraction of the neighbour-diffused field blended into the
    /// temperature each tick. Default 0.1; must lie in `[0, 1]`.
    pub diffusion_coefficient: f64,
    /// Reserved: temperature-to-humidity transfer. Default 0.6.
    pub evaporation_coefficient: f64,
    /// Reserved: bulk transport strength. Default 0.9.
    pub transportation_coefficient: f64,
    /// Reserved: incoming solar flux. Default 200.
    pub insolation: f64,
    /// Reserved: radiative loss constant. Default 5e-9.
    pub stefan_boltzmann: f64,
    /// Apply the same relaxation to the humidity vector each tick.
    /// Default `false`: humidity holds its last value.
    pub diffuse_humidity: bool,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            init: InitPolicy::FlatZero,
            diffusion_coefficient: 0.1,
            evaporation_coefficient: 0.6,
            transportation_coefficient: 0.9,
            insolation: 200.0,
            stefan_boltzmann: 5e-9,
            diffuse_humidity: false,
        }
    }
}

impl ClimateConfig {
    /// Validate all structural invariants.
    ///
    /// Checks dimensions and coefficient ranges; reserved coefficients
    /// must still be finite and non-negative so that enabling them later
    /// cannot poison a running simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.diffusion_coefficient.is_finite()
            || !(0.0..=1.0).contains(&self.diffusion_coefficient)
        {
            return Err(ConfigError::InvalidCoefficient {
                name: "diffusion_coefficient",
                value: self.diffusion_coefficient,
            });
        }
        for (name, value) in [
            ("evaporation_coefficient", self.evaporation_coefficient),
            (
                "transportation_coefficient",
                self.transportation_coefficient,
            ),
            ("insolation", self.insolation),
            ("stefan_boltzmann", self.stefan_boltzmann),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// Errors from configuration validation and state construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A coefficient is out of range or non-finite.
    InvalidCoefficient {
        /// Field name of the offending coefficient.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A driver timestep is zero, negative, or non-finite.
    InvalidTimestep {
        /// The rejected value, milliseconds.
        value: f64,
    },
    /// Grid construction failed.
    Grid(GridError),
    /// Diffusion-matrix assembly failed.
    Assembly(AssemblyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be non-zero, got {rows}x{cols}")
            }
            Self::InvalidCoefficient { name, value } => {
                write!(f, "{name} out of range: {value}")
            }
            Self::InvalidTimestep { value } => {
                write!(f, "timestep must be finite and positive, got {value} ms")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Assembly(e) => write!(f, "assembly: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Assembly(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<AssemblyError> for ConfigError {
    fn from(e: AssemblyError) -> Self {
        Self::Assembly(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ClimateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 100);
        assert_eq!(config.cols, 100);
        assert_eq!(config.diffusion_coefficient, 0.1);
        assert!(!config.diffuse_humidity);
    }

    #[test]
    fn zero_dimensions_fail() {
        let config = ClimateConfig {
            rows: 0,
            ..ClimateConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 100 })
        ));
    }

    #[test]
    fn diffusion_coefficient_must_be_a_fraction() {
        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let config = ClimateConfig {
                diffusion_coefficient: bad,
                ..ClimateConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidCoefficient {
                        name: "diffusion_coefficient",
                        ..
                    })
                ),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn reserved_coefficients_must_be_finite() {
        let config = ClimateConfig {
            insolation: f64::NAN,
            ..ClimateConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCoefficient {
                name: "insolation",
                ..
            })
        ));
    }

    #[test]
    fn errors_chain_their_sources() {
        use std::error::Error;
        let err = ConfigError::from(GridError::InvalidDimensions { rows: 0, cols: 0 });
        assert!(err.source().is_some());
        let err = ConfigError::InvalidTimestep { value: -1.0 };
        assert!(err.source().is_none());
    }
}
