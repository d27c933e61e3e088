//! The [`Attribute`] selector for per-cell simulated values.

use std::fmt;

/// Selects which simulated per-cell value an aggregate query reads.
///
/// Used by `average`/`max` diagnostics to pick one column of the cell
/// record. `Altitude` is stored as an integer on the cell and widened to
/// `f64` for aggregation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Air temperature, degrees (unbounded).
    Temperature,
    /// Air humidity, non-negative.
    Humidity,
    /// Terrain altitude, integer land/sea discriminator.
    Altitude,
    /// Surface albedo in `[0, 1]`.
    Albedo,
    /// Air pressure. Carried on every cell but never updated.
    Pressure,
}

impl Attribute {
    /// All attributes, in cell-record order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Temperature,
        Attribute::Humidity,
        Attribute::Altitude,
        Attribute::Albedo,
        Attribute::Pressure,
    ];
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Altitude => "altitude",
            Self::Albedo => "albedo",
            Self::Pressure => "pressure",
        };
        write!(f, "{name}")
    }
}
