//! The per-cell record: fixed identity plus mutable simulated attributes.

use crate::geo::GeoCoord;
use clime_core::{Attribute, CellIndex};

/// One grid cell.
///
/// Identity and position (`index`, `row`, `column`, `coord`) are fixed at
/// construction and exposed through accessors. The simulated attributes
/// are plain public fields; they are rewritten by the per-tick projection
/// and by explicit mutation entry points.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    index: CellIndex,
    row: u32,
    column: u32,
    coord: GeoCoord,
    /// Air temperature, degrees. Rewritten by the tick projection.
    pub temperature: f64,
    /// Terrain altitude. Positive selects the water albedo under this
    /// model's sign convention.
    pub altitude: i32,
    /// Surface albedo in `[0, 1]`. Rewritten by the feedback rule.
    pub albedo: f64,
    /// Air humidity, non-negative.
    pub humidity: f64,
    /// Air pressure. Initialized to zero and never updated.
    pub pressure: f64,
}

impl Cell {
    pub(crate) fn new(
        index: CellIndex,
        row: u32,
        column: u32,
        coord: GeoCoord,
        temperature: f64,
        altitude: i32,
    ) -> Self {
        Self {
            index,
            row,
            column,
            coord,
            temperature,
            altitude,
            albedo: 0.5,
            humidity: 0.0,
            pressure: 0.0,
        }
    }

    /// Row-major linear index.
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Grid row.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Grid column.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Geographic coordinate, degrees.
    pub fn coord(&self) -> GeoCoord {
        self.coord
    }

    /// Read one simulated attribute, widened to `f64`.
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Temperature => self.temperature,
            Attribute::Humidity => self.humidity,
            Attribute::Altitude => f64::from(self.altitude),
            Attribute::Albedo => self.albedo,
            Attribute::Pressure => self.pressure,
        }
    }
}
