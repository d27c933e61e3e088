//! The owned simulation state and its per-tick update.

use std::time::Instant;

use clime_core::{Attribute, CellIndex, GridError, TickId};
use clime_space::{assemble_diffusion, Cell, CscMatrix, LatLonGrid};

use crate::config::{ClimateConfig, ConfigError};
use crate::feedback;
use crate::metrics::StepMetrics;

/// The complete climate simulation state.
///
/// Owns the cell grid, the sparse diffusion operator, and the
/// temperature/humidity state vectors. Constructed once from a
/// [`ClimateConfig`]; advanced by [`tick`](Self::tick); destroyed when
/// dropped. All mutation goes through `&mut self` methods, so the borrow
/// checker rules out mutation racing an in-progress tick.
///
/// The state vectors — not the cell attributes — are the integration
/// variables. They start at zero regardless of the initialization
/// policy; cells keep their policy temperature until the first tick's
/// projection overwrites it.
///
/// # Examples
///
/// ```
/// use clime_core::{Attribute, CellIndex};
/// use clime_engine::{ClimateConfig, ClimateState};
/// use clime_space::InitPolicy;
///
/// let mut state = ClimateState::new(ClimateConfig {
///     rows: 4,
///     cols: 4,
///     init: InitPolicy::FlatZero,
///     ..ClimateConfig::default()
/// })
/// .unwrap();
///
/// state.set_seed(CellIndex(5), 10_000.0).unwrap();
/// state.tick(1000.0 / 60.0);
/// assert!(state.max(Attribute::Temperature) > 0.0);
/// ```
#[derive(Debug)]
pub struct ClimateState {
    config: ClimateConfig,
    grid: LatLonGrid,
    diffusion: CscMatrix,
    temperature: Vec<f64>,
    humidity: Vec<f64>,
    scratch: Vec<f64>,
    current_tick: TickId,
}

impl ClimateState {
    /// Build a simulation from a validated configuration.
    ///
    /// Validates, constructs the grid under the configured policy, and
    /// assembles the diffusion operator. The operator is fixed from here
    /// on; later altitude edits do not rebuild it.
    pub fn new(config: ClimateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = LatLonGrid::new(config.rows, config.cols, &config.init)?;
        let diffusion = assemble_diffusion(&grid)?;
        let cell_count = grid.cell_count();
        Ok(Self {
            config,
            grid,
            diffusion,
            temperature: vec![0.0; cell_count],
            humidity: vec![0.0; cell_count],
            scratch: vec![0.0; cell_count],
            current_tick: TickId::default(),
        })
    }

    /// The configuration this state was built from.
    pub fn config(&self) -> &ClimateConfig {
        &self.config
    }

    /// The cell grid.
    pub fn grid(&self) -> &LatLonGrid {
        &self.grid
    }

    /// The assembled diffusion operator.
    pub fn diffusion_matrix(&self) -> &CscMatrix {
        &self.diffusion
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Cell by linear index.
    pub fn cell(&self, index: CellIndex) -> Result<&Cell, GridError> {
        self.grid.cell(index)
    }

    /// Cell by `(row, column)` position.
    pub fn cell_at(&self, row: u32, column: u32) -> Result<&Cell, GridError> {
        self.grid.cell_at(row, column)
    }

    /// Read-only view of the temperature state vector.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Read-only view of the humidity state vector.
    pub fn humidity(&self) -> &[f64] {
        &self.humidity
    }

    /// Force one temperature-vector entry to a value.
    ///
    /// Writes the vector only; the cell's displayed temperature catches
    /// up at the next tick's projection. Used to inject a thermal
    /// anomaly before the loop starts.
    pub fn set_seed(&mut self, index: CellIndex, value: f64) -> Result<(), GridError> {
        let cell_count = self.temperature.len();
        let slot = self
            .temperature
            .get_mut(index.as_usize())
            .ok_or(GridError::IndexOutOfBounds { index, cell_count })?;
        *slot = value;
        Ok(())
    }

    /// Set the altitude of the cell at `(row, column)`.
    ///
    /// The single mutation entry point for input layers. Takes effect on
    /// the next tick's feedback pass; the diffusion operator is NOT
    /// rebuilt.
    pub fn set_altitude_at(&mut self, row: u32, column: u32, value: i32) -> Result<(), GridError> {
        self.grid.cell_at_mut(row, column)?.altitude = value;
        Ok(())
    }

    /// Reset every cell's temperature to a cosine-of-latitude profile.
    ///
    /// `temperature = -10 + cos(latitude) * 60`: warm equator, frozen
    /// poles. Writes both the state vector and the cell projection so
    /// the profile is visible before the next tick.
    pub fn set_temperature_by_latitude(&mut self) {
        for cell in self.grid.cells_mut() {
            let t = -10.0 + (cell.coord().lat * 2.0 * std::f64::consts::PI / 360.0).cos() * 60.0;
            self.temperature[cell.index().as_usize()] = t;
            cell.temperature = t;
        }
    }

    /// Advance the simulation by one logical step.
    ///
    /// `delta_ms` is recorded in the returned [`StepMetrics`] as
    /// `dt_seconds`; the update recurrence itself is fixed-step and does
    /// not consume it.
    ///
    /// Order within the tick: temperature relaxation against the
    /// diffusion operator, optional humidity relaxation, projection of
    /// the vectors onto the cells, then the albedo feedback rule over
    /// the projected values.
    pub fn tick(&mut self, delta_ms: f64) -> StepMetrics {
        let started = Instant::now();
        let dt_seconds = delta_ms / 1000.0;
        let c = self.config.diffusion_coefficient;

        // temperature' = c * (D x temperature) + (1 - c) * temperature
        self.diffusion.mul_vec(&self.temperature, &mut self.scratch);
        for (t, d) in self.temperature.iter_mut().zip(&self.scratch) {
            *t = c * *d + (1.0 - c) * *t;
        }
        if self.config.diffuse_humidity {
            self.diffusion.mul_vec(&self.humidity, &mut self.scratch);
            for (h, d) in self.humidity.iter_mut().zip(&self.scratch) {
                *h = c * *d + (1.0 - c) * *h;
            }
        }
        let diffusion_us = started.elapsed().as_micros() as u64;

        // Project the vectors onto the cells, then let albedo react to
        // the projected values.
        let feedback_started = Instant::now();
        for (i, cell) in self.grid.cells_mut().iter_mut().enumerate() {
            cell.temperature = self.temperature[i];
            cell.humidity = self.humidity[i];
        }
        for cell in self.grid.cells_mut() {
            feedback::apply(cell);
        }
        let feedback_us = feedback_started.elapsed().as_micros() as u64;

        self.current_tick = self.current_tick.next();
        StepMetrics {
            tick: self.current_tick,
            dt_seconds,
            total_us: started.elapsed().as_micros() as u64,
            diffusion_us,
            feedback_us,
        }
    }

    /// Mean of one attribute over all cells.
    pub fn average(&self, attribute: Attribute) -> f64 {
        let total: f64 = self
            .grid
            .cells()
            .iter()
            .map(|cell| cell.attribute(attribute))
            .sum();
        total / self.grid.cell_count() as f64
    }

    /// Maximum of one attribute over all cells.
    pub fn max(&self, attribute: Attribute) -> f64 {
        self.grid
            .cells()
            .iter()
            .map(|cell| cell.attribute(attribute))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clime_space::InitPolicy;

    fn small_state(init: InitPolicy) -> ClimateState {
        ClimateState::new(ClimateConfig {
            rows: 4,
            cols: 4,
            init,
            ..ClimateConfig::default()
        })
        .unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn vectors_start_at_zero_cells_keep_policy_values() {
        let state = small_state(InitPolicy::FlatZero);
        assert!(state.temperature().iter().all(|&t| t == 0.0));
        assert!(state.humidity().iter().all(|&h| h == 0.0));
        assert!(state.grid().cells().iter().all(|c| c.temperature == 10.0));
        assert_eq!(state.current_tick(), TickId(0));
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let err = ClimateState::new(ClimateConfig {
            rows: 0,
            ..ClimateConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { .. }));
    }

    // ── Mutation entry points ───────────────────────────────────

    #[test]
    fn set_seed_writes_the_vector_not_the_cell() {
        let mut state = small_state(InitPolicy::FlatZero);
        state.set_seed(CellIndex(5), 10_000.0).unwrap();
        assert_eq!(state.temperature()[5], 10_000.0);
        assert_eq!(state.cell(CellIndex(5)).unwrap().temperature, 10.0);
    }

    #[test]
    fn set_seed_out_of_bounds_fails() {
        let mut state = small_state(InitPolicy::FlatZero);
        assert!(matches!(
            state.set_seed(CellIndex(16), 1.0),
            Err(GridError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn set_altitude_at_leaves_the_matrix_alone() {
        let mut state = small_state(InitPolicy::FlatZero);
        let before = state.diffusion_matrix().clone();
        state.set_altitude_at(1, 2, 3).unwrap();
        assert_eq!(state.cell_at(1, 2).unwrap().altitude, 3);
        assert_eq!(state.diffusion_matrix(), &before);
    }

    #[test]
    fn latitude_profile_is_warm_at_the_equator() {
        let mut state = small_state(InitPolicy::FlatZero);
        state.set_temperature_by_latitude();
        // Row 2 of a 4-row grid sits at latitude 0.
        let equator = state.cell_at(2, 0).unwrap();
        assert!((equator.temperature - 50.0).abs() < 1e-12);
        // Row 0 sits at the pole: -10 + cos(90 deg) * 60 = -10.
        let pole = state.cell_at(0, 0).unwrap();
        assert!((pole.temperature - -10.0).abs() < 1e-12);
        assert_eq!(state.temperature()[0], pole.temperature);
    }

    // ── Tick update ─────────────────────────────────────────────

    #[test]
    fn tick_projects_vectors_onto_cells() {
        let mut state = small_state(InitPolicy::FlatZero);
        state.tick(16.0);
        // Zero vector diffuses to zero; the projection overwrites the
        // policy temperature.
        assert!(state.grid().cells().iter().all(|c| c.temperature == 0.0));
        assert_eq!(state.current_tick(), TickId(1));
    }

    #[test]
    fn delta_is_recorded_but_does_not_change_the_result() {
        let mut a = small_state(InitPolicy::FlatZero);
        let mut b = small_state(InitPolicy::FlatZero);
        a.set_seed(CellIndex(5), 100.0).unwrap();
        b.set_seed(CellIndex(5), 100.0).unwrap();

        let ma = a.tick(16.0);
        let mb = b.tick(16_000.0);
        assert!((ma.dt_seconds - 0.016).abs() < 1e-12);
        assert!((mb.dt_seconds - 16.0).abs() < 1e-12);
        assert_eq!(a.temperature(), b.temperature());
    }

    #[test]
    fn humidity_holds_its_value_by_default() {
        let mut state = small_state(InitPolicy::FlatZero);
        state.humidity.fill(0.4);
        state.tick(16.0);
        assert!(state.humidity().iter().all(|&h| h == 0.4));
        assert!(state.grid().cells().iter().all(|c| c.humidity == 0.4));
    }

    #[test]
    fn humidity_diffuses_when_opted_in() {
        let mut state = ClimateState::new(ClimateConfig {
            rows: 4,
            cols: 4,
            diffuse_humidity: true,
            ..ClimateConfig::default()
        })
        .unwrap();
        state.humidity[5] = 1.0;
        state.tick(16.0);
        assert!(state.humidity()[5] < 1.0);
        assert!(state.humidity()[4] > 0.0);
    }

    #[test]
    fn feedback_runs_on_projected_values() {
        // FlatOne: altitude 1 everywhere, vector projects temperature 0,
        // which is not below freezing, so every cell reads as water.
        let mut state = small_state(InitPolicy::FlatOne);
        state.tick(16.0);
        assert!(state
            .grid()
            .cells()
            .iter()
            .all(|c| c.albedo == crate::feedback::ALBEDO_WATER));
    }

    #[test]
    fn frozen_cells_read_as_ice_after_the_tick() {
        let mut state = small_state(InitPolicy::FlatOne);
        for slot in state.temperature.iter_mut() {
            *slot = -5.0;
        }
        state.tick(16.0);
        assert!(state
            .grid()
            .cells()
            .iter()
            .all(|c| c.albedo == crate::feedback::ALBEDO_ICE));
    }

    // ── Aggregates ──────────────────────────────────────────────

    #[test]
    fn average_and_max_read_the_cells() {
        let mut state = small_state(InitPolicy::FlatZero);
        assert_eq!(state.average(Attribute::Temperature), 10.0);
        assert_eq!(state.max(Attribute::Temperature), 10.0);
        assert_eq!(state.average(Attribute::Albedo), 0.5);

        state.set_altitude_at(0, 0, 5).unwrap();
        assert_eq!(state.max(Attribute::Altitude), 5.0);
        assert_eq!(state.average(Attribute::Altitude), 5.0 / 16.0);
    }

    #[test]
    fn max_reports_negative_maxima() {
        let mut state = small_state(InitPolicy::FlatZero);
        for slot in state.temperature.iter_mut() {
            *slot = -40.0;
        }
        state.tick(16.0);
        assert_eq!(state.max(Attribute::Temperature), -40.0);
    }
}
