//! Fixed-timestep pacing for an external render/update loop.
//!
//! The driver accumulates real elapsed time and drains it in fixed
//! logical steps. Two safety valves bound the work it will do:
//!
//! - a per-call catch-up cap ([`MAX_CATCH_UP_STEPS`]) that drops the
//!   remaining backlog instead of spiralling on slow frames, and
//! - an optional total-tick budget that halts the driver permanently
//!   once spent.
//!
//! Both valves live here, not in [`ClimateState`] — the state itself has
//! no opinion about wall time.

use clime_core::Attribute;

use crate::config::ConfigError;
use crate::state::ClimateState;

/// Logical steps drained per `advance` call before the backlog is
/// dropped.
pub const MAX_CATCH_UP_STEPS: u32 = 240;

/// Default logical timestep: 60 steps per second, in milliseconds.
pub const DEFAULT_TIMESTEP_MS: f64 = 1000.0 / 60.0;

/// What one [`FixedStepDriver::advance`] call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverReport {
    /// Ticks executed during this call.
    pub ticks_run: u32,
    /// The catch-up cap was hit and the remaining backlog discarded.
    pub backlog_dropped: bool,
    /// The driver is halted (tick budget spent); no further ticks will
    /// ever run.
    pub halted: bool,
}

/// Accumulator-based fixed-timestep driver.
///
/// # Examples
///
/// ```
/// use clime_engine::{ClimateConfig, ClimateState, FixedStepDriver, DEFAULT_TIMESTEP_MS};
///
/// let mut state = ClimateState::new(ClimateConfig {
///     rows: 4,
///     cols: 4,
///     ..ClimateConfig::default()
/// })
/// .unwrap();
/// let mut driver = FixedStepDriver::new(DEFAULT_TIMESTEP_MS).unwrap();
///
/// // 100 ms of wall time drains five full steps of ~16.7 ms.
/// let report = driver.advance(&mut state, 100.0);
/// assert_eq!(report.ticks_run, 5);
/// ```
#[derive(Clone, Debug)]
pub struct FixedStepDriver {
    timestep_ms: f64,
    accumulator_ms: f64,
    total_ticks: u64,
    tick_budget: Option<u64>,
    halted: bool,
}

impl FixedStepDriver {
    /// Create a driver with the given logical timestep in milliseconds.
    ///
    /// Returns `Err(ConfigError::InvalidTimestep)` unless the timestep
    /// is finite and positive.
    pub fn new(timestep_ms: f64) -> Result<Self, ConfigError> {
        if !timestep_ms.is_finite() || timestep_ms <= 0.0 {
            return Err(ConfigError::InvalidTimestep { value: timestep_ms });
        }
        Ok(Self {
            timestep_ms,
            accumulator_ms: 0.0,
            total_ticks: 0,
            tick_budget: None,
            halted: false,
        })
    }

    /// Halt the driver permanently after `budget` total ticks.
    pub fn with_tick_budget(mut self, budget: u64) -> Self {
        self.tick_budget = Some(budget);
        self
    }

    /// The logical timestep, milliseconds.
    pub fn timestep_ms(&self) -> f64 {
        self.timestep_ms
    }

    /// Ticks executed across all `advance` calls.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Whether the tick budget has been spent.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Feed `elapsed_ms` of wall time into the accumulator and drain it
    /// in fixed steps.
    ///
    /// Each drained step calls [`ClimateState::tick`] with the logical
    /// timestep and emits average/maximum temperature diagnostics at
    /// debug level.
    pub fn advance(&mut self, state: &mut ClimateState, elapsed_ms: f64) -> DriverReport {
        let mut report = DriverReport::default();
        if self.halted {
            report.halted = true;
            return report;
        }

        self.accumulator_ms += elapsed_ms;
        while self.accumulator_ms >= self.timestep_ms {
            if let Some(budget) = self.tick_budget {
                if self.total_ticks >= budget {
                    self.halted = true;
                    report.halted = true;
                    tracing::warn!(total_ticks = self.total_ticks, "tick budget spent, halting");
                    break;
                }
            }

            let metrics = state.tick(self.timestep_ms);
            self.accumulator_ms -= self.timestep_ms;
            self.total_ticks += 1;
            report.ticks_run += 1;
            tracing::debug!(
                tick = %metrics.tick,
                avg_temperature = state.average(Attribute::Temperature),
                max_temperature = state.max(Attribute::Temperature),
                total_us = metrics.total_us,
                "tick complete"
            );

            if report.ticks_run >= MAX_CATCH_UP_STEPS {
                // Slow frame: discard the backlog rather than spiral.
                self.accumulator_ms = 0.0;
                report.backlog_dropped = true;
                tracing::warn!(steps = report.ticks_run, "catch-up cap hit, dropping backlog");
                break;
            }
        }
        report
    }
}
