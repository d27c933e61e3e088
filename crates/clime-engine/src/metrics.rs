//! Per-tick timing metrics.

use clime_core::TickId;

/// Timing data for a single tick.
///
/// Populated by [`ClimateState::tick`](crate::state::ClimateState::tick);
/// consumers read the most recent value for telemetry. Durations are in
/// microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// The tick this sample describes.
    pub tick: TickId,
    /// The wall-time increment handed to the tick, in seconds. Recorded
    /// for telemetry only; the update recurrence does not consume it.
    pub dt_seconds: f64,
    /// Wall-clock time for the whole tick.
    pub total_us: u64,
    /// Time spent in the diffusion matvec and relaxation.
    pub diffusion_us: u64,
    /// Time spent projecting vectors and recomputing albedo.
    pub feedback_us: u64,
}
