//! Clime quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a ClimateConfig and ClimateState
//!   2. Injecting a thermal anomaly with set_seed
//!   3. Pacing the simulation with FixedStepDriver
//!   4. Reading cells and aggregate diagnostics
//!
//! Run with:
//!   cargo run --example quickstart

use clime_core::{Attribute, CellIndex};
use clime_engine::{ClimateConfig, ClimateState, FixedStepDriver, DEFAULT_TIMESTEP_MS};
use clime_space::InitPolicy;

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: u32 = 8;
const COLS: u32 = 8;

// Anomaly position (center of grid).
const SEED_CELL: CellIndex = CellIndex(ROWS / 2 * COLS + COLS / 2);
const SEED_TEMPERATURE: f64 = 10_000.0;

fn main() {
    // Route the driver's per-tick diagnostics to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut state = ClimateState::new(ClimateConfig {
        rows: ROWS,
        cols: COLS,
        init: InitPolicy::FlatOne,
        ..ClimateConfig::default()
    })
    .expect("config is valid");

    state
        .set_seed(SEED_CELL, SEED_TEMPERATURE)
        .expect("seed cell is in bounds");

    // Ten logical ticks, fed in uneven wall-time chunks the way a
    // render loop would deliver them.
    let mut driver = FixedStepDriver::new(DEFAULT_TIMESTEP_MS)
        .expect("timestep is positive")
        .with_tick_budget(10);

    for frame in 0..6 {
        let report = driver.advance(&mut state, 40.0);
        println!(
            "frame {frame}: ran {} tick(s), avg temp {:.3}, max temp {:.3}",
            report.ticks_run,
            state.average(Attribute::Temperature),
            state.max(Attribute::Temperature),
        );
        if report.halted {
            println!("tick budget spent after {} ticks", driver.total_ticks());
            break;
        }
    }

    let seed_cell = state.cell(SEED_CELL).expect("seed cell exists");
    println!(
        "anomaly cell now {:.3} degrees (albedo {})",
        seed_cell.temperature, seed_cell.albedo,
    );
}
