// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assign;
mod capacity;
mod config;
mod error;
mod matrix;
mod summary;

#[cfg(test)]
mod tests;

use manning_domain::{Roster, TimeGrid, Topology};
use serde::Serialize;

// Re-export public types and functions
pub use assign::assign;
pub use capacity::{CapacityAdvisory, capacity_advisory};
pub use config::{
    CounterOrder, DEFAULT_RELEASE_BUFFER_MINUTES, DEFAULT_SLICE_WIDTH_MINUTES, EngineConfig,
    ManningConfig, ZoneFill,
};
pub use error::CoreError;
pub use matrix::{AssignmentMatrix, RejectedOfficer, SliceAssignment, ZoneOccupancy};
pub use summary::{SliceReport, summarize};

/// Output of one full recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManningRun {
    /// Occupancy of every counter and lane per slice.
    pub matrix: AssignmentMatrix,
    /// Per-slice counts derived from `matrix`.
    pub summary: Vec<SliceReport>,
    /// Set when the roster exceeds the topology's positions.
    pub advisory: Option<CapacityAdvisory>,
}

/// Recomputes matrix, summary and capacity advisory for a configuration.
///
/// This is the single entry point a caller re-invokes after any roster edit
/// or shift/operation switch. Nothing is cached between calls.
///
/// # Errors
///
/// Returns a configuration error if the slice grid cannot be generated.
pub fn run(config: &ManningConfig, roster: &Roster) -> Result<ManningRun, CoreError> {
    config.validate()?;
    let grid: TimeGrid = config.time_grid()?;
    let topology: Topology = config.topology();

    let matrix: AssignmentMatrix = assign(&grid, &topology, roster, &config.engine());
    let summary: Vec<SliceReport> = summarize(&matrix, &topology)?;

    Ok(ManningRun {
        matrix,
        advisory: capacity_advisory(roster, &topology, config.shift_kind),
        summary,
    })
}
