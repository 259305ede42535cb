// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Counter assignment.
//!
//! For every slice of the grid the engine walks a fixed sequence of
//! positions (zones in declared order, counters back-to-front, then
//! motorcycle lanes) and gives each position to the first officer in roster
//! order who is available during the slice and not yet placed in it.
//!
//! ## Invariants
//!
//! - An officer occupies at most one position per slice
//! - Occupied positions per slice never exceed the number of eligible officers
//!   nor the number of counters plus lanes
//! - With `k` eligible officers and a zone of more than `k` counters, exactly
//!   the `k` highest counter indices are occupied (back-first, sequential)
//! - The matrix is rebuilt from scratch; identical inputs give identical output
//!
//! ## Eligibility
//!
//! An officer is eligible for slice `t` when
//! `start <= offset(t) < end`, with offsets taken relative to the shift
//! start so that night shifts compare correctly across midnight. A missing
//! start or end leaves that side open. For released officers `end` is the
//! recorded release minus the release buffer.

use crate::config::{CounterOrder, EngineConfig, ZoneFill};
use crate::matrix::{AssignmentMatrix, RejectedOfficer, SliceAssignment, ZoneOccupancy};
use manning_domain::{
    Officer, OfficerCategory, Roster, ShiftWindow, TimeGrid, TimeOfDay, Topology,
};
use tracing::{debug, trace, warn};

/// One physical position in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Counter { zone: usize, index: usize },
    Lane { zone: usize, index: usize },
}

/// An officer's availability as `[start, end)` in shift-relative minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveWindow {
    start: i32,
    end: i32,
}

impl EffectiveWindow {
    fn for_officer(officer: &Officer, shift: &ShiftWindow, release_buffer_minutes: u16) -> Self {
        let start: i32 = officer
            .availability_start()
            .map_or(i32::MIN, |t| shift.offset_of(t));
        let mut end: i32 = officer
            .availability_end()
            .map_or(i32::MAX, |t| shift.offset_of(t));

        if officer.category() == OfficerCategory::ReleaseAdjusted {
            end = end.saturating_sub(i32::from(release_buffer_minutes));
        }

        Self { start, end }
    }

    const fn contains(&self, offset: i32) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A roster entry that passed validation for this shift.
#[derive(Debug)]
struct Candidate<'r> {
    officer: &'r Officer,
    window: EffectiveWindow,
}

/// Computes the occupancy of every counter and lane for every slice.
///
/// The roster is only read. Officers restricted to another shift are
/// skipped; officers whose window is reversed for this shift are reported in
/// [`AssignmentMatrix::rejected`] and the rest of the roster is still placed.
/// A roster larger than the topology is not an error: the surplus simply
/// stays unplaced.
///
/// # Arguments
///
/// * `grid` - The slices of the shift, in order
/// * `topology` - The zone table, in processing order
/// * `roster` - Officers in insertion (tie-break) order
/// * `config` - Release buffer and fill-order policies
#[must_use]
pub fn assign(
    grid: &TimeGrid,
    topology: &Topology,
    roster: &Roster,
    config: &EngineConfig,
) -> AssignmentMatrix {
    let shift: &ShiftWindow = grid.shift();
    let (candidates, rejected) = prepare_candidates(shift, roster, config);
    let sequence: Vec<Position> = fill_sequence(topology, config);

    let slices: Vec<SliceAssignment> = grid
        .iter_offsets()
        .map(|(time, offset)| assign_slice(time, offset, topology, &candidates, &sequence))
        .collect();

    debug!(
        shift = %shift.kind(),
        slices = slices.len(),
        positions = sequence.len(),
        candidates = candidates.len(),
        rejected = rejected.len(),
        "Computed assignment matrix"
    );

    AssignmentMatrix {
        shift: *shift,
        slices,
        rejected,
    }
}

/// Validates every officer against the shift, keeping roster order.
fn prepare_candidates<'r>(
    shift: &ShiftWindow,
    roster: &'r Roster,
    config: &EngineConfig,
) -> (Vec<Candidate<'r>>, Vec<RejectedOfficer>) {
    let mut candidates: Vec<Candidate<'r>> = Vec::with_capacity(roster.len());
    let mut rejected: Vec<RejectedOfficer> = Vec::new();

    for officer in roster {
        if !officer.works_shift(shift.kind()) {
            trace!(officer = %officer.id(), shift = %shift.kind(), "Officer works another shift");
            continue;
        }

        match officer.validate_window(shift) {
            Ok(()) => candidates.push(Candidate {
                officer,
                window: EffectiveWindow::for_officer(
                    officer,
                    shift,
                    config.release_buffer_minutes,
                ),
            }),
            Err(error) => {
                warn!(officer = %officer.id(), error = %error, "Rejected officer record");
                rejected.push(RejectedOfficer {
                    officer_id: officer.id().clone(),
                    error,
                });
            }
        }
    }

    (candidates, rejected)
}

/// Builds the order in which positions are offered within a slice.
///
/// The sequence depends only on the topology and the policies, so every
/// slice uses the same one.
fn fill_sequence(topology: &Topology, config: &EngineConfig) -> Vec<Position> {
    let per_zone: Vec<Vec<usize>> = topology
        .zones()
        .iter()
        .map(|zone| match config.counter_order {
            CounterOrder::BackFirst => (0..zone.counter_count).rev().collect(),
            CounterOrder::FrontFirst => (0..zone.counter_count).collect(),
        })
        .collect();

    let mut sequence: Vec<Position> = Vec::with_capacity(topology.capacity());

    match config.zone_fill {
        ZoneFill::Sequential => {
            for (zone, indices) in per_zone.iter().enumerate() {
                sequence.extend(
                    indices
                        .iter()
                        .map(|&index| Position::Counter { zone, index }),
                );
            }
        }
        ZoneFill::Interleaved => {
            let depth: usize = per_zone.iter().map(Vec::len).max().unwrap_or(0);
            for round in 0..depth {
                for (zone, indices) in per_zone.iter().enumerate() {
                    if let Some(&index) = indices.get(round) {
                        sequence.push(Position::Counter { zone, index });
                    }
                }
            }
        }
    }

    // Lanes come after every counter, zone order then ascending lane index.
    for (zone, z) in topology.zones().iter().enumerate() {
        sequence.extend((0..z.motorcycle_lane_count).map(|index| Position::Lane { zone, index }));
    }

    sequence
}

fn assign_slice(
    time: TimeOfDay,
    offset: i32,
    topology: &Topology,
    candidates: &[Candidate<'_>],
    sequence: &[Position],
) -> SliceAssignment {
    let mut zones: Vec<ZoneOccupancy> = topology.zones().iter().map(ZoneOccupancy::empty).collect();

    // Each position takes the next eligible officer in roster order. Placed
    // officers are consumed from the iterator, so nobody is placed twice.
    let mut eligible = candidates
        .iter()
        .filter(|c| c.window.contains(offset))
        .map(|c| c.officer.id());

    for position in sequence {
        let Some(id) = eligible.next() else {
            break;
        };
        match *position {
            Position::Counter { zone, index } => zones[zone].counters[index] = Some(id.clone()),
            Position::Lane { zone, index } => zones[zone].lanes[index] = Some(id.clone()),
        }
    }

    SliceAssignment { time, zones }
}
