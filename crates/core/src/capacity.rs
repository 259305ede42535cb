// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use manning_domain::{Roster, ShiftKind, Topology};
use serde::Serialize;

/// Warning that the roster holds more officers than there are positions.
///
/// This is advisory only; the engine leaves the surplus unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityAdvisory {
    /// Officers on the roster who work the computed shift.
    pub roster_size: usize,
    /// Counters plus motorcycle lanes.
    pub capacity: usize,
    /// Officers that can never be placed at the same time.
    pub excess: usize,
}

impl std::fmt::Display for CapacityAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Roster of {} officers exceeds {} positions by {}",
            self.roster_size, self.capacity, self.excess
        )
    }
}

/// Compares the officers working `shift` to the positions of `topology`.
///
/// Officers restricted to the other shift are never placed and are not
/// counted. Returns `None` when everyone fits.
#[must_use]
pub fn capacity_advisory(
    roster: &Roster,
    topology: &Topology,
    shift: ShiftKind,
) -> Option<CapacityAdvisory> {
    let roster_size: usize = roster
        .iter()
        .filter(|officer| officer.works_shift(shift))
        .count();
    let capacity: usize = topology.capacity();

    (roster_size > capacity).then(|| CapacityAdvisory {
        roster_size,
        capacity,
        excess: roster_size - capacity,
    })
}
