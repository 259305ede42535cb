// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssignmentMatrix, EngineConfig, SliceAssignment, assign};
use manning_domain::{
    Officer, OfficerId, Roster, ShiftKind, TimeGrid, TimeOfDay, Topology, Zone,
    generate_standard_slices,
};

pub fn id(value: &str) -> OfficerId {
    OfficerId::new(value).unwrap()
}

pub fn t(value: &str) -> TimeOfDay {
    TimeOfDay::parse(value).unwrap()
}

pub fn day_grid() -> TimeGrid {
    generate_standard_slices(ShiftKind::Day, 15).unwrap()
}

pub fn night_grid() -> TimeGrid {
    generate_standard_slices(ShiftKind::Night, 15).unwrap()
}

pub fn single_zone(counters: usize) -> Topology {
    Topology::new(vec![Zone::new("Zone1", counters)]).unwrap()
}

/// Roster of `count` base officers named `B1..=Bcount`.
pub fn base_roster(count: usize) -> Roster {
    let mut roster: Roster = Roster::new();
    for n in 1..=count {
        roster.add(Officer::base(id(&format!("B{n}")))).unwrap();
    }
    roster
}

pub fn assign_default(grid: &TimeGrid, topology: &Topology, roster: &Roster) -> AssignmentMatrix {
    assign(grid, topology, roster, &EngineConfig::default())
}

/// Occupied counter indices of `zone`, highest first.
pub fn occupied_indices(slice: &SliceAssignment, zone: &str) -> Vec<usize> {
    let occupancy = slice.zone(zone).unwrap();
    let mut indices: Vec<usize> = occupancy
        .counters
        .iter()
        .enumerate()
        .filter(|(_, officer)| officer.is_some())
        .map(|(index, _)| index)
        .collect();
    indices.reverse();
    indices
}
