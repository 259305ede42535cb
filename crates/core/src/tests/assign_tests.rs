// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    assign_default, base_roster, day_grid, id, night_grid, occupied_indices, single_zone, t,
};
use crate::{AssignmentMatrix, CounterOrder, EngineConfig, ZoneFill, assign};
use manning_domain::{
    DomainError, Officer, OfficerCategory, OperationType, OvertimeBlock, Roster, ShiftKind,
    ShiftWindow, TimeGrid, Topology, Zone, generate_slices,
};
use std::collections::HashSet;

/// A roster mixing every category, some of them night-only.
fn create_mixed_roster() -> Roster {
    let blocks: Vec<OvertimeBlock> = OvertimeBlock::standard_blocks();
    let mut roster: Roster = base_roster(6);
    roster
        .add(Officer::base(id("Late")).with_arrival(t("1230")))
        .unwrap();
    roster
        .add(Officer::base(id("Early")).with_release(t("1800")))
        .unwrap();
    roster
        .add(Officer::overtime(
            id("OT-AM"),
            OvertimeBlock::find(&blocks, "AM").unwrap(),
        ))
        .unwrap();
    roster
        .add(Officer::overtime(
            id("OT-EARLY"),
            OvertimeBlock::find(&blocks, "EARLY").unwrap(),
        ))
        .unwrap();
    roster
        .add(Officer::call_in(id("SOS-Day"), t("1500"), t("1900")))
        .unwrap();
    roster
        .add(Officer::call_in(id("SOS-Night"), t("2330"), t("0300")).on_shift(ShiftKind::Night))
        .unwrap();
    roster
}

fn eligible_at(officer: &Officer, shift: &ShiftWindow, label: &str, buffer: i32) -> bool {
    let offset: i32 = shift.offset_of(t(label));
    let start: i32 = officer
        .availability_start()
        .map_or(i32::MIN, |s| shift.offset_of(s));
    let mut end: i32 = officer
        .availability_end()
        .map_or(i32::MAX, |e| shift.offset_of(e));
    if officer.category() == OfficerCategory::ReleaseAdjusted {
        end -= buffer;
    }
    start <= offset && offset < end
}

#[test]
fn test_assign_is_deterministic() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let roster: Roster = create_mixed_roster();

    for grid in [day_grid(), night_grid()] {
        let first: AssignmentMatrix = assign_default(&grid, &topology, &roster);
        let second: AssignmentMatrix = assign_default(&grid, &topology, &roster);
        assert_eq!(first, second);
    }
}

#[test]
fn test_assign_does_not_mutate_roster() {
    let topology: Topology = Topology::for_operation(OperationType::Departure);
    let roster: Roster = create_mixed_roster();
    let before: Roster = roster.clone();

    let _matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    assert_eq!(roster, before);
}

#[test]
fn test_capacity_bound_per_zone() {
    let topology: Topology = Topology::for_operation(OperationType::Departure);
    let roster: Roster = base_roster(60);

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    for slice in matrix.slices() {
        for (occupancy, zone) in slice.zones.iter().zip(topology.zones()) {
            assert!(occupancy.occupied_counters() <= zone.counter_count);
            assert!(occupancy.occupied_lanes() <= zone.motorcycle_lane_count);
        }
        assert_eq!(slice.placed().count(), topology.capacity());
    }
}

#[test]
fn test_single_placement_per_slice() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let mut roster: Roster = create_mixed_roster();
    for n in 7..=50 {
        roster
            .add(Officer::base(id(&format!("B{n}"))))
            .unwrap();
    }

    for grid in [day_grid(), night_grid()] {
        let matrix: AssignmentMatrix = assign_default(&grid, &topology, &roster);
        for slice in matrix.slices() {
            let placed: Vec<&str> = slice.placed().map(|o| o.value()).collect();
            let unique: HashSet<&str> = placed.iter().copied().collect();
            assert_eq!(placed.len(), unique.len(), "duplicate at {}", slice.time);
        }
    }
}

#[test]
fn test_back_first_fill_uses_highest_indices() {
    let topology: Topology = single_zone(8);

    for k in 0..8 {
        let roster: Roster = base_roster(k);
        let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);
        let expected: Vec<usize> = (8 - k..8).rev().collect();

        for slice in matrix.slices() {
            assert_eq!(occupied_indices(slice, "Zone1"), expected);
        }
    }
}

#[test]
fn test_front_first_policy_uses_lowest_indices() {
    let topology: Topology = single_zone(5);
    let roster: Roster = base_roster(2);
    let config: EngineConfig = EngineConfig {
        counter_order: CounterOrder::FrontFirst,
        ..EngineConfig::default()
    };

    let matrix: AssignmentMatrix = assign(&day_grid(), &topology, &roster, &config);

    assert_eq!(matrix.officer_at(t("1200"), "Zone1", 0), Some(&id("B1")));
    assert_eq!(matrix.officer_at(t("1200"), "Zone1", 1), Some(&id("B2")));
    assert_eq!(matrix.officer_at(t("1200"), "Zone1", 4), None);
}

#[test]
fn test_interleaved_policy_opens_every_zone_first() {
    let topology: Topology =
        Topology::new(vec![Zone::new("North", 4), Zone::new("South", 4)]).unwrap();
    let roster: Roster = base_roster(3);
    let config: EngineConfig = EngineConfig {
        zone_fill: ZoneFill::Interleaved,
        ..EngineConfig::default()
    };

    let matrix: AssignmentMatrix = assign(&day_grid(), &topology, &roster, &config);

    assert_eq!(matrix.officer_at(t("1000"), "North", 3), Some(&id("B1")));
    assert_eq!(matrix.officer_at(t("1000"), "South", 3), Some(&id("B2")));
    assert_eq!(matrix.officer_at(t("1000"), "North", 2), Some(&id("B3")));
    assert_eq!(matrix.officer_at(t("1000"), "South", 2), None);
}

#[test]
fn test_sequential_policy_exhausts_first_zone() {
    let topology: Topology =
        Topology::new(vec![Zone::new("North", 2), Zone::new("South", 2)]).unwrap();
    let roster: Roster = base_roster(3);

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);
    let slice = matrix.slice_at(t("1000")).unwrap();

    assert_eq!(occupied_indices(slice, "North"), vec![1, 0]);
    assert_eq!(occupied_indices(slice, "South"), vec![1]);
}

#[test]
fn test_window_containment() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let roster: Roster = create_mixed_roster();

    for grid in [day_grid(), night_grid()] {
        let shift: &ShiftWindow = grid.shift();
        let matrix: AssignmentMatrix = assign_default(&grid, &topology, &roster);

        for slice in matrix.slices() {
            for placed in slice.placed() {
                let officer: &Officer = roster.get(placed).unwrap();
                assert!(officer.works_shift(shift.kind()));
                assert!(
                    eligible_at(officer, shift, &slice.time.label(), 30),
                    "{placed} placed outside window at {}",
                    slice.time
                );
            }
        }
    }
}

#[test]
fn test_every_eligible_officer_is_placed_when_room_remains() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let roster: Roster = create_mixed_roster();
    let grid = day_grid();
    let matrix: AssignmentMatrix = assign_default(&grid, &topology, &roster);

    for slice in matrix.slices() {
        let expected: usize = roster
            .iter()
            .filter(|o| o.works_shift(ShiftKind::Day))
            .filter(|o| eligible_at(o, grid.shift(), &slice.time.label(), 30))
            .count();
        assert_eq!(slice.placed().count(), expected, "at {}", slice.time);
    }
}

#[test]
fn test_release_buffer_stops_placement_half_hour_early() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::base(id("Tan")).with_release(t("1800")))
        .unwrap();

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    assert_eq!(matrix.officer_at(t("1715"), "Zone1", 3), Some(&id("Tan")));
    for label in ["1730", "1745", "1800", "2200"] {
        assert_eq!(matrix.officer_at(t(label), "Zone1", 3), None, "{label}");
    }
}

#[test]
fn test_release_buffer_is_configurable() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::base(id("Tan")).with_release(t("1800")))
        .unwrap();
    let config: EngineConfig = EngineConfig {
        release_buffer_minutes: 0,
        ..EngineConfig::default()
    };

    let matrix: AssignmentMatrix = assign(&day_grid(), &topology, &roster, &config);

    assert_eq!(matrix.officer_at(t("1745"), "Zone1", 3), Some(&id("Tan")));
    assert_eq!(matrix.officer_at(t("1800"), "Zone1", 3), None);
}

#[test]
fn test_release_buffer_crosses_midnight_backwards() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::base(id("Nox")).with_release(t("0015")))
        .unwrap();

    let matrix: AssignmentMatrix = assign_default(&night_grid(), &topology, &roster);

    // Release 0015 less 30 minutes ends the window at 2345.
    assert!(matrix.rejected().is_empty());
    for label in ["2200", "2300", "2330"] {
        assert_eq!(matrix.officer_at(t(label), "Zone1", 3), Some(&id("Nox")), "{label}");
    }
    for label in ["2345", "0000", "0015", "1000"] {
        assert_eq!(matrix.officer_at(t(label), "Zone1", 3), None, "{label}");
    }
}

#[test]
fn test_full_day_shift_keeps_open_ended_officer_in_final_slice() {
    let start = t("0600");
    let window: ShiftWindow = ShiftWindow::new(ShiftKind::Day, start, start);
    let grid: TimeGrid = generate_slices(window, 30).unwrap();
    let topology: Topology = single_zone(2);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::base(id("Late")).with_arrival(t("1200")))
        .unwrap();

    let matrix: AssignmentMatrix = assign_default(&grid, &topology, &roster);

    let first = matrix.slices().first().unwrap();
    let last = matrix.slices().last().unwrap();
    assert_eq!(first.time, start);
    assert_eq!(last.time, start);
    assert_eq!(first.zones[0].counters[1], None);
    assert_eq!(last.zones[0].counters[1], Some(id("Late")));
    assert_eq!(matrix.officer_at(t("1200"), "Zone1", 1), Some(&id("Late")));
}

#[test]
fn test_late_arrival_joins_from_arrival_slice() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = base_roster(1);
    roster
        .add(Officer::base(id("Late")).with_arrival(t("1230")))
        .unwrap();

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    assert_eq!(matrix.officer_at(t("1215"), "Zone1", 2), None);
    assert_eq!(matrix.officer_at(t("1230"), "Zone1", 2), Some(&id("Late")));
    assert_eq!(matrix.officer_at(t("2200"), "Zone1", 2), Some(&id("Late")));
}

#[test]
fn test_earlier_roster_entry_wins_tie() {
    let topology: Topology = single_zone(1);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::call_in(id("First"), t("1200"), t("1400")))
        .unwrap();
    roster.add(Officer::base(id("Second"))).unwrap();

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    assert_eq!(matrix.officer_at(t("1145"), "Zone1", 0), Some(&id("Second")));
    assert_eq!(matrix.officer_at(t("1200"), "Zone1", 0), Some(&id("First")));
    assert_eq!(matrix.officer_at(t("1400"), "Zone1", 0), Some(&id("Second")));
}

#[test]
fn test_motorcycle_lanes_fill_after_all_counters() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let roster: Roster = base_roster(43);

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);
    let slice = matrix.slice_at(t("1000")).unwrap();
    let lanes = &slice.zone("Arrival Motorcycles").unwrap().lanes;

    assert_eq!(lanes[0], Some(id("B41")));
    assert_eq!(lanes[1], Some(id("B42")));
    assert!(slice.placed().all(|o| o.value() != "B43"));
}

#[test]
fn test_motorcycle_lanes_stay_empty_until_counters_full() {
    let topology: Topology = Topology::for_operation(OperationType::Arrival);
    let roster: Roster = base_roster(39);

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    for slice in matrix.slices() {
        assert_eq!(slice.zone("Arrival Motorcycles").unwrap().occupied_lanes(), 0);
        assert_eq!(slice.zone("Arrival 4").unwrap().occupied_counters(), 9);
    }
}

#[test]
fn test_reversed_window_is_rejected_without_blocking_others() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = base_roster(1);
    roster
        .add(Officer::call_in(id("Backwards"), t("1600"), t("1400")))
        .unwrap();
    roster.add(Officer::base(id("After"))).unwrap();

    let matrix: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);

    assert_eq!(matrix.rejected().len(), 1);
    assert_eq!(matrix.rejected()[0].officer_id, id("Backwards"));
    assert!(matches!(
        matrix.rejected()[0].error,
        DomainError::InvalidAvailabilityWindow { .. }
    ));

    for slice in matrix.slices() {
        assert_eq!(occupied_indices(slice, "Zone1"), vec![3, 2]);
        assert!(slice.placed().all(|o| o.value() != "Backwards"));
    }
}

#[test]
fn test_officers_of_other_shift_are_skipped_not_rejected() {
    let topology: Topology = single_zone(4);
    let mut roster: Roster = Roster::new();
    roster
        .add(Officer::base(id("Nights")).on_shift(ShiftKind::Night))
        .unwrap();
    roster.add(Officer::base(id("Days")).on_shift(ShiftKind::Day)).unwrap();

    let day: AssignmentMatrix = assign_default(&day_grid(), &topology, &roster);
    assert!(day.rejected().is_empty());
    assert_eq!(day.officer_at(t("1200"), "Zone1", 3), Some(&id("Days")));
    assert_eq!(day.officer_at(t("1200"), "Zone1", 2), None);

    let night: AssignmentMatrix = assign_default(&night_grid(), &topology, &roster);
    assert_eq!(night.officer_at(t("0200"), "Zone1", 3), Some(&id("Nights")));
    assert_eq!(night.officer_at(t("0200"), "Zone1", 2), None);
}

#[test]
fn test_empty_roster_leaves_every_position_empty() {
    let topology: Topology = Topology::for_operation(OperationType::Departure);
    let matrix: AssignmentMatrix = assign_default(&night_grid(), &topology, &Roster::new());

    assert_eq!(matrix.slices().len(), 49);
    assert!(matrix.slices().iter().all(|s| s.placed().count() == 0));
}
