// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manning summary.
//!
//! Reduces an assignment matrix to per-slice counts. The report is always a
//! direct count over the matrix and is refused for a topology the matrix was
//! not built for.

use crate::error::CoreError;
use crate::matrix::{AssignmentMatrix, SliceAssignment, ZoneOccupancy};
use manning_domain::{TimeOfDay, Topology};
use serde::Serialize;

/// Counts for one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceReport {
    /// Slice label.
    pub time: TimeOfDay,
    /// Staffed car counters across all zones.
    pub car_total: usize,
    /// Staffed motorcycle lanes across all zones.
    pub motor_total: usize,
    /// Staffed positions per zone, in zone order.
    ///
    /// Car counters for a zone that has any, otherwise its motorcycle lanes.
    pub per_zone: Vec<usize>,
}

impl std::fmt::Display for SliceReport {
    /// Renders `HHMM: cars/motor  z1/z2/.../zn`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let zones: Vec<String> = self.per_zone.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}: {}/{}  {}",
            self.time,
            self.car_total,
            self.motor_total,
            zones.join("/")
        )
    }
}

/// Summarizes a matrix slice by slice.
///
/// # Arguments
///
/// * `matrix` - The output of [`assign`](crate::assign)
/// * `topology` - The topology the matrix was built for
///
/// # Errors
///
/// Returns `CoreError::TopologyMismatch` if any slice of the matrix does not
/// have exactly the zones, counters and lanes of `topology`.
pub fn summarize(
    matrix: &AssignmentMatrix,
    topology: &Topology,
) -> Result<Vec<SliceReport>, CoreError> {
    matrix
        .slices()
        .iter()
        .map(|slice| {
            check_topology(slice, topology)?;
            Ok(report_slice(slice))
        })
        .collect()
}

fn report_slice(slice: &SliceAssignment) -> SliceReport {
    let per_zone: Vec<usize> = slice.zones.iter().map(zone_count).collect();

    SliceReport {
        time: slice.time,
        car_total: slice.zones.iter().map(ZoneOccupancy::occupied_counters).sum(),
        motor_total: slice.zones.iter().map(ZoneOccupancy::occupied_lanes).sum(),
        per_zone,
    }
}

fn zone_count(zone: &ZoneOccupancy) -> usize {
    if zone.counters.is_empty() {
        zone.occupied_lanes()
    } else {
        zone.occupied_counters()
    }
}

fn check_topology(slice: &SliceAssignment, topology: &Topology) -> Result<(), CoreError> {
    if slice.zones.len() != topology.zones().len() {
        return Err(CoreError::TopologyMismatch {
            reason: format!(
                "slice {} has {} zones, topology has {}",
                slice.time,
                slice.zones.len(),
                topology.zones().len()
            ),
        });
    }

    for (occupancy, zone) in slice.zones.iter().zip(topology.zones()) {
        if occupancy.zone != zone.name
            || occupancy.counters.len() != zone.counter_count
            || occupancy.lanes.len() != zone.motorcycle_lane_count
        {
            return Err(CoreError::TopologyMismatch {
                reason: format!(
                    "slice {} zone '{}' ({} counters, {} lanes) differs from '{}' ({} counters, {} lanes)",
                    slice.time,
                    occupancy.zone,
                    occupancy.counters.len(),
                    occupancy.lanes.len(),
                    zone.name,
                    zone.counter_count,
                    zone.motorcycle_lane_count
                ),
            });
        }
    }

    Ok(())
}
