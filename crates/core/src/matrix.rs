// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use manning_domain::{DomainError, OfficerId, ShiftWindow, TimeOfDay, Zone};
use serde::{Serialize, Serializer};

/// Occupancy of one zone during one slice.
///
/// `counters[i]` is counter `i` of the zone, `lanes[j]` motorcycle lane `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneOccupancy {
    /// The zone name.
    pub zone: String,
    /// Officer at each counter, `None` when the counter is closed.
    pub counters: Vec<Option<OfficerId>>,
    /// Officer at each motorcycle lane, `None` when the lane is closed.
    pub lanes: Vec<Option<OfficerId>>,
}

impl ZoneOccupancy {
    pub(crate) fn empty(zone: &Zone) -> Self {
        Self {
            zone: zone.name.clone(),
            counters: vec![None; zone.counter_count],
            lanes: vec![None; zone.motorcycle_lane_count],
        }
    }

    /// Number of staffed counters.
    #[must_use]
    pub fn occupied_counters(&self) -> usize {
        self.counters.iter().flatten().count()
    }

    /// Number of staffed motorcycle lanes.
    #[must_use]
    pub fn occupied_lanes(&self) -> usize {
        self.lanes.iter().flatten().count()
    }
}

/// Occupancy of every zone during one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceAssignment {
    /// Slice label.
    pub time: TimeOfDay,
    /// Zones in topology order.
    pub zones: Vec<ZoneOccupancy>,
}

impl SliceAssignment {
    /// Iterates every officer placed in this slice, counters before lanes.
    pub fn placed(&self) -> impl Iterator<Item = &OfficerId> {
        self.zones
            .iter()
            .flat_map(|z| z.counters.iter().flatten())
            .chain(self.zones.iter().flat_map(|z| z.lanes.iter().flatten()))
    }

    /// Returns the zone with `name`.
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&ZoneOccupancy> {
        self.zones.iter().find(|z| z.zone == name)
    }
}

/// An officer left out of the computation because their record is invalid
/// for the shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedOfficer {
    /// The rejected officer.
    pub officer_id: OfficerId,
    /// Why the record was rejected.
    #[serde(serialize_with = "serialize_display")]
    pub error: DomainError,
}

fn serialize_display<S: Serializer>(err: &DomainError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(err)
}

/// The full occupancy of a shift, rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentMatrix {
    pub(crate) shift: ShiftWindow,
    pub(crate) slices: Vec<SliceAssignment>,
    pub(crate) rejected: Vec<RejectedOfficer>,
}

impl AssignmentMatrix {
    /// Returns the shift the matrix covers.
    #[must_use]
    pub const fn shift(&self) -> &ShiftWindow {
        &self.shift
    }

    /// Returns the slices in shift order.
    #[must_use]
    pub fn slices(&self) -> &[SliceAssignment] {
        &self.slices
    }

    /// Returns officers whose records were rejected, in roster order.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedOfficer] {
        &self.rejected
    }

    /// Returns the slice labelled `time`.
    #[must_use]
    pub fn slice_at(&self, time: TimeOfDay) -> Option<&SliceAssignment> {
        self.slices.iter().find(|s| s.time == time)
    }

    /// Returns the officer at `counter` of `zone` during the slice `time`.
    #[must_use]
    pub fn officer_at(&self, time: TimeOfDay, zone: &str, counter: usize) -> Option<&OfficerId> {
        self.slice_at(time)?
            .zone(zone)?
            .counters
            .get(counter)?
            .as_ref()
    }
}
