// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Which hall is being manned. Each has its own zone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Arrival hall.
    Arrival,
    /// Departure hall.
    Departure,
}

impl OperationType {
    /// Returns the canonical lowercase key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Departure => "departure",
        }
    }
}

impl FromStr for OperationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "departure" => Ok(Self::Departure),
            _ => Err(DomainError::UnknownOperationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named group of contiguous counters, optionally with motorcycle lanes.
///
/// Counters are addressed by a dense index `0..counter_count`; lanes by
/// `0..motorcycle_lane_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Display name, unique within a topology.
    pub name: String,
    /// Number of car counters.
    pub counter_count: usize,
    /// Number of dedicated motorcycle lanes.
    #[serde(default)]
    pub motorcycle_lane_count: usize,
}

impl Zone {
    /// Creates a zone of car counters without motorcycle lanes.
    #[must_use]
    pub fn new(name: &str, counter_count: usize) -> Self {
        Self {
            name: name.to_string(),
            counter_count,
            motorcycle_lane_count: 0,
        }
    }

    /// Sets the number of motorcycle lanes.
    #[must_use]
    pub const fn with_motorcycle_lanes(mut self, lanes: usize) -> Self {
        self.motorcycle_lane_count = lanes;
        self
    }
}

// (name, counters, motorcycle lanes)
const ARRIVAL_ZONES: &[(&str, usize, usize)] = &[
    ("Arrival 1", 10, 0),
    ("Arrival 2", 10, 0),
    ("Arrival 3", 10, 0),
    ("Arrival 4", 10, 0),
    ("Arrival Motorcycles", 0, 2),
];

const DEPARTURE_ZONES: &[(&str, usize, usize)] = &[
    ("Departure 1", 10, 0),
    ("Departure 2", 8, 0),
    ("Departure 3", 8, 0),
    ("Departure 4", 10, 0),
    ("Departure Motorcycles", 0, 2),
];

/// The ordered zone table of a hall.
///
/// Zone order is processing order and therefore part of the assignment
/// outcome. Deserialization goes through [`Topology::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TopologyRecord")]
pub struct Topology {
    zones: Vec<Zone>,
}

/// Unvalidated wire form of a [`Topology`].
#[derive(Deserialize)]
struct TopologyRecord {
    zones: Vec<Zone>,
}

impl TryFrom<TopologyRecord> for Topology {
    type Error = DomainError;

    fn try_from(record: TopologyRecord) -> Result<Self, Self::Error> {
        Self::new(record.zones)
    }
}

impl Topology {
    /// Creates a topology from an ordered list of zones.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No zones are given
    /// - A zone name is empty
    /// - Two zones share a name
    pub fn new(zones: Vec<Zone>) -> Result<Self, DomainError> {
        if zones.is_empty() {
            return Err(DomainError::InvalidZone(String::from(
                "Topology must contain at least one zone",
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for zone in &zones {
            if zone.name.trim().is_empty() {
                return Err(DomainError::InvalidZone(String::from(
                    "Zone name cannot be empty",
                )));
            }
            if !seen.insert(zone.name.as_str()) {
                return Err(DomainError::InvalidZone(format!(
                    "Zone '{}' is defined more than once",
                    zone.name
                )));
            }
        }

        Ok(Self { zones })
    }

    /// Returns the built-in zone table for an operation type.
    #[must_use]
    pub fn for_operation(operation: OperationType) -> Self {
        let table: &[(&str, usize, usize)] = match operation {
            OperationType::Arrival => ARRIVAL_ZONES,
            OperationType::Departure => DEPARTURE_ZONES,
        };

        Self {
            zones: table
                .iter()
                .map(|(name, counters, lanes)| {
                    Zone::new(name, *counters).with_motorcycle_lanes(*lanes)
                })
                .collect(),
        }
    }

    /// Returns the zones in processing order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Total car counters across all zones.
    #[must_use]
    pub fn total_counters(&self) -> usize {
        self.zones.iter().map(|z| z.counter_count).sum()
    }

    /// Total motorcycle lanes across all zones.
    #[must_use]
    pub fn total_lanes(&self) -> usize {
        self.zones.iter().map(|z| z.motorcycle_lane_count).sum()
    }

    /// Total physical positions (counters plus lanes).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.total_counters() + self.total_lanes()
    }
}
