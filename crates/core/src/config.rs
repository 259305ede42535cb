// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration and fill-order policies.

use crate::error::CoreError;
use manning_domain::{OperationType, ShiftKind, TimeGrid, Topology, generate_standard_slices};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default slice width in minutes.
pub const DEFAULT_SLICE_WIDTH_MINUTES: u32 = 15;

/// Default hand-off buffer before a recorded release, in minutes.
pub const DEFAULT_RELEASE_BUFFER_MINUTES: u16 = 30;

/// Order in which the counters of one zone are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterOrder {
    /// Highest index first; front counters stay closed until the back is full.
    #[default]
    BackFirst,
    /// Lowest index first.
    FrontFirst,
}

impl FromStr for CounterOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "back-first" | "back" => Ok(Self::BackFirst),
            "front-first" | "front" => Ok(Self::FrontFirst),
            _ => Err(CoreError::UnknownPolicy {
                policy: "counter order",
                value: s.to_string(),
            }),
        }
    }
}

/// Order in which zones are filled within one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneFill {
    /// Each zone is filled completely before the next one is opened.
    #[default]
    Sequential,
    /// One counter per zone in turn, in zone order.
    Interleaved,
}

impl FromStr for ZoneFill {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "interleaved" => Ok(Self::Interleaved),
            _ => Err(CoreError::UnknownPolicy {
                policy: "zone fill",
                value: s.to_string(),
            }),
        }
    }
}

/// The settings the assignment engine itself consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minutes before a recorded release at which an officer stops being placed.
    pub release_buffer_minutes: u16,
    /// Counter order within a zone.
    pub counter_order: CounterOrder,
    /// Zone order within a slice.
    pub zone_fill: ZoneFill,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            release_buffer_minutes: DEFAULT_RELEASE_BUFFER_MINUTES,
            counter_order: CounterOrder::default(),
            zone_fill: ZoneFill::default(),
        }
    }
}

/// Every recognized option of a manning computation.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManningConfig {
    /// Selects the zone topology.
    pub operation_type: OperationType,
    /// Selects the shift window.
    pub shift_kind: ShiftKind,
    /// Slice granularity in minutes.
    pub slice_width_minutes: u32,
    /// Hand-off buffer for released officers.
    pub release_buffer_minutes: u16,
    /// Counter order within a zone.
    pub counter_order: CounterOrder,
    /// Zone order within a slice.
    pub zone_fill: ZoneFill,
}

impl Default for ManningConfig {
    fn default() -> Self {
        Self {
            operation_type: OperationType::Arrival,
            shift_kind: ShiftKind::Day,
            slice_width_minutes: DEFAULT_SLICE_WIDTH_MINUTES,
            release_buffer_minutes: DEFAULT_RELEASE_BUFFER_MINUTES,
            counter_order: CounterOrder::default(),
            zone_fill: ZoneFill::default(),
        }
    }
}

impl ManningConfig {
    /// Builds a configuration from the caller's string keys.
    ///
    /// # Arguments
    ///
    /// * `operation` - `arrival` or `departure`
    /// * `shift` - `day` (alias `morning`) or `night`
    /// * `slice_width_minutes` - Slice granularity
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a key is unknown or the slice width
    /// is zero. Unknown keys are never defaulted.
    pub fn from_keys(
        operation: &str,
        shift: &str,
        slice_width_minutes: u32,
    ) -> Result<Self, CoreError> {
        let config: Self = Self {
            operation_type: operation.parse()?,
            shift_kind: shift.parse()?,
            slice_width_minutes,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates settings that can be checked without building the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice width is zero.
    pub const fn validate(&self) -> Result<(), CoreError> {
        if self.slice_width_minutes == 0 {
            return Err(CoreError::DomainViolation(
                manning_domain::DomainError::InvalidSliceWidth {
                    minutes: self.slice_width_minutes,
                },
            ));
        }
        Ok(())
    }

    /// Returns the engine subset of this configuration.
    #[must_use]
    pub const fn engine(&self) -> EngineConfig {
        EngineConfig {
            release_buffer_minutes: self.release_buffer_minutes,
            counter_order: self.counter_order,
            zone_fill: self.zone_fill,
        }
    }

    /// Returns the built-in topology for the configured operation type.
    #[must_use]
    pub fn topology(&self) -> Topology {
        Topology::for_operation(self.operation_type)
    }

    /// Generates the slice grid for the configured shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice width is zero or never lands on the
    /// shift end.
    pub fn time_grid(&self) -> Result<TimeGrid, CoreError> {
        Ok(generate_standard_slices(
            self.shift_kind,
            self.slice_width_minutes,
        )?)
    }
}
