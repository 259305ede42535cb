// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Officer records and their availability windows.
//!
//! An officer's window is kept exactly as recorded. The effective window used
//! for slice eligibility (release buffer applied, shift-relative ordering) is
//! derived by the assignment engine on every run.

use crate::error::DomainError;
use crate::shift::{ShiftKind, ShiftWindow};
use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::time;

/// Represents an officer identifier.
///
/// The identifier is the officer's name as entered on the roster and must be
/// unique within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficerId {
    value: String,
}

impl OfficerId {
    /// Creates a new `OfficerId`. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidOfficerId(String::from(
                "Officer id cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for OfficerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Personnel categories with distinct availability semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficerCategory {
    /// Main roster. Available for the whole shift unless adjusted.
    Base,
    /// Works one of the named overtime blocks.
    Overtime,
    /// Called in (SOS) for a caller-supplied window.
    CallIn,
    /// Leaves early; unavailable from `release - buffer` onwards.
    ReleaseAdjusted,
}

impl OfficerCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Overtime => "overtime",
            Self::CallIn => "call_in",
            Self::ReleaseAdjusted => "release_adjusted",
        }
    }
}

impl FromStr for OfficerCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "base" | "regular" => Ok(Self::Base),
            "overtime" | "ot" => Ok(Self::Overtime),
            "call_in" | "callin" | "sos" => Ok(Self::CallIn),
            "release" | "release_adjusted" | "ro" => Ok(Self::ReleaseAdjusted),
            _ => Err(DomainError::UnknownOfficerCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for OfficerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named overtime block with a fixed window, independent of the shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBlock {
    /// Block name, matched case-insensitively.
    pub name: String,
    /// Block start.
    pub start: TimeOfDay,
    /// Block end (exclusive).
    pub end: TimeOfDay,
}

impl OvertimeBlock {
    /// Creates a new overtime block.
    #[must_use]
    pub fn new(name: &str, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }

    /// The standard catalogue: two blocks per shift, one at each end.
    #[must_use]
    pub fn standard_blocks() -> Vec<Self> {
        vec![
            Self::new(
                "AM",
                TimeOfDay::from_time(time!(10:00)),
                TimeOfDay::from_time(time!(14:00)),
            ),
            Self::new(
                "PM",
                TimeOfDay::from_time(time!(18:00)),
                TimeOfDay::from_time(time!(22:00)),
            ),
            Self::new(
                "EARLY",
                TimeOfDay::from_time(time!(22:00)),
                TimeOfDay::from_time(time!(2:00)),
            ),
            Self::new(
                "LATE",
                TimeOfDay::from_time(time!(6:00)),
                TimeOfDay::from_time(time!(10:00)),
            ),
        ]
    }

    /// Returns the standard shift this block belongs to: the one whose
    /// window contains the block start.
    #[must_use]
    pub fn shift_kind(&self) -> ShiftKind {
        let day: ShiftWindow = ShiftKind::Day.window();
        if (0..day.length_minutes()).contains(&day.offset_of(self.start)) {
            ShiftKind::Day
        } else {
            ShiftKind::Night
        }
    }

    /// Looks up a block by name in a catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if no block in `catalogue` has this name.
    pub fn find<'a>(catalogue: &'a [Self], name: &str) -> Result<&'a Self, DomainError> {
        catalogue
            .iter()
            .find(|block| block.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DomainError::UnknownOvertimeBlock(name.to_string()))
    }
}

/// A single roster entry.
///
/// `availability_start` of `None` means "from the shift start";
/// `availability_end` of `None` means "through the final slice". For
/// `ReleaseAdjusted` officers `availability_end` holds the recorded release
/// time, not the effective end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    id: OfficerId,
    category: OfficerCategory,
    shift: Option<ShiftKind>,
    availability_start: Option<TimeOfDay>,
    availability_end: Option<TimeOfDay>,
}

impl Officer {
    /// Creates a main-roster officer available for the whole shift.
    #[must_use]
    pub const fn base(id: OfficerId) -> Self {
        Self {
            id,
            category: OfficerCategory::Base,
            shift: None,
            availability_start: None,
            availability_end: None,
        }
    }

    /// Creates an overtime officer working `block`, restricted to the
    /// block's shift.
    #[must_use]
    pub fn overtime(id: OfficerId, block: &OvertimeBlock) -> Self {
        Self {
            id,
            category: OfficerCategory::Overtime,
            shift: Some(block.shift_kind()),
            availability_start: Some(block.start),
            availability_end: Some(block.end),
        }
    }

    /// Creates a call-in (SOS) officer for `[start, end)`.
    #[must_use]
    pub const fn call_in(id: OfficerId, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id,
            category: OfficerCategory::CallIn,
            shift: None,
            availability_start: Some(start),
            availability_end: Some(end),
        }
    }

    /// Records a late arrival: the officer is available from `arrival`.
    #[must_use]
    pub const fn with_arrival(mut self, arrival: TimeOfDay) -> Self {
        self.availability_start = Some(arrival);
        self
    }

    /// Records an early release at `release`.
    ///
    /// The officer becomes `ReleaseAdjusted`; the engine stops placing them
    /// a release buffer before `release`.
    #[must_use]
    pub const fn with_release(mut self, release: TimeOfDay) -> Self {
        self.category = OfficerCategory::ReleaseAdjusted;
        self.availability_end = Some(release);
        self
    }

    /// Restricts the officer to one shift. Unrestricted officers work
    /// whichever shift is computed.
    #[must_use]
    pub const fn on_shift(mut self, shift: ShiftKind) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Returns the officer's identifier.
    #[must_use]
    pub const fn id(&self) -> &OfficerId {
        &self.id
    }

    /// Returns the officer's category.
    #[must_use]
    pub const fn category(&self) -> OfficerCategory {
        self.category
    }

    /// Returns the shift restriction, if any.
    #[must_use]
    pub const fn shift(&self) -> Option<ShiftKind> {
        self.shift
    }

    /// Returns the recorded availability start.
    #[must_use]
    pub const fn availability_start(&self) -> Option<TimeOfDay> {
        self.availability_start
    }

    /// Returns the recorded availability end (release time for
    /// `ReleaseAdjusted` officers).
    #[must_use]
    pub const fn availability_end(&self) -> Option<TimeOfDay> {
        self.availability_end
    }

    /// Returns whether this officer works `kind`.
    #[must_use]
    pub fn works_shift(&self, kind: ShiftKind) -> bool {
        self.shift.is_none_or(|own| own == kind)
    }

    /// Validates the recorded window against a shift.
    ///
    /// For a shift that does not cross midnight the start must not come after
    /// the end in clock order. For a shift that does, the comparison is made
    /// in shift-relative order so that `2300 -> 0100` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAvailabilityWindow` if the window is
    /// reversed for this shift.
    pub fn validate_window(&self, shift: &ShiftWindow) -> Result<(), DomainError> {
        let (Some(start), Some(end)) = (self.availability_start, self.availability_end) else {
            return Ok(());
        };

        let ordered: bool = if shift.wraps_midnight() {
            shift.offset_of(start) <= shift.offset_of(end)
        } else {
            start <= end
        };

        if ordered {
            Ok(())
        } else {
            Err(DomainError::InvalidAvailabilityWindow {
                officer_id: self.id.value().to_string(),
                reason: format!(
                    "start {start} is after end {end} for the {} shift",
                    shift.kind()
                ),
            })
        }
    }
}
