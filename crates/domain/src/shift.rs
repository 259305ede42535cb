// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift selection and shift-relative time ordering.
//!
//! A night shift runs from 22:00 to 10:00 the next morning, so plain clock
//! order puts `0100` before `2300` even though it comes later in the shift.
//! [`ShiftWindow::offset_of`] maps every clock time onto a minute offset from
//! the shift start. All window and slice comparisons are made on these offsets.
//!
//! ## Invariants
//!
//! - Times inside the shift map to `0..=length`
//! - Times after the shift end map past `length`, times before the shift
//!   start map to negative offsets; the off-shift gap is split at its midpoint
//! - `start == end` describes a full 24 hour shift

use crate::error::DomainError;
use crate::time_of_day::{MINUTES_PER_DAY, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::time;

/// The two shifts of the operating day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    /// Day shift, 10:00 to 22:00.
    Day,
    /// Night shift, 22:00 to 10:00 the following day.
    Night,
}

impl ShiftKind {
    /// Returns the canonical lowercase key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Returns the standard window for this shift.
    #[must_use]
    pub const fn window(self) -> ShiftWindow {
        match self {
            Self::Day => ShiftWindow::new(
                self,
                TimeOfDay::from_time(time!(10:00)),
                TimeOfDay::from_time(time!(22:00)),
            ),
            Self::Night => ShiftWindow::new(
                self,
                TimeOfDay::from_time(time!(22:00)),
                TimeOfDay::from_time(time!(10:00)),
            ),
        }
    }
}

impl FromStr for ShiftKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "morning" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            _ => Err(DomainError::UnknownShiftKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The clock boundaries of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    kind: ShiftKind,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl ShiftWindow {
    /// Creates a shift window. `end` is the label of the final slice.
    #[must_use]
    pub const fn new(kind: ShiftKind, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { kind, start, end }
    }

    /// Returns which shift this window belongs to.
    #[must_use]
    pub const fn kind(&self) -> ShiftKind {
        self.kind
    }

    /// Returns the shift start.
    #[must_use]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the shift end.
    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns the shift length in minutes (`1..=1440`).
    #[must_use]
    pub fn length_minutes(&self) -> i32 {
        let span: i32 = (self.end.minutes_since_midnight() - self.start.minutes_since_midnight())
            .rem_euclid(MINUTES_PER_DAY);
        if span == 0 { MINUTES_PER_DAY } else { span }
    }

    /// Returns whether the shift crosses midnight.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.start.minutes_since_midnight() + self.length_minutes() > MINUTES_PER_DAY
    }

    /// Returns whether `time` falls within `[start, end]` of this shift.
    #[must_use]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        let offset: i32 = self.offset_of(time);
        (0..=self.length_minutes()).contains(&offset)
    }

    /// Maps a clock time onto its signed minute offset from the shift start.
    ///
    /// This is the single wrap-aware comparison operator of the crate: for a
    /// night shift `offset_of(0000) > offset_of(2300)`.
    #[must_use]
    pub fn offset_of(&self, time: TimeOfDay) -> i32 {
        let length: i32 = self.length_minutes();
        let forward: i32 = (time.minutes_since_midnight() - self.start.minutes_since_midnight())
            .rem_euclid(MINUTES_PER_DAY);
        if forward <= length {
            return forward;
        }

        // Outside the shift: closer to the end stays positive, closer to the
        // next start becomes negative.
        let gap: i32 = MINUTES_PER_DAY - length;
        let past_end: i32 = forward - length;
        if past_end * 2 <= gap {
            forward
        } else {
            forward - MINUTES_PER_DAY
        }
    }
}
