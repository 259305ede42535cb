// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Duration, Time};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A wall-clock time at minute resolution.
///
/// Ordering on this type is plain clock order (`00:00` first). Any comparison
/// that must respect a shift crossing midnight goes through
/// [`ShiftWindow::offset_of`](crate::ShiftWindow::offset_of) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(Time);

impl TimeOfDay {
    /// Midnight (`0000`).
    pub const MIDNIGHT: Self = Self(Time::MIDNIGHT);

    pub(crate) const fn from_time(time: Time) -> Self {
        Self(time)
    }

    /// Creates a `TimeOfDay` from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is not in `0..24` or the minute not in `0..60`.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        Time::from_hms(hour, minute, 0)
            .map(Self)
            .map_err(|err| DomainError::InvalidTimeOfDay {
                value: format!("{hour:02}:{minute:02}"),
                error: err.to_string(),
            })
    }

    /// Parses a clock time in either `HH:MM` or `HHMM` form.
    ///
    /// # Errors
    ///
    /// Returns an error if the value matches neither form or names a time
    /// that does not exist.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let parsed = if trimmed.contains(':') {
            Time::parse(trimmed, format_description!("[hour]:[minute]"))
        } else {
            Time::parse(trimmed, format_description!("[hour][minute]"))
        };

        parsed.map(Self).map_err(|err| DomainError::InvalidTimeOfDay {
            value: value.to_string(),
            error: err.to_string(),
        })
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.0.hour()
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// Returns minutes elapsed since midnight (`0..1440`).
    #[must_use]
    pub fn minutes_since_midnight(&self) -> i32 {
        i32::from(self.hour()) * 60 + i32::from(self.minute())
    }

    /// Returns the time `minutes` later, wrapping past midnight.
    #[must_use]
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0 + Duration::minutes(i64::from(minutes)))
    }

    /// Returns the `HHMM` label used in manning summaries.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
