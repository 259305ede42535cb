// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time slice generation for a shift.
//!
//! ## Invariants
//!
//! - The first slice is the shift start, the last slice is the shift end
//! - Consecutive slices are exactly `slice_width_minutes` apart
//! - The hour field wraps modulo 24 for shifts crossing midnight
//! - A grid never holds more than [`MAX_SLICES`] slices

use crate::error::DomainError;
use crate::shift::{ShiftKind, ShiftWindow};
use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of slices in one grid.
///
/// A 24 hour shift at 15 minute granularity needs 97 slices; hitting this
/// bound means the width never lands on the shift end.
pub const MAX_SLICES: usize = 200;

/// The ordered slice labels of one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    shift: ShiftWindow,
    slice_width_minutes: u32,
    slices: Vec<TimeOfDay>,
}

impl TimeGrid {
    /// Returns the shift this grid was generated for.
    #[must_use]
    pub const fn shift(&self) -> &ShiftWindow {
        &self.shift
    }

    /// Returns the slice width in minutes.
    #[must_use]
    pub const fn slice_width_minutes(&self) -> u32 {
        self.slice_width_minutes
    }

    /// Returns the slice labels in shift order.
    #[must_use]
    pub fn slices(&self) -> &[TimeOfDay] {
        &self.slices
    }

    /// Returns the number of slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Returns whether the grid has no slices. Generated grids never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterates the slice labels in shift order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeOfDay> {
        self.slices.iter()
    }

    /// Iterates each slice label with its offset from the shift start.
    ///
    /// The final slice is the shift end and always maps to the shift length,
    /// even when its label equals the start of a 24 hour shift.
    pub fn iter_offsets(&self) -> impl Iterator<Item = (TimeOfDay, i32)> + '_ {
        let last: usize = self.slices.len().saturating_sub(1);
        self.slices.iter().enumerate().map(move |(idx, &time)| {
            let offset: i32 = if idx == last && idx > 0 {
                self.shift.length_minutes()
            } else {
                self.shift.offset_of(time)
            };
            (time, offset)
        })
    }
}

/// Generates the slice labels of a shift.
///
/// # Arguments
///
/// * `shift` - The shift window; its end is included as the final slice
/// * `slice_width_minutes` - Distance between consecutive slices
///
/// # Errors
///
/// Returns an error if:
/// - The slice width is zero
/// - The width never lands on the shift end within [`MAX_SLICES`] slices
///
/// # Example
///
/// ```text
/// Night 2200 -> 1000, 15 minutes:
/// 2200, 2215, ..., 2345, 0000, 0015, ..., 0945, 1000
/// ```
pub fn generate_slices(
    shift: ShiftWindow,
    slice_width_minutes: u32,
) -> Result<TimeGrid, DomainError> {
    if slice_width_minutes == 0 {
        return Err(DomainError::InvalidSliceWidth {
            minutes: slice_width_minutes,
        });
    }

    let mut slices: Vec<TimeOfDay> = vec![shift.start()];
    let mut current: TimeOfDay = shift.start();

    loop {
        if slices.len() >= MAX_SLICES {
            return Err(DomainError::SliceBoundExceeded {
                start: shift.start().label(),
                end: shift.end().label(),
                width: slice_width_minutes,
                bound: MAX_SLICES,
            });
        }

        current = current.plus_minutes(slice_width_minutes);
        slices.push(current);

        if current == shift.end() {
            break;
        }
    }

    Ok(TimeGrid {
        shift,
        slice_width_minutes,
        slices,
    })
}

/// Generates the slice labels for the standard window of `kind`.
///
/// # Errors
///
/// See [`generate_slices`].
pub fn generate_standard_slices(
    kind: ShiftKind,
    slice_width_minutes: u32,
) -> Result<TimeGrid, DomainError> {
    generate_slices(kind.window(), slice_width_minutes)
}
