// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod officer;
mod roster;
mod shift;
mod time_grid;
mod time_of_day;
mod topology;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use officer::{Officer, OfficerCategory, OfficerId, OvertimeBlock};
pub use roster::Roster;
pub use shift::{ShiftKind, ShiftWindow};
pub use time_grid::{MAX_SLICES, TimeGrid, generate_slices, generate_standard_slices};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
pub use topology::{OperationType, Topology, Zone};
