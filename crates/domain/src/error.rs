// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A clock time could not be parsed.
    InvalidTimeOfDay {
        /// The rejected input.
        value: String,
        /// The parser's message.
        error: String,
    },
    /// The shift key is not one of the known shifts.
    UnknownShiftKind(String),
    /// The operation key is not one of the known operation types.
    UnknownOperationType(String),
    /// Slice width must be positive.
    InvalidSliceWidth {
        /// The rejected width in minutes.
        minutes: u32,
    },
    /// Slice generation did not reach the shift end within the safety bound.
    SliceBoundExceeded {
        /// Shift start label.
        start: String,
        /// Shift end label.
        end: String,
        /// Slice width in minutes.
        width: u32,
        /// The bound that was hit.
        bound: usize,
    },
    /// A zone definition is empty, duplicated, or malformed.
    InvalidZone(String),
    /// Officer identifier is empty or invalid.
    InvalidOfficerId(String),
    /// Officer category key is not recognized.
    UnknownOfficerCategory(String),
    /// No overtime block with this name exists in the catalogue.
    UnknownOvertimeBlock(String),
    /// An officer with this identifier is already on the roster.
    DuplicateOfficer(String),
    /// No officer with this identifier is on the roster.
    OfficerNotFound(String),
    /// An officer's availability window is inconsistent with the shift.
    InvalidAvailabilityWindow {
        /// The officer whose record was rejected.
        officer_id: String,
        /// Description of the inconsistency.
        reason: String,
    },
}

impl DomainError {
    /// Returns whether this error stems from malformed configuration
    /// (shift or operation key, slice width, safety bound, zone table).
    ///
    /// Configuration errors are surfaced to the caller immediately and are
    /// never defaulted away.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownShiftKind(_)
                | Self::UnknownOperationType(_)
                | Self::InvalidSliceWidth { .. }
                | Self::SliceBoundExceeded { .. }
                | Self::InvalidZone(_)
        )
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeOfDay { value, error } => {
                write!(f, "Invalid time of day '{value}': {error}")
            }
            Self::UnknownShiftKind(key) => write!(f, "Unknown shift '{key}'"),
            Self::UnknownOperationType(key) => write!(f, "Unknown operation type '{key}'"),
            Self::InvalidSliceWidth { minutes } => {
                write!(
                    f,
                    "Invalid slice width: {minutes} minutes. Must be greater than 0"
                )
            }
            Self::SliceBoundExceeded {
                start,
                end,
                width,
                bound,
            } => {
                write!(
                    f,
                    "Slice generation from {start} to {end} every {width} minutes exceeded {bound} slices"
                )
            }
            Self::InvalidZone(msg) => write!(f, "Invalid zone: {msg}"),
            Self::InvalidOfficerId(msg) => write!(f, "Invalid officer id: {msg}"),
            Self::UnknownOfficerCategory(key) => write!(f, "Unknown officer category '{key}'"),
            Self::UnknownOvertimeBlock(name) => write!(f, "Unknown overtime block '{name}'"),
            Self::DuplicateOfficer(id) => {
                write!(f, "Officer '{id}' is already on the roster")
            }
            Self::OfficerNotFound(id) => write!(f, "Officer '{id}' not found on the roster"),
            Self::InvalidAvailabilityWindow { officer_id, reason } => {
                write!(
                    f,
                    "Invalid availability window for officer '{officer_id}': {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
