// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster import from CSV.
//!
//! Each row describes one officer. Rows are validated independently: a bad
//! row is reported with its row number and errors and the remaining rows are
//! still loaded, in file order, which is the roster's tie-break order.
//!
//! ## Columns
//!
//! | Header     | Required | Meaning                                           |
//! |------------|----------|---------------------------------------------------|
//! | `id`       | yes      | Officer identifier, unique within the file        |
//! | `category` | yes      | `base`, `overtime`/`ot`, `call_in`/`sos`, `release` |
//! | `shift`    | no       | `day` or `night`; empty means either shift        |
//! | `start`    | no       | Arrival or block start, `HH:MM` or `HHMM`         |
//! | `end`      | no       | Block end, or the recorded release time           |
//! | `block`    | no       | Named overtime block (`AM`, `PM`, `EARLY`, `LATE`) |
//!
//! A `release` row is a base officer unless it names a `block`, in which case
//! it is an overtime officer on that block released early at `end`. A call-in
//! released early is written as a `release` row with its `start`.

use csv::StringRecord;
use manning_domain::{
    Officer, OfficerCategory, OfficerId, OvertimeBlock, Roster, ShiftKind, TimeOfDay,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a roster file from being read at all.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read roster file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The header row is missing or lacks a required column.
    #[error("Invalid roster CSV: {reason}")]
    InvalidCsvFormat { reason: String },
}

/// Outcome of one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The officer id, when the column was present.
    pub officer_id: Option<String>,
    /// Zero or more validation errors. Empty for a loaded row.
    pub errors: Vec<String>,
}

impl CsvRowResult {
    /// Returns whether the row made it onto the roster.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A roster built from CSV together with the per-row outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterImport {
    /// Officers from every valid row, in file order.
    pub roster: Roster,
    /// Per-row results.
    pub rows: Vec<CsvRowResult>,
    /// Number of rows loaded.
    pub valid_count: usize,
    /// Number of rows skipped.
    pub invalid_count: usize,
}

impl RosterImport {
    /// Iterates the rows that were skipped.
    pub fn invalid_rows(&self) -> impl Iterator<Item = &CsvRowResult> {
        self.rows.iter().filter(|row| !row.is_valid())
    }
}

const REQUIRED_HEADERS: &[&str] = &["id", "category"];

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ImportError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ImportError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Reads and imports a roster file.
///
/// # Errors
///
/// Returns `ImportError::Read` if the file cannot be read, or
/// `ImportError::InvalidCsvFormat` if its header row is unusable.
pub fn read_roster(path: &Path) -> Result<RosterImport, ImportError> {
    let content: String = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    import_roster(&content)
}

/// Builds a roster from CSV content.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content, header row first
///
/// # Returns
///
/// * `Ok(RosterImport)` with the roster and per-row results
/// * `Err(ImportError)` if the header row is missing or incomplete
///
/// # Errors
///
/// Only header problems fail the import. Row problems are reported in
/// [`RosterImport::rows`].
pub fn import_roster(csv_content: &str) -> Result<RosterImport, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ImportError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;
    let blocks: Vec<OvertimeBlock> = OvertimeBlock::standard_blocks();

    let mut roster: Roster = Roster::new();
    let mut rows: Vec<CsvRowResult> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                rows.push(CsvRowResult {
                    row_number,
                    officer_id: None,
                    errors: vec![format!("CSV parse error: {e}")],
                });
                continue;
            }
        };

        let officer_id: Option<String> = field(&record, &header_map, "id");
        let errors: Vec<String> = match parse_officer(&record, &header_map, &blocks) {
            Ok(officer) => match roster.add(officer) {
                Ok(()) => Vec::new(),
                Err(e) => vec![format!("id: {e}")],
            },
            Err(errors) => errors,
        };

        rows.push(CsvRowResult {
            row_number,
            officer_id,
            errors,
        });
    }

    let valid_count: usize = rows.iter().filter(|row| row.is_valid()).count();

    Ok(RosterImport {
        roster,
        invalid_count: rows.len() - valid_count,
        valid_count,
        rows,
    })
}

fn field(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<String> {
    header_map
        .get(name)
        .and_then(|&idx| record.get(idx))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_time(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<TimeOfDay> {
    field(record, header_map, name).and_then(|value| {
        TimeOfDay::parse(&value)
            .map_err(|e| errors.push(format!("{name}: {e}")))
            .ok()
    })
}

/// Parses one row into an officer.
///
/// Returns `Err(Vec<String>)` with every problem found in the row.
#[allow(clippy::option_if_let_else)]
fn parse_officer(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    blocks: &[OvertimeBlock],
) -> Result<Officer, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let id: Option<OfficerId> = match field(record, header_map, "id") {
        Some(value) => OfficerId::new(&value)
            .map_err(|e| errors.push(format!("id: {e}")))
            .ok(),
        None => {
            errors.push(String::from("id: required field is missing or empty"));
            None
        }
    };

    let category: Option<OfficerCategory> = match field(record, header_map, "category") {
        Some(value) => value
            .parse::<OfficerCategory>()
            .map_err(|e| errors.push(format!("category: {e}")))
            .ok(),
        None => {
            errors.push(String::from("category: required field is missing or empty"));
            None
        }
    };

    let shift: Option<ShiftKind> = field(record, header_map, "shift").and_then(|value| {
        value
            .parse::<ShiftKind>()
            .map_err(|e| errors.push(format!("shift: {e}")))
            .ok()
    });
    let start: Option<TimeOfDay> = parse_time(record, header_map, "start", &mut errors);
    let end: Option<TimeOfDay> = parse_time(record, header_map, "end", &mut errors);
    let block_name: Option<String> = field(record, header_map, "block");

    let (Some(id), Some(category)) = (id, category) else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let officer: Officer = match category {
        OfficerCategory::Base => {
            if end.is_some() {
                errors.push(String::from(
                    "end: base officers have no end; use category 'release' for an early release",
                ));
            }
            let officer: Officer = Officer::base(id);
            match start {
                Some(arrival) => officer.with_arrival(arrival),
                None => officer,
            }
        }
        OfficerCategory::Overtime => match (block_name, start, end) {
            (Some(name), _, _) => match OvertimeBlock::find(blocks, &name) {
                Ok(block) => Officer::overtime(id, block),
                Err(e) => {
                    errors.push(format!("block: {e}"));
                    return Err(errors);
                }
            },
            (None, Some(start), Some(end)) => {
                let block: OvertimeBlock = OvertimeBlock::new(id.value(), start, end);
                Officer::overtime(id, &block)
            }
            _ => {
                errors.push(String::from(
                    "block: overtime rows need a block name or both start and end",
                ));
                return Err(errors);
            }
        },
        OfficerCategory::CallIn => match (start, end) {
            (Some(start), Some(end)) => Officer::call_in(id, start, end),
            _ => {
                errors.push(String::from("start/end: call-in rows need both start and end"));
                return Err(errors);
            }
        },
        OfficerCategory::ReleaseAdjusted => {
            let Some(release) = end else {
                errors.push(String::from("end: release rows need the release time"));
                return Err(errors);
            };
            // A named block releases an overtime officer early; without one
            // the row is a base officer.
            let worked: Officer = match block_name {
                Some(name) => match OvertimeBlock::find(blocks, &name) {
                    Ok(block) => Officer::overtime(id, block),
                    Err(e) => {
                        errors.push(format!("block: {e}"));
                        return Err(errors);
                    }
                },
                None => Officer::base(id),
            };
            let officer: Officer = worked.with_release(release);
            match start {
                Some(arrival) => officer.with_arrival(arrival),
                None => officer,
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(match shift {
        Some(kind) => officer.on_shift(kind),
        None => officer,
    })
}
