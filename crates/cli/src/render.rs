// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON rendering of a manning run.

use clap::ValueEnum;
use manning::{ManningConfig, ManningRun, SliceAssignment, ZoneOccupancy};

/// How a run is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One manning line per slice.
    #[default]
    Summary,
    /// Every staffed counter and lane per slice.
    Matrix,
    /// The full run as pretty-printed JSON.
    Json,
}

/// Renders `run` in `format`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(
    run: &ManningRun,
    config: &ManningConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Summary => Ok(render_summary(run, config)),
        OutputFormat::Matrix => Ok(render_matrix(run)),
        OutputFormat::Json => serde_json::to_string_pretty(run),
    }
}

/// Header line followed by `HHMM: cars/motor  z1/.../zn` for every slice.
#[must_use]
pub fn render_summary(run: &ManningRun, config: &ManningConfig) -> String {
    let header: String = format!(
        "{} {} shift, {} slices of {} minutes",
        config.operation_type,
        config.shift_kind,
        run.summary.len(),
        config.slice_width_minutes
    );
    std::iter::once(header)
        .chain(run.summary.iter().map(ToString::to_string))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Lists the occupied positions of every slice, back counters first.
#[must_use]
pub fn render_matrix(run: &ManningRun) -> String {
    run.matrix
        .slices()
        .iter()
        .flat_map(slice_lines)
        .collect::<Vec<String>>()
        .join("\n")
}

fn slice_lines(slice: &SliceAssignment) -> Vec<String> {
    let mut lines: Vec<String> = vec![slice.time.to_string()];
    for zone in &slice.zones {
        let positions: Vec<String> = staffed_positions(zone);
        if positions.is_empty() {
            lines.push(format!("  {}: closed", zone.zone));
        } else {
            lines.push(format!("  {}: {}", zone.zone, positions.join(" ")));
        }
    }
    lines
}

fn staffed_positions(zone: &ZoneOccupancy) -> Vec<String> {
    let counters = zone
        .counters
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(index, officer)| officer.as_ref().map(|o| format!("C{}={o}", index + 1)));
    let lanes = zone
        .lanes
        .iter()
        .enumerate()
        .filter_map(|(index, officer)| officer.as_ref().map(|o| format!("M{}={o}", index + 1)));
    counters.chain(lanes).collect()
}
