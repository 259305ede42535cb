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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod import;
mod render;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use import::{RosterImport, read_roster};
use manning::{
    DEFAULT_RELEASE_BUFFER_MINUTES, DEFAULT_SLICE_WIDTH_MINUTES, ManningConfig, ManningRun,
};
use render::{OutputFormat, render};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;

/// Manning - counter assignment for border-control halls
///
/// Reads a roster file, assigns officers to counters for every slice of the
/// selected shift and prints the manning summary.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster CSV with columns `id, category, shift, start, end, block`
    #[arg(short, long)]
    roster: PathBuf,

    /// Operation type selecting the zone table (`arrival` or `departure`)
    #[arg(short, long, default_value = "arrival")]
    operation: String,

    /// Shift to compute (`day` or `night`)
    #[arg(short, long, default_value = "day")]
    shift: String,

    /// Slice width in minutes
    #[arg(long, default_value_t = DEFAULT_SLICE_WIDTH_MINUTES)]
    slice_width: u32,

    /// Minutes before a recorded release at which an officer stops being placed
    #[arg(long, default_value_t = DEFAULT_RELEASE_BUFFER_MINUTES)]
    release_buffer: u16,

    /// Counter order within a zone (`back-first` or `front-first`)
    #[arg(long, default_value = "back-first")]
    counter_order: String,

    /// Zone order within a slice (`sequential` or `interleaved`)
    #[arg(long, default_value = "sequential")]
    zone_fill: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Resolves the command-line keys into an engine configuration.
    ///
    /// Unknown keys are rejected rather than defaulted.
    fn config(&self) -> Result<ManningConfig> {
        let config: ManningConfig = ManningConfig {
            release_buffer_minutes: self.release_buffer,
            counter_order: self.counter_order.parse()?,
            zone_fill: self.zone_fill.parse()?,
            ..ManningConfig::from_keys(&self.operation, &self.shift, self.slice_width)?
        };
        Ok(config)
    }

    fn run(&self) -> Result<()> {
        let config: ManningConfig = self.config()?;
        let import: RosterImport = read_roster(&self.roster)?;

        for row in import.invalid_rows() {
            warn!(
                row = row.row_number,
                officer = row.officer_id.as_deref().unwrap_or("-"),
                "Skipped roster row: {}",
                row.errors.join("; ")
            );
        }
        info!(
            officers = import.valid_count,
            skipped = import.invalid_count,
            operation = %config.operation_type,
            shift = %config.shift_kind,
            "Loaded roster"
        );

        let result: ManningRun = manning::run(&config, &import.roster)?;

        if let Some(advisory) = &result.advisory {
            warn!("{advisory}");
        }
        for rejected in result.matrix.rejected() {
            warn!(officer = %rejected.officer_id, "{}", rejected.error);
        }

        println!("{}", render(&result, &config, self.format)?);
        Ok(())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()
}
