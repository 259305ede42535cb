// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::import::import_roster;
use crate::render::{OutputFormat, render, render_matrix, render_summary};
use manning::{ManningConfig, ManningRun, run};
use manning_domain::Roster;

fn sample_run(config: &ManningConfig) -> ManningRun {
    let roster: Roster = import_roster("id,category,start,end\nB1,base,,\nS1,sos,1400,1600\n")
        .unwrap()
        .roster;
    run(config, &roster).unwrap()
}

#[test]
fn test_summary_lines() {
    let config: ManningConfig = ManningConfig::default();
    let text: String = render_summary(&sample_run(&config), &config);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "arrival day shift, 49 slices of 15 minutes");
    assert_eq!(lines[1], "1000: 1/0  1/0/0/0/0");
    assert_eq!(lines[17], "1400: 2/0  2/0/0/0/0");
    assert_eq!(lines.len(), 50);
}

#[test]
fn test_matrix_lists_staffed_positions() {
    let config: ManningConfig = ManningConfig::default();
    let text: String = render_matrix(&sample_run(&config));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "1000");
    assert_eq!(lines[1], "  Arrival 1: C10=B1");
    assert_eq!(lines[2], "  Arrival 2: closed");
    assert!(text.contains("  Arrival 1: C10=B1 C9=S1"));
}

#[test]
fn test_json_output_parses() {
    let config: ManningConfig = ManningConfig::default();
    let text: String = render(&sample_run(&config), &config, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["summary"].as_array().unwrap().len(), 49);
    assert!(value["advisory"].is_null());
}
