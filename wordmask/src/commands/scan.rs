//! The `scan` command: reports dictionary hits without masking anything.

use anyhow::{bail, Result};
use log::info;
use serde::Serialize;
use std::io::{self, Write};

use wordmask_core::{MatchSummaryItem, SanitizationEngine};

use crate::cli::ScanCommand;
use crate::commands::{build_index, read_input};

/// The JSON shape printed by `scan --json-stdout`.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub total_occurrences: usize,
    pub words: Vec<MatchSummaryItem>,
}

impl ScanReport {
    pub fn new(words: Vec<MatchSummaryItem>) -> Self {
        let total_occurrences = words.iter().map(|w| w.occurrences).sum();
        Self { total_occurrences, words }
    }
}

/// Runs the `scan` command end to end.
pub fn run_scan(cmd: &ScanCommand) -> Result<()> {
    info!("Starting scan operation.");
    let index = build_index(&cmd.dictionary)?;
    let input = read_input(cmd.input_file.as_deref())?;
    let report = ScanReport::new(index.analyze_for_stats(&input)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd.json_stdout {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        print_report(&report, &mut out)?;
    }
    out.flush()?;

    if let Some(threshold) = cmd.fail_over_threshold {
        if report.total_occurrences > threshold {
            bail!(
                "Found {} sensitive word occurrence(s), exceeding the threshold of {}.",
                report.total_occurrences,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(())
}

pub fn print_report<W: Write>(report: &ScanReport, out: &mut W) -> Result<()> {
    if report.words.is_empty() {
        writeln!(out, "No sensitive words found.")?;
        return Ok(());
    }
    for item in &report.words {
        writeln!(out, "{}: {}", item.word, item.occurrences)?;
    }
    writeln!(out, "Total: {}", report.total_occurrences)?;
    Ok(())
}
