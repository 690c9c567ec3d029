//! The `sanitize` command: masks dictionary words and writes the result.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use is_terminal::IsTerminal;
use log::{debug, info};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};

use wordmask_core::{summarize, MatchResult, MatchSummaryItem, SanitizationEngine};

use crate::cli::SanitizeCommand;
use crate::commands::{build_index, read_input};

/// Runs the `sanitize` command end to end.
pub fn run_sanitize(cmd: &SanitizeCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");
    let index = build_index(&cmd.dictionary)?;

    let mut writer: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let results = if cmd.line_buffered {
        match &cmd.input_file {
            Some(path) => {
                let file = fs::File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                sanitize_lines(&index, BufReader::new(file), &mut writer)?
            }
            None => sanitize_lines(&index, io::stdin().lock(), &mut writer)?,
        }
    } else {
        let input = read_input(cmd.input_file.as_deref())?;
        let result = index.sanitize(input.trim_end_matches(&['\n', '\r'][..]))?;
        writeln!(writer, "{}", result.redacted_text)?;
        vec![result]
    };
    writer.flush()?;

    if !cmd.no_summary && !quiet {
        let summary = merge_summaries(&results);
        print_summary(&summary, &mut io::stderr(), io::stderr().is_terminal())?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}

/// Sanitizes each line of `reader` independently, flushing after every line.
pub fn sanitize_lines<R: BufRead, W: Write>(
    engine: &dyn SanitizationEngine,
    reader: R,
    writer: &mut W,
) -> Result<Vec<MatchResult>> {
    let mut results = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let result = engine.sanitize(&line)?;
        writeln!(writer, "{}", result.redacted_text)?;
        writer.flush()?;
        if result.has_matches() {
            results.push(result);
        }
    }
    debug!("Processed line-buffered input; {} line(s) had matches.", results.len());
    Ok(results)
}

/// Combines per-chunk summaries, keeping the order words were first seen.
pub fn merge_summaries(results: &[MatchResult]) -> Vec<MatchSummaryItem> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for item in results.iter().flat_map(summarize) {
        *counts.entry(item.word).or_insert(0) += item.occurrences;
    }
    counts
        .into_iter()
        .map(|(word, occurrences)| MatchSummaryItem { word, occurrences })
        .collect()
}

/// Prints the matched-word summary.
pub fn print_summary<W: Write>(summary: &[MatchSummaryItem], out: &mut W, color: bool) -> Result<()> {
    if summary.is_empty() {
        writeln!(out, "No sensitive words found.")?;
        return Ok(());
    }
    let header = format!("Matched {} sensitive word(s):", summary.len());
    if color {
        writeln!(out, "{}", header.yellow().bold())?;
    } else {
        writeln!(out, "{}", header)?;
    }
    for item in summary {
        writeln!(out, "  - {} ({} occurrence(s))", item.word, item.occurrences)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wordmask_core::SensitiveIndex;

    #[test]
    fn test_sanitize_lines_keeps_line_structure() {
        let mut index = SensitiveIndex::new();
        index.insert_all(["sb", "垃圾"]);
        let input = Cursor::new("hello\ns b here\n垃圾\n");
        let mut out = Vec::new();
        let results = sanitize_lines(&index, input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\n**here\n**\n");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_merge_summaries_adds_counts() {
        let mut index = SensitiveIndex::new();
        index.insert_all(["sb", "垃圾"]);
        let results = vec![index.match_text("sb 垃圾"), index.match_text("sb")];
        let merged = merge_summaries(&results);
        assert_eq!(merged[0].word, "sb");
        assert_eq!(merged[0].occurrences, 2);
        assert_eq!(merged[1].word, "垃圾");
        assert_eq!(merged[1].occurrences, 1);
    }

    #[test]
    fn test_merge_summaries_orders_by_first_sighting_across_chunks() {
        let mut index = SensitiveIndex::new();
        index.insert_all(["sb", "垃圾", "妈的"]);
        let results = vec![
            index.match_text("垃圾"),
            index.match_text("sb 妈的"),
            index.match_text("垃圾 sb 垃圾"),
        ];
        let merged = merge_summaries(&results);
        let words: Vec<(&str, usize)> = merged.iter().map(|m| (m.word.as_str(), m.occurrences)).collect();
        assert_eq!(words, vec![("垃圾", 3), ("sb", 2), ("妈的", 1)]);
    }

    #[test]
    fn test_print_summary_plain() {
        let summary = vec![MatchSummaryItem { word: "sb".to_string(), occurrences: 3 }];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Matched 1 sensitive word(s):"));
        assert!(text.contains("  - sb (3 occurrence(s))"));
    }
}
