//! Line-oriented driver: parse, calculate and format each input line.

use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::cli::formatters::format_outcomes_json;
use crate::error::Result;
use crate::importers::parse_operations;
use crate::tax::{TaxCalculator, TaxRules};

/// Process a single line of operations into its JSON output line.
///
/// State starts fresh for every call, so lines are independent.
pub fn process_line(line: &str, rules: &TaxRules) -> Result<String> {
    let trades = parse_operations(line)?;
    debug!("Parsed {} operations", trades.len());

    let outcomes = TaxCalculator::calculate(*rules, &trades)?;
    Ok(format_outcomes_json(&outcomes))
}

/// Read lines until the first blank one (or end of input), writing one
/// result line per input line. Returns the number of lines processed.
///
/// The first failing line aborts the run.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, rules: &TaxRules) -> Result<usize> {
    let mut processed = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            break;
        }

        let output =
            process_line(&line, rules).with_context(|| format!("line {}", index + 1))?;
        writeln!(writer, "{}", output)?;
        writer.flush()?;
        processed += 1;
    }

    info!("Processed {} lines", processed);
    Ok(processed)
}
