//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{debug, info};

use ged_cli::batch::{BatchReport, FieldKind, normalize_lines, normalize_value};
use ged_model::DateOrder;
use ged_normalize::NormalizeContext;

use crate::cli::{BatchArgs, DateOrderArg, FieldArgs, FieldKindArg, NormalizeArgs};
use crate::summary::print_calendars;

/// Normalize values given on the command line.
pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let (kind, ctx) = resolve_field(&args.field);
    let records: Vec<_> = args
        .values
        .iter()
        .map(|value| normalize_value(kind, value, &ctx))
        .collect();
    debug!(count = records.len(), "normalized command-line values");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", record.output);
        }
    }
    Ok(())
}

/// Normalize a file (or stdin) of values, one per line.
pub fn run_batch(args: &BatchArgs) -> Result<BatchReport> {
    let (kind, ctx) = resolve_field(&args.field);
    let lines = read_lines(&args.input)
        .with_context(|| format!("failed to read input from {}", args.input.display()))?;
    let report = normalize_lines(lines, kind, &ctx);
    info!(
        total = report.total(),
        changed = report.changed_count(),
        "batch normalization complete"
    );
    Ok(report)
}

/// List the supported calendar systems.
pub fn run_calendars() -> Result<()> {
    print_calendars();
    Ok(())
}

/// Resolve CLI field flags into the engine's kind and context.
fn resolve_field(args: &FieldArgs) -> (FieldKind, NormalizeContext) {
    let kind = match args.kind {
        FieldKindArg::Date => FieldKind::Date,
        FieldKindArg::Latitude => FieldKind::Latitude,
        FieldKindArg::Longitude => FieldKind::Longitude,
    };
    let date_order = match args.date_order {
        DateOrderArg::Dmy => DateOrder::DayMonthYear,
        DateOrderArg::Mdy => DateOrder::MonthDayYear,
        DateOrderArg::Ymd => DateOrder::YearMonthDay,
    };
    // The one place "now" is read; the engine itself stays clock-free.
    let current_year = args
        .current_year
        .unwrap_or_else(|| chrono::Local::now().year());
    (kind, NormalizeContext::new(date_order, current_year))
}

fn read_lines(input: &Path) -> io::Result<Vec<String>> {
    if input.as_os_str() == "-" {
        return io::stdin().lock().lines().collect();
    }
    let reader = BufReader::new(File::open(input)?);
    reader.lines().collect()
}
