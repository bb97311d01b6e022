//! Batch normalization over raw field values.
//!
//! One record per non-empty input line. Normalization itself cannot
//! fail, so a batch run always produces a full report; `changed` on each
//! record distinguishes rewrites from pass-throughs.

use serde::Serialize;

use ged_model::CoordinateAxis;
use ged_normalize::{NormalizeContext, normalize_coordinate, normalize_date_outcome};

/// Which normalizer a value is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// GEDCOM date grammar.
    Date,
    /// `LATI` coordinate value.
    Latitude,
    /// `LONG` coordinate value.
    Longitude,
}

/// One normalized value.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    pub input: String,
    pub output: String,
    pub changed: bool,
}

/// Result of normalizing a batch of values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub records: Vec<NormalizedRecord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn changed_count(&self) -> usize {
        self.records.iter().filter(|record| record.changed).count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.total() - self.changed_count()
    }
}

/// Normalize a single raw value.
pub fn normalize_value(kind: FieldKind, raw: &str, ctx: &NormalizeContext) -> NormalizedRecord {
    match kind {
        FieldKind::Date => {
            let outcome = normalize_date_outcome(raw, ctx);
            NormalizedRecord {
                input: raw.to_string(),
                output: outcome.value,
                changed: outcome.changed,
            }
        }
        FieldKind::Latitude | FieldKind::Longitude => {
            let axis = match kind {
                FieldKind::Latitude => CoordinateAxis::Latitude,
                _ => CoordinateAxis::Longitude,
            };
            let output = normalize_coordinate(raw, axis);
            let changed = output != raw;
            NormalizedRecord {
                input: raw.to_string(),
                output,
                changed,
            }
        }
    }
}

/// Normalize every non-empty line of input.
pub fn normalize_lines<I>(lines: I, kind: FieldKind, ctx: &NormalizeContext) -> BatchReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let records = lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .map(|line| normalize_value(kind, line.as_ref(), ctx))
        .collect();
    BatchReport { records }
}
