//! Normalization of free-text GEDCOM field values.
//!
//! The date engine rewrites loosely formatted, locale-influenced input
//! (`17.11.1860`, `Q1 1900`, `~1923`, `sep 20, 1999`) into the canonical
//! GEDCOM date grammar. It is a single pass through an ordered list of
//! pure rewrite rules; input that matches no rule is returned unchanged
//! apart from the always-applied cosmetic cleanup, and the whole
//! pipeline is idempotent.
//!
//! ```
//! use ged_model::DateOrder;
//! use ged_normalize::{NormalizeContext, normalize_date};
//!
//! let ctx = NormalizeContext::new(DateOrder::DayMonthYear, 2024);
//! assert_eq!(normalize_date("17.11.1860", &ctx), "17 NOV 1860");
//! assert_eq!(normalize_date("~1923", &ctx), "ABT 1923");
//! ```
//!
//! Coordinate values (`LATI`/`LONG`) have their own, smaller rewriter in
//! [`coordinate`].

use std::sync::LazyLock;

pub mod context;
pub mod coordinate;
pub mod cosmetic;
pub mod phrase;
pub mod pipeline;
pub mod rules;

pub use context::NormalizeContext;
pub use coordinate::normalize_coordinate;
pub use pipeline::{RewritePipeline, RewriteRule, build_default_pipeline};

static DEFAULT_PIPELINE: LazyLock<RewritePipeline> = LazyLock::new(build_default_pipeline);

/// Result of a normalization call.
///
/// `changed` lets form-field callers skip the write-back when nothing
/// moved, so the cursor position is not disturbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// The rewritten (or unchanged) value.
    pub value: String,
    /// Whether `value` differs from the raw input.
    pub changed: bool,
}

/// Normalize a raw date string into the GEDCOM date grammar.
///
/// A parenthesized free-text phrase is preserved verbatim; everything
/// before it runs through the rewrite pipeline. This never fails:
/// unrecognized input comes back unchanged.
pub fn normalize_date(raw: &str, ctx: &NormalizeContext) -> String {
    normalize_date_outcome(raw, ctx).value
}

/// Normalize a raw date string, reporting whether anything changed.
pub fn normalize_date_outcome(raw: &str, ctx: &NormalizeContext) -> NormalizeOutcome {
    let (date, date_phrase) = phrase::split_phrase(raw);
    let rewritten = DEFAULT_PIPELINE.execute(date, ctx);
    let value = phrase::reattach(rewritten, date_phrase);
    let changed = value != raw;
    NormalizeOutcome { value, changed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    #[test]
    fn outcome_reports_no_change_for_canonical_input() {
        let ctx = NormalizeContext::new(DateOrder::DayMonthYear, 2024);
        let outcome = normalize_date_outcome("17 NOV 1860", &ctx);
        assert_eq!(outcome.value, "17 NOV 1860");
        assert!(!outcome.changed);
    }

    #[test]
    fn outcome_reports_change() {
        let ctx = NormalizeContext::new(DateOrder::DayMonthYear, 2024);
        let outcome = normalize_date_outcome("17.11.1860", &ctx);
        assert_eq!(outcome.value, "17 NOV 1860");
        assert!(outcome.changed);
    }
}
