//! Spelled-out English month names collapse to their Gregorian tokens.
//!
//! English-only on purpose: localized month-name handling belongs to the
//! caller's locale layer, while `JANUARY` → `JAN` fixes the dominant
//! source of near-canonical input.

use ged_standards::ENGLISH_MONTH_NAMES;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

pub struct FullMonthNameRule;

impl RewriteRule for FullMonthNameRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        let mut value = input.to_string();
        for (full, token) in ENGLISH_MONTH_NAMES {
            if full == token {
                continue;
            }
            if value.contains(full) {
                value = value.replace(full, token);
            }
        }
        value
    }

    fn rule_name(&self) -> &str {
        "full-month-name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    fn apply(input: &str) -> String {
        FullMonthNameRule.apply(input, &NormalizeContext::new(DateOrder::DayMonthYear, 2024))
    }

    #[test]
    fn test_collapses_full_names() {
        assert_eq!(apply("17 NOVEMBER 1860"), "17 NOV 1860");
        assert_eq!(apply("1 MAY 1900"), "1 MAY 1900");
    }

    #[test]
    fn test_collapses_every_occurrence() {
        assert_eq!(
            apply("BET JANUARY 1900 AND FEBRUARY 1901"),
            "BET JAN 1900 AND FEB 1901"
        );
    }

    #[test]
    fn test_tokens_are_untouched() {
        assert_eq!(apply("17 NOV 1860"), "17 NOV 1860");
    }
}
