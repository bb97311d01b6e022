//! Quarter shorthand: `Q1 1900` expands to the spanning range
//! `BET JAN 1900 AND MAR 1900`. Quarter N covers months 3N-2..3N of the
//! Gregorian table.

use std::sync::LazyLock;

use ged_model::CalendarSystem;
use ged_standards::month_table;
use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

// The cosmetic stage has already split "Q1" into "Q 1".
static QUARTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Q ([1-4]) (\d{4})$").unwrap());

pub struct QuarterRule;

impl RewriteRule for QuarterRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        let Some(caps) = QUARTER_RE.captures(input) else {
            return input.to_string();
        };
        let quarter: u32 = caps[1].parse().expect("single digit 1-4");
        let year = &caps[2];
        let table = month_table(CalendarSystem::Gregorian);
        let first = table
            .abbreviation(quarter * 3 - 2)
            .expect("quarter start within table");
        let last = table
            .abbreviation(quarter * 3)
            .expect("quarter end within table");
        format!("BET {first} {year} AND {last} {year}")
    }

    fn rule_name(&self) -> &str {
        "quarter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    fn apply(input: &str) -> String {
        QuarterRule.apply(input, &NormalizeContext::new(DateOrder::DayMonthYear, 2024))
    }

    #[test]
    fn test_all_quarters() {
        assert_eq!(apply("Q 1 1900"), "BET JAN 1900 AND MAR 1900");
        assert_eq!(apply("Q 2 1900"), "BET APR 1900 AND JUN 1900");
        assert_eq!(apply("Q 3 1900"), "BET JUL 1900 AND SEP 1900");
        assert_eq!(apply("Q 4 1900"), "BET OCT 1900 AND DEC 1900");
    }

    #[test]
    fn test_requires_full_year_and_valid_quarter() {
        assert_eq!(apply("Q 5 1900"), "Q 5 1900");
        assert_eq!(apply("Q 1 190"), "Q 1 190");
        assert_eq!(apply("Q 1 1900 EXTRA"), "Q 1 1900 EXTRA");
    }
}
