//! Month-first input in the style `SEP 20, 1999`.
//!
//! A Gregorian month token followed by a day and a four-digit year is
//! reordered to day-first. English-language habit only; no need to
//! internationalize the pattern.

use std::sync::LazyLock;

use ged_standards::GREGORIAN_MONTHS;
use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

static MONTH_DAY_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months = GREGORIAN_MONTHS.join("|");
    Regex::new(&format!(r"({months})\.? (\d{{1,2}})[, ]+(\d{{4}})")).unwrap()
});

pub struct UsMonthDayRule;

impl RewriteRule for UsMonthDayRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        MONTH_DAY_YEAR_RE
            .replace_all(input, "$2 $1 $3")
            .into_owned()
    }

    fn rule_name(&self) -> &str {
        "us-month-day"
    }
}
