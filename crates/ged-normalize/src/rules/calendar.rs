//! Alternate-calendar shorthand.
//!
//! A non-Gregorian date typed with a numeric month (`HIJRI 5 11 1400` or
//! `@#DHIJRI@ 5 11 1400`) is rewritten to the calendar escape tag plus
//! that calendar's month token (`@#DHIJRI@ 5 DHUAQ 1400`). A month
//! number outside the calendar's table leaves the input unchanged; the
//! normalizer never invents a date.

use std::sync::LazyLock;

use ged_model::CalendarSystem;
use ged_standards::month_table;
use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

static CALENDAR_PATTERNS: LazyLock<Vec<(CalendarSystem, Regex)>> = LazyLock::new(|| {
    CalendarSystem::alternates()
        .into_iter()
        .map(|calendar| {
            let pattern = format!(
                r"^({}|{}) (\d{{1,2}}) (\d{{1,2}}) (\d{{1,4}})$",
                regex::escape(calendar.escape_tag()),
                calendar.keyword()
            );
            (calendar, Regex::new(&pattern).unwrap())
        })
        .collect()
});

pub struct CalendarEscapeRule;

impl RewriteRule for CalendarEscapeRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        for (calendar, pattern) in CALENDAR_PATTERNS.iter() {
            let Some(caps) = pattern.captures(input) else {
                continue;
            };
            let day = &caps[2];
            let year = &caps[4];
            let Ok(month) = caps[3].parse::<u32>() else {
                return input.to_string();
            };
            let Some(token) = month_table(*calendar).abbreviation(month) else {
                // Out-of-range month number: pass through unchanged.
                return input.to_string();
            };
            return format!("{} {day} {token} {year}", calendar.escape_tag());
        }
        input.to_string()
    }

    fn rule_name(&self) -> &str {
        "calendar-escape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    fn apply(input: &str) -> String {
        CalendarEscapeRule.apply(input, &NormalizeContext::new(DateOrder::DayMonthYear, 2024))
    }

    #[test]
    fn test_keyword_input_gains_escape_tag() {
        assert_eq!(apply("HIJRI 5 11 1400"), "@#DHIJRI@ 5 DHUAQ 1400");
        assert_eq!(apply("JALALI 1 1 1350"), "@#DJALALI@ 1 FARVA 1350");
        assert_eq!(apply("FRENCH 9 2 11"), "@#DFRENCH R@ 9 BRUM 11");
    }

    #[test]
    fn test_escape_tag_input_is_accepted() {
        assert_eq!(apply("@#DHEBREW@ 1 1 5680"), "@#DHEBREW@ 1 TSH 5680");
    }

    #[test]
    fn test_thirteen_month_calendars() {
        assert_eq!(apply("HEBREW 1 13 5684"), "@#DHEBREW@ 1 ELL 5684");
        assert_eq!(apply("FRENCH 5 13 11"), "@#DFRENCH R@ 5 COMP 11");
    }

    #[test]
    fn test_out_of_range_month_passes_through() {
        assert_eq!(apply("HIJRI 5 0 1400"), "HIJRI 5 0 1400");
        assert_eq!(apply("HIJRI 5 13 1400"), "HIJRI 5 13 1400");
        assert_eq!(apply("HEBREW 1 14 5684"), "HEBREW 1 14 5684");
    }

    #[test]
    fn test_gregorian_numeric_input_is_left_alone() {
        // Plain numeric triples belong to the triple rule, not this one.
        assert_eq!(apply("5 11 1400"), "5 11 1400");
    }
}
