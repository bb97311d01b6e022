//! Delimited numeric triple disambiguation.
//!
//! Input such as `17.11.1860`, `03/04/2005` or `1999-12-31` carries three
//! numeric fields split by single non-digit separators. Which field is
//! the day and which the month depends on locale; the rule tries the
//! preferred order first and falls back to the remaining orders in a
//! fixed `DMY`, `MDY`, `YMD` sequence. The first assignment with a
//! plausible day (1-31) and month (1-12) wins; with none, the input is
//! left unchanged. Two-digit years are resolved against the context's
//! anchor year.

use std::sync::LazyLock;

use ged_model::{CalendarSystem, DateOrder};
use ged_standards::month_table;
use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

static TRIPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\d]*)(\d+)[^\d](\d+)[^\d](\d+)$").unwrap());

pub struct NumericTripleRule;

impl NumericTripleRule {
    /// Field assignment (day, month, year) for one candidate order.
    fn assign(order: DateOrder, f1: u32, f2: u32, f3: u32) -> (u32, u32, u32) {
        match order {
            DateOrder::DayMonthYear => (f1, f2, f3),
            DateOrder::MonthDayYear => (f2, f1, f3),
            DateOrder::YearMonthDay => (f3, f2, f1),
        }
    }

    fn plausible(day: u32, month: u32) -> bool {
        (1..=31).contains(&day) && (1..=12).contains(&month)
    }

    /// A prefix naming an alternate calendar means the numeric fields are
    /// not Gregorian day/month/year. Those segments belong to the
    /// calendar-escape stage; if it declined them (month out of range),
    /// they must stay as typed.
    fn prefix_names_alternate_calendar(prefix: &str) -> bool {
        let trimmed = prefix.trim_end();
        CalendarSystem::alternates()
            .iter()
            .any(|calendar| {
                trimmed.ends_with(calendar.keyword()) || trimmed.ends_with(calendar.escape_tag())
            })
    }
}

impl RewriteRule for NumericTripleRule {
    fn apply(&self, input: &str, ctx: &NormalizeContext) -> String {
        let Some(caps) = TRIPLE_RE.captures(input) else {
            return input.to_string();
        };
        let prefix = &caps[1];
        if Self::prefix_names_alternate_calendar(prefix) {
            return input.to_string();
        }
        let (Ok(f1), Ok(f2), Ok(f3)) = (
            caps[2].parse::<u32>(),
            caps[3].parse::<u32>(),
            caps[4].parse::<u32>(),
        ) else {
            return input.to_string();
        };

        let preferred = ctx.date_order();
        let candidates = std::iter::once(preferred)
            .chain(DateOrder::all().into_iter().filter(|o| *o != preferred));
        for order in candidates {
            let (day, month, year) = Self::assign(order, f1, f2, f3);
            if !Self::plausible(day, month) {
                continue;
            }
            let token = month_table(CalendarSystem::Gregorian)
                .abbreviation(month)
                .expect("month validated against Gregorian table");
            return format!("{prefix}{day} {token} {}", ctx.resolve_year(year));
        }
        input.to_string()
    }

    fn rule_name(&self) -> &str {
        "numeric-triple"
    }
}
