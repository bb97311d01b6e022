//! Zero-pad single-digit days.
//!
//! GEDCOM days are two digits: a lone digit immediately before a month
//! token and a four-digit year gains a leading zero. Every occurrence is
//! padded, so strings carrying more than one date come out uniform.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

static BARE_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^| )(\d [A-Z]{3,5} \d{4})").unwrap());

pub struct DayPaddingRule;

impl RewriteRule for DayPaddingRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        BARE_DAY_RE.replace_all(input, "${1}0${2}").into_owned()
    }

    fn rule_name(&self) -> &str {
        "day-padding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    fn apply(input: &str) -> String {
        DayPaddingRule.apply(input, &NormalizeContext::new(DateOrder::DayMonthYear, 2024))
    }

    #[test]
    fn test_pads_single_digit_day() {
        assert_eq!(apply("1 JAN 2000"), "01 JAN 2000");
        assert_eq!(apply("AFT 1 JAN 2000"), "AFT 01 JAN 2000");
    }

    #[test]
    fn test_pads_five_letter_month_tokens() {
        assert_eq!(apply("@#DHIJRI@ 5 MUHAR 1400"), "@#DHIJRI@ 05 MUHAR 1400");
    }

    #[test]
    fn test_pads_every_date_in_a_range() {
        assert_eq!(
            apply("BET 1 JAN 1900 AND 2 FEB 1900"),
            "BET 01 JAN 1900 AND 02 FEB 1900"
        );
    }

    #[test]
    fn test_two_digit_day_is_untouched() {
        assert_eq!(apply("17 NOV 1860"), "17 NOV 1860");
        assert_eq!(apply("1 NOV 186"), "1 NOV 186");
    }
}
