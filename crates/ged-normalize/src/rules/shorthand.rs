//! Qualifier and range shorthand substitution.
//!
//! Single-character prefixes and dashes expand to the GEDCOM qualifier
//! keywords. The rewrites run in a fixed order and do not overlap: a
//! one-sided dash (`1900-`) is claimed by the `FROM` rule before the
//! two-sided range rule sees it. Segments are restricted to word and
//! space characters, so already-expanded output never matches again.

use std::sync::LazyLock;

use ged_model::Qualifier;
use regex::{Captures, Regex};

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

struct Shorthand {
    pattern: Regex,
    expand: fn(&Captures) -> String,
}

static SHORTHANDS: LazyLock<Vec<Shorthand>> = LazyLock::new(|| {
    // Segment class is deliberately ASCII: GEDCOM keywords and month
    // tokens are, and the cosmetic stage has already upper-cased input.
    const SEG: &str = "[A-Za-z0-9_ ]+";
    let rule = |pattern: String, expand: fn(&Captures) -> String| Shorthand {
        pattern: Regex::new(&pattern).unwrap(),
        expand,
    };
    vec![
        rule(format!("^>({SEG})$"), |caps| {
            format!("{} {}", Qualifier::After.keyword(), caps[1].trim())
        }),
        rule(format!("^<({SEG})$"), |caps| {
            format!("{} {}", Qualifier::Before.keyword(), caps[1].trim())
        }),
        rule(format!("^({SEG})-$"), |caps| {
            format!("{} {}", Qualifier::From.keyword(), caps[1].trim())
        }),
        rule(format!("^-({SEG})$"), |caps| {
            format!("{} {}", Qualifier::To.keyword(), caps[1].trim())
        }),
        rule(format!("^~({SEG})$"), |caps| {
            format!("{} {}", Qualifier::About.keyword(), caps[1].trim())
        }),
        rule(format!(r"^\*({SEG})$"), |caps| {
            format!("{} {}", Qualifier::Estimated.keyword(), caps[1].trim())
        }),
        rule(format!("^#({SEG})$"), |caps| {
            format!("{} {}", Qualifier::Calculated.keyword(), caps[1].trim())
        }),
        rule(format!("^({SEG}) ?- ?({SEG})$"), |caps| {
            format!("BET {} AND {}", caps[1].trim(), caps[2].trim())
        }),
        rule(format!("^({SEG}) ?~ ?({SEG})$"), |caps| {
            format!(
                "{} {} {} {}",
                Qualifier::From.keyword(),
                caps[1].trim(),
                Qualifier::To.keyword(),
                caps[2].trim()
            )
        }),
    ]
});

pub struct QualifierShorthandRule;

impl RewriteRule for QualifierShorthandRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        let mut value = input.to_string();
        for shorthand in SHORTHANDS.iter() {
            if let Some(caps) = shorthand.pattern.captures(&value) {
                value = (shorthand.expand)(&caps);
            }
        }
        value
    }

    fn rule_name(&self) -> &str {
        "qualifier-shorthand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    fn apply(input: &str) -> String {
        QualifierShorthandRule.apply(input, &NormalizeContext::new(DateOrder::DayMonthYear, 2024))
    }

    #[test]
    fn test_qualifier_prefixes() {
        assert_eq!(apply(">1900"), "AFT 1900");
        assert_eq!(apply("<1900"), "BEF 1900");
        assert_eq!(apply("~1923"), "ABT 1923");
        assert_eq!(apply("*1923"), "EST 1923");
        assert_eq!(apply("#1923"), "CAL 1923");
    }

    #[test]
    fn test_one_sided_ranges() {
        assert_eq!(apply("1900-"), "FROM 1900");
        assert_eq!(apply("-1900"), "TO 1900");
    }

    #[test]
    fn test_two_sided_ranges() {
        assert_eq!(apply("1900-1910"), "BET 1900 AND 1910");
        assert_eq!(apply("1900 - 1910"), "BET 1900 AND 1910");
        assert_eq!(apply("1900~1910"), "FROM 1900 TO 1910");
    }

    #[test]
    fn test_word_segments_allowed() {
        assert_eq!(apply(">JAN 1900"), "AFT JAN 1900");
        assert_eq!(apply("JAN 1900-DEC 1910"), "BET JAN 1900 AND DEC 1910");
    }

    #[test]
    fn test_non_word_segments_do_not_match() {
        assert_eq!(apply(">17.11.1860"), ">17.11.1860");
        assert_eq!(apply("1900-1910-1920"), "1900-1910-1920");
    }

    #[test]
    fn test_expanded_output_is_stable() {
        assert_eq!(apply("AFT 1900"), "AFT 1900");
        assert_eq!(apply("BET 1900 AND 1910"), "BET 1900 AND 1910");
    }
}
