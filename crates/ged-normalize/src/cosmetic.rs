//! Always-applied cosmetic cleanup of the date segment.
//!
//! GEDCOM date values are upper case, single-spaced, and keep a space
//! between letter and digit runs (`01JAN2000` reads as three tokens).
//! Every occurrence is rewritten, not just the first, which is what
//! makes the overall pipeline idempotent on multi-date strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::NormalizeContext;
use crate::pipeline::RewriteRule;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DIGIT_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([A-Z])").unwrap());
static LETTER_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([0-9])").unwrap());

pub struct CosmeticRule;

impl RewriteRule for CosmeticRule {
    fn apply(&self, input: &str, _ctx: &NormalizeContext) -> String {
        let value = input.to_uppercase();
        let value = WHITESPACE_RE.replace_all(&value, " ");
        let value = value.trim();
        let value = DIGIT_LETTER_RE.replace_all(value, "$1 $2");
        let value = LETTER_DIGIT_RE.replace_all(&value, "$1 $2");
        value.into_owned()
    }

    fn rule_name(&self) -> &str {
        "cosmetic"
    }
}
