//! Ordered rewrite pipeline for date normalization.
//!
//! Each stage implements the [`RewriteRule`] trait and is executed in
//! order; a stage that recognizes nothing returns its input unchanged.
//! Rule order is significant: the numeric-triple stage must run before
//! the shorthand range rules so `1999-12-31` is read as a date rather
//! than a `BET`/`AND` range.
//!
//! # Standard Pipeline Order
//!
//! 1. **CosmeticRule** - case, whitespace, digit/letter spacing
//! 2. **QuarterRule** - `Q1 1900` quarter shorthand
//! 3. **CalendarEscapeRule** - non-Gregorian numeric months
//! 4. **NumericTripleRule** - delimited day/month/year disambiguation
//! 5. **QualifierShorthandRule** - `>` `<` `~` `*` `#` and range dashes
//! 6. **FullMonthNameRule** - spelled-out English months
//! 7. **UsMonthDayRule** - `SEP 20, 1999` month-first input
//! 8. **DayPaddingRule** - zero-pad single-digit days

use crate::context::NormalizeContext;
use crate::cosmetic::CosmeticRule;
use crate::rules::calendar::CalendarEscapeRule;
use crate::rules::months::FullMonthNameRule;
use crate::rules::padding::DayPaddingRule;
use crate::rules::quarter::QuarterRule;
use crate::rules::shorthand::QualifierShorthandRule;
use crate::rules::triple::NumericTripleRule;
use crate::rules::us_format::UsMonthDayRule;

/// A single rewrite stage.
///
/// Rules are total functions: input that does not match the stage's
/// pattern is returned unchanged, never rejected.
pub trait RewriteRule: Send + Sync {
    /// Rewrite the date segment, or return it unchanged.
    fn apply(&self, input: &str, ctx: &NormalizeContext) -> String;

    /// Human-readable name for this rule (for logging/debugging).
    fn rule_name(&self) -> &str;
}

/// An ordered pipeline of rewrite rules.
pub struct RewritePipeline {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl Default for RewritePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RewritePipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule to the end of the pipeline.
    pub fn add_rule(mut self, rule: Box<dyn RewriteRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Remove a rule by name.
    pub fn remove_rule(mut self, rule_name: &str) -> Self {
        self.rules.retain(|rule| rule.rule_name() != rule_name);
        self
    }

    /// Names of the rules in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.rule_name()).collect()
    }

    /// Run every rule in order over the date segment.
    pub fn execute(&self, input: &str, ctx: &NormalizeContext) -> String {
        let mut value = input.to_string();
        for rule in &self.rules {
            value = rule.apply(&value, ctx);
        }
        value
    }
}

/// Build the standard pipeline in canonical stage order.
pub fn build_default_pipeline() -> RewritePipeline {
    RewritePipeline::new()
        .add_rule(Box::new(CosmeticRule))
        .add_rule(Box::new(QuarterRule))
        .add_rule(Box::new(CalendarEscapeRule))
        .add_rule(Box::new(NumericTripleRule))
        .add_rule(Box::new(QualifierShorthandRule))
        .add_rule(Box::new(FullMonthNameRule))
        .add_rule(Box::new(UsMonthDayRule))
        .add_rule(Box::new(DayPaddingRule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_model::DateOrder;

    #[test]
    fn test_default_pipeline_order() {
        let pipeline = build_default_pipeline();
        assert_eq!(
            pipeline.rule_names(),
            vec![
                "cosmetic",
                "quarter",
                "calendar-escape",
                "numeric-triple",
                "qualifier-shorthand",
                "full-month-name",
                "us-month-day",
                "day-padding",
            ]
        );
    }

    #[test]
    fn test_remove_rule() {
        let pipeline = build_default_pipeline().remove_rule("quarter");
        let ctx = NormalizeContext::new(DateOrder::DayMonthYear, 2024);
        // Without the quarter rule the shorthand stays as typed.
        assert_eq!(pipeline.execute("q1 1900", &ctx), "Q 1 1900");
    }

    #[test]
    fn test_unrecognized_input_is_unchanged() {
        let pipeline = build_default_pipeline();
        let ctx = NormalizeContext::new(DateOrder::DayMonthYear, 2024);
        assert_eq!(pipeline.execute("NO DATE HERE", &ctx), "NO DATE HERE");
    }
}
