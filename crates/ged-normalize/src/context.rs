//! Normalization context: locale preference plus the anchor year.
//!
//! The current year is an explicit field rather than an ambient clock
//! read, so two-digit-year resolution is reproducible in tests and the
//! engine stays a pure function of its inputs.

use ged_model::DateOrder;

/// Inputs that influence date rewriting beyond the raw string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeContext {
    date_order: DateOrder,
    current_year: i32,
}

impl NormalizeContext {
    pub fn new(date_order: DateOrder, current_year: i32) -> Self {
        Self {
            date_order,
            current_year,
        }
    }

    /// Preferred day/month/year ordering for delimited numeric input.
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Anchor year for century-relative resolution.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Set the date order preference.
    #[must_use]
    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Set the anchor year.
    #[must_use]
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }

    /// Resolve a year field to four digits.
    ///
    /// Values of 100 and above are taken literally. Two-digit values are
    /// anchored to the current century when they do not exceed the current
    /// year's last two digits, and to the previous century otherwise.
    pub fn resolve_year(&self, value: u32) -> i32 {
        if value >= 100 {
            return value as i32;
        }
        let yy = self.current_year % 100;
        let century = self.current_year - yy;
        if value as i32 <= yy {
            value as i32 + century
        } else {
            value as i32 + century - 100
        }
    }
}
