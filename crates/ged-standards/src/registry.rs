//! Read-only registry resolving a calendar system to its month table.
//!
//! The tables are process-wide statics; the registry is cheap to hold by
//! value and never mutated after construction.

use ged_model::CalendarSystem;

use crate::months::{
    FRENCH_MONTHS, GREGORIAN_MONTHS, HEBREW_MONTHS, HIJRI_MONTHS, JALALI_MONTHS, MonthTable,
};

static TABLES: [MonthTable; 5] = [
    MonthTable::new(CalendarSystem::Gregorian, GREGORIAN_MONTHS),
    MonthTable::new(CalendarSystem::Hijri, HIJRI_MONTHS),
    MonthTable::new(CalendarSystem::Hebrew, HEBREW_MONTHS),
    MonthTable::new(CalendarSystem::FrenchRepublican, FRENCH_MONTHS),
    MonthTable::new(CalendarSystem::Jalali, JALALI_MONTHS),
];

/// Returns the static month table for a calendar system.
pub fn month_table(calendar: CalendarSystem) -> &'static MonthTable {
    TABLES
        .iter()
        .find(|table| table.calendar() == calendar)
        .expect("every calendar system has a table")
}

/// Lookup facade over the static month tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarRegistry;

impl CalendarRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All tables, Gregorian first.
    pub fn tables(&self) -> &'static [MonthTable] {
        &TABLES
    }

    /// The table for one calendar system.
    pub fn table_for(&self, calendar: CalendarSystem) -> &'static MonthTable {
        month_table(calendar)
    }

    /// Month token for a calendar and 1-based month number.
    pub fn abbreviation(&self, calendar: CalendarSystem, month: u32) -> Option<&'static str> {
        self.table_for(calendar).abbreviation(month)
    }

    /// 1-based month number for a calendar and token.
    pub fn resolve_month(&self, calendar: CalendarSystem, token: &str) -> Option<u32> {
        self.table_for(calendar).index_of(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_calendar_resolves() {
        let registry = CalendarRegistry::new();
        for calendar in CalendarSystem::all() {
            let table = registry.table_for(calendar);
            assert_eq!(table.calendar(), calendar);
            assert!(table.month_count() >= 12);
        }
    }

    #[test]
    fn test_cross_calendar_lookup() {
        let registry = CalendarRegistry::new();
        assert_eq!(
            registry.abbreviation(CalendarSystem::Hijri, 1),
            Some("MUHAR")
        );
        assert_eq!(
            registry.abbreviation(CalendarSystem::FrenchRepublican, 13),
            Some("COMP")
        );
        assert_eq!(registry.abbreviation(CalendarSystem::Jalali, 13), None);
        assert_eq!(
            registry.resolve_month(CalendarSystem::Hebrew, "ELL"),
            Some(13)
        );
    }
}
