//! Month abbreviation tables for the supported calendar systems.
//!
//! GEDCOM month tokens are fixed, upper-case abbreviations of three to
//! five letters. The Gregorian table has 12 entries; the Hebrew and
//! French Republican tables carry a 13th month (`ELL` is the leap-year
//! Elul position, `COMP` the complementary days).

use serde::Serialize;

use ged_model::CalendarSystem;

/// Gregorian month tokens (GEDCOM 5.5.1 `MONTH`).
pub const GREGORIAN_MONTHS: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Hijri month tokens (GEDCOM `MONTH_HEBR` analogue for `@#DHIJRI@`).
pub const HIJRI_MONTHS: &[&str] = &[
    "MUHAR", "SAFAR", "RABIA", "RABIT", "JUMAA", "JUMAT", "RAJAB", "SHAAB", "RAMAD", "SHAWW",
    "DHUAQ", "DHUAH",
];

/// Hebrew month tokens (GEDCOM 5.5.1 `MONTH_HEBR`), Tishrei first.
pub const HEBREW_MONTHS: &[&str] = &[
    "TSH", "CSH", "KSL", "TVT", "SHV", "ADR", "ADS", "NSN", "IYR", "SVN", "TMZ", "AAV", "ELL",
];

/// French Republican month tokens (GEDCOM 5.5.1 `MONTH_FREN`).
pub const FRENCH_MONTHS: &[&str] = &[
    "VEND", "BRUM", "FRIM", "NIVO", "PLUV", "VENT", "GERM", "FLOR", "PRAI", "MESS", "THER",
    "FRUC", "COMP",
];

/// Jalali month tokens for `@#DJALALI@` dates.
pub const JALALI_MONTHS: &[&str] = &[
    "FARVA", "ORDIB", "KHORD", "TIR", "MORDA", "SHAHR", "MEHR", "ABAN", "AZAR", "DEY", "BAHMA",
    "ESFAN",
];

/// English full month names paired with their Gregorian tokens.
///
/// Used to collapse spelled-out month names on input. The pairs are
/// ordered January..December; `MAY` maps to itself.
pub const ENGLISH_MONTH_NAMES: &[(&str, &str)] = &[
    ("JANUARY", "JAN"),
    ("FEBRUARY", "FEB"),
    ("MARCH", "MAR"),
    ("APRIL", "APR"),
    ("MAY", "MAY"),
    ("JUNE", "JUN"),
    ("JULY", "JUL"),
    ("AUGUST", "AUG"),
    ("SEPTEMBER", "SEP"),
    ("OCTOBER", "OCT"),
    ("NOVEMBER", "NOV"),
    ("DECEMBER", "DEC"),
];

/// An ordered, read-only month table for one calendar system.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthTable {
    calendar: CalendarSystem,
    abbreviations: &'static [&'static str],
}

impl MonthTable {
    pub const fn new(calendar: CalendarSystem, abbreviations: &'static [&'static str]) -> Self {
        Self {
            calendar,
            abbreviations,
        }
    }

    /// The calendar system this table belongs to.
    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Number of months in the table (12 or 13).
    pub fn month_count(&self) -> u32 {
        self.abbreviations.len() as u32
    }

    /// All abbreviations in month order.
    pub fn abbreviations(&self) -> &'static [&'static str] {
        self.abbreviations
    }

    /// Month token for a 1-based month number.
    ///
    /// Returns `None` when the number is 0 or past the end of the table,
    /// so callers can leave unrecognized input untouched.
    pub fn abbreviation(&self, month: u32) -> Option<&'static str> {
        if month == 0 {
            return None;
        }
        self.abbreviations.get(month as usize - 1).copied()
    }

    /// 1-based month number for a token, case-insensitive.
    pub fn index_of(&self, token: &str) -> Option<u32> {
        let needle = token.trim().to_uppercase();
        self.abbreviations
            .iter()
            .position(|abbr| *abbr == needle)
            .map(|idx| idx as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(GREGORIAN_MONTHS.len(), 12);
        assert_eq!(HIJRI_MONTHS.len(), 12);
        assert_eq!(HEBREW_MONTHS.len(), 13);
        assert_eq!(FRENCH_MONTHS.len(), 13);
        assert_eq!(JALALI_MONTHS.len(), 12);
        assert_eq!(ENGLISH_MONTH_NAMES.len(), 12);
    }

    #[test]
    fn test_one_based_lookup() {
        let table = MonthTable::new(CalendarSystem::Gregorian, GREGORIAN_MONTHS);
        assert_eq!(table.abbreviation(1), Some("JAN"));
        assert_eq!(table.abbreviation(12), Some("DEC"));
        assert_eq!(table.abbreviation(0), None);
        assert_eq!(table.abbreviation(13), None);
    }

    #[test]
    fn test_index_round_trip() {
        let table = MonthTable::new(CalendarSystem::Hebrew, HEBREW_MONTHS);
        for month in 1..=table.month_count() {
            let token = table.abbreviation(month).unwrap();
            assert_eq!(table.index_of(token), Some(month));
        }
        assert_eq!(table.index_of("tsh"), Some(1));
        assert_eq!(table.index_of("NOPE"), None);
    }

    #[test]
    fn test_token_widths() {
        for table in [
            MonthTable::new(CalendarSystem::Gregorian, GREGORIAN_MONTHS),
            MonthTable::new(CalendarSystem::Hijri, HIJRI_MONTHS),
            MonthTable::new(CalendarSystem::Hebrew, HEBREW_MONTHS),
            MonthTable::new(CalendarSystem::FrenchRepublican, FRENCH_MONTHS),
            MonthTable::new(CalendarSystem::Jalali, JALALI_MONTHS),
        ] {
            for token in table.abbreviations() {
                assert!(
                    (3..=5).contains(&token.len()),
                    "token {token} out of 3-5 letter range"
                );
            }
        }
    }
}
