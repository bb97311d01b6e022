//! Calendar systems recognized by the GEDCOM date grammar.
//!
//! GEDCOM dates default to the Gregorian calendar; any other system is
//! introduced by a calendar escape sequence (`@#DHEBREW@ 1 TSH 5680`)
//! that stays in effect for the rest of the date value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GedError;

/// A calendar system with a GEDCOM escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// Default calendar; no escape tag is emitted for it.
    Gregorian,
    /// Islamic lunar calendar.
    Hijri,
    /// Hebrew lunisolar calendar (13 months in leap years).
    Hebrew,
    /// French Republican calendar (12 months plus the complementary days).
    FrenchRepublican,
    /// Persian solar calendar.
    Jalali,
}

impl CalendarSystem {
    /// Returns the calendar escape sequence emitted in canonical output.
    pub fn escape_tag(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "@#DGREGORIAN@",
            CalendarSystem::Hijri => "@#DHIJRI@",
            CalendarSystem::Hebrew => "@#DHEBREW@",
            CalendarSystem::FrenchRepublican => "@#DFRENCH R@",
            CalendarSystem::Jalali => "@#DJALALI@",
        }
    }

    /// Returns the bare keyword accepted as input shorthand for the tag.
    pub fn keyword(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "GREGORIAN",
            CalendarSystem::Hijri => "HIJRI",
            CalendarSystem::Hebrew => "HEBREW",
            CalendarSystem::FrenchRepublican => "FRENCH",
            CalendarSystem::Jalali => "JALALI",
        }
    }

    /// Human-readable calendar name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Hijri => "Hijri",
            CalendarSystem::Hebrew => "Hebrew",
            CalendarSystem::FrenchRepublican => "French Republican",
            CalendarSystem::Jalali => "Jalali",
        }
    }

    /// All supported calendar systems, Gregorian first.
    pub fn all() -> [CalendarSystem; 5] {
        [
            CalendarSystem::Gregorian,
            CalendarSystem::Hijri,
            CalendarSystem::Hebrew,
            CalendarSystem::FrenchRepublican,
            CalendarSystem::Jalali,
        ]
    }

    /// The non-default calendars, i.e. those that require an escape tag.
    pub fn alternates() -> [CalendarSystem; 4] {
        [
            CalendarSystem::Hijri,
            CalendarSystem::Jalali,
            CalendarSystem::Hebrew,
            CalendarSystem::FrenchRepublican,
        ]
    }

    /// Returns true for the default (Gregorian) calendar.
    pub fn is_default(&self) -> bool {
        matches!(self, CalendarSystem::Gregorian)
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = GedError;

    /// Parse a calendar from its keyword, escape tag, or display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        for calendar in CalendarSystem::all() {
            if normalized == calendar.keyword()
                || normalized == calendar.escape_tag()
                || normalized == calendar.as_str().to_uppercase()
            {
                return Ok(calendar);
            }
        }
        Err(GedError::Message(format!("Unknown calendar system: {s}")))
    }
}
