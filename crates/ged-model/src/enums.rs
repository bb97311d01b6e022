//! Type-safe enumerations for GEDCOM date and place vocabulary.
//!
//! These enums provide compile-time type safety for concepts that the
//! GEDCOM 5.5.1 text grammar represents as bare keywords.
//!
//! # GEDCOM 5.5.1 Reference
//!
//! - Date qualifiers: Chapter 2, `DATE_APPROXIMATED` and `DATE_RANGE`
//! - Coordinate hemispheres: Chapter 2, `PLACE_LATITUDE` / `PLACE_LONGITUDE`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GedError;

/// Preferred field order for delimited numeric date input.
///
/// Resolved from locale context; inputs such as `03/04/2005` are ambiguous
/// without it. Defaults to day-month-year when the preference is absent
/// or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateOrder {
    /// Day, month, year (`17.11.1860`).
    #[default]
    DayMonthYear,
    /// Month, day, year (`11/17/1860`).
    MonthDayYear,
    /// Year, month, day (`1860-11-17`).
    YearMonthDay,
}

impl DateOrder {
    /// Returns the short locale code (`DMY`, `MDY`, `YMD`).
    pub fn as_code(&self) -> &'static str {
        match self {
            DateOrder::DayMonthYear => "DMY",
            DateOrder::MonthDayYear => "MDY",
            DateOrder::YearMonthDay => "YMD",
        }
    }

    /// All orders in canonical precedence (day-month-year first).
    ///
    /// This is the fallback sequence used when the preferred order does
    /// not yield a plausible day/month assignment.
    pub fn all() -> [DateOrder; 3] {
        [
            DateOrder::DayMonthYear,
            DateOrder::MonthDayYear,
            DateOrder::YearMonthDay,
        ]
    }

    /// Parse a locale code, falling back to the default on unknown input.
    ///
    /// Surrounding page/session context supplies free-form strings; an
    /// unrecognized value must not be an error.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for DateOrder {
    type Err = GedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DMY" => Ok(DateOrder::DayMonthYear),
            "MDY" => Ok(DateOrder::MonthDayYear),
            "YMD" => Ok(DateOrder::YearMonthDay),
            _ => Err(GedError::Message(format!("Unknown date order: {s}"))),
        }
    }
}

/// Date qualifier keyword per GEDCOM 5.5.1.
///
/// Approximated dates use `ABT`/`CAL`/`EST`; open-ended ranges use
/// `BEF`/`AFT`; periods use `FROM`/`TO`. Each qualifier also has a
/// single-character shorthand accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualifier {
    /// About: the date is near the given value (`~` shorthand).
    About,
    /// Estimated from related evidence (`*` shorthand).
    Estimated,
    /// Calculated from other data, e.g. age at death (`#` shorthand).
    Calculated,
    /// Before the given date (`<` shorthand).
    Before,
    /// After the given date (`>` shorthand).
    After,
    /// Period start (trailing `-` shorthand).
    From,
    /// Period end (leading `-` shorthand).
    To,
}

impl Qualifier {
    /// Returns the canonical keyword as it appears in GEDCOM output.
    pub fn keyword(&self) -> &'static str {
        match self {
            Qualifier::About => "ABT",
            Qualifier::Estimated => "EST",
            Qualifier::Calculated => "CAL",
            Qualifier::Before => "BEF",
            Qualifier::After => "AFT",
            Qualifier::From => "FROM",
            Qualifier::To => "TO",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for Qualifier {
    type Err = GedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ABT" | "ABOUT" => Ok(Qualifier::About),
            "EST" | "ESTIMATED" => Ok(Qualifier::Estimated),
            "CAL" | "CALCULATED" => Ok(Qualifier::Calculated),
            "BEF" | "BEFORE" => Ok(Qualifier::Before),
            "AFT" | "AFTER" => Ok(Qualifier::After),
            "FROM" => Ok(Qualifier::From),
            "TO" => Ok(Qualifier::To),
            _ => Err(GedError::Message(format!("Unknown date qualifier: {s}"))),
        }
    }
}

/// Axis of a GEDCOM map coordinate (`LATI` or `LONG`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateAxis {
    /// North/south position; hemispheres `N` (positive) and `S` (negative).
    Latitude,
    /// East/west position; hemispheres `E` (positive) and `W` (negative).
    Longitude,
}

impl CoordinateAxis {
    /// The GEDCOM tag the axis value is stored under.
    pub fn tag(&self) -> &'static str {
        match self {
            CoordinateAxis::Latitude => "LATI",
            CoordinateAxis::Longitude => "LONG",
        }
    }

    /// Hemisphere letter for positive values.
    pub fn positive_hemisphere(&self) -> char {
        match self {
            CoordinateAxis::Latitude => 'N',
            CoordinateAxis::Longitude => 'E',
        }
    }

    /// Hemisphere letter for negative values.
    pub fn negative_hemisphere(&self) -> char {
        match self {
            CoordinateAxis::Latitude => 'S',
            CoordinateAxis::Longitude => 'W',
        }
    }
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for CoordinateAxis {
    type Err = GedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LATI" | "LATITUDE" => Ok(CoordinateAxis::Latitude),
            "LONG" | "LONGITUDE" => Ok(CoordinateAxis::Longitude),
            _ => Err(GedError::Message(format!("Unknown coordinate axis: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_order_from_str() {
        assert_eq!("DMY".parse::<DateOrder>().unwrap(), DateOrder::DayMonthYear);
        assert_eq!("mdy".parse::<DateOrder>().unwrap(), DateOrder::MonthDayYear);
        assert_eq!(
            " ymd ".parse::<DateOrder>().unwrap(),
            DateOrder::YearMonthDay
        );
        assert!("XYZ".parse::<DateOrder>().is_err());
    }

    #[test]
    fn test_date_order_default_on_invalid() {
        assert_eq!(
            DateOrder::from_code_or_default("nonsense"),
            DateOrder::DayMonthYear
        );
        assert_eq!(
            DateOrder::from_code_or_default("MDY"),
            DateOrder::MonthDayYear
        );
    }

    #[test]
    fn test_qualifier_keywords() {
        assert_eq!(Qualifier::About.keyword(), "ABT");
        assert_eq!(Qualifier::Calculated.keyword(), "CAL");
        assert_eq!("before".parse::<Qualifier>().unwrap(), Qualifier::Before);
        assert_eq!("FROM".parse::<Qualifier>().unwrap(), Qualifier::From);
    }

    #[test]
    fn test_coordinate_axis_hemispheres() {
        assert_eq!(CoordinateAxis::Latitude.positive_hemisphere(), 'N');
        assert_eq!(CoordinateAxis::Latitude.negative_hemisphere(), 'S');
        assert_eq!(CoordinateAxis::Longitude.positive_hemisphere(), 'E');
        assert_eq!(CoordinateAxis::Longitude.negative_hemisphere(), 'W');
        assert_eq!(
            "latitude".parse::<CoordinateAxis>().unwrap(),
            CoordinateAxis::Latitude
        );
    }
}
