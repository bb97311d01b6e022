//! Latitude/longitude normalization for GEDCOM `LATI`/`LONG` values.
//!
//! Canonical form is a hemisphere letter followed by decimal degrees
//! (`N51.5074`, `W0.1278`). Input may carry signs instead of hemisphere
//! letters, a trailing hemisphere letter, degree/minute/second notation
//! (`12°34'56`, `0 34 11.2W`), or a decimal comma; all are rewritten.
//! Degrees-minutes-seconds convert to decimal degrees rounded to four
//! places. Like the date pipeline, this never fails: input that fits no
//! pattern is returned as cleaned up as it got.

use std::sync::LazyLock;

use ged_model::CoordinateAxis;
use regex::Regex;

static DMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+):([0-9.]+)(.*)$").unwrap());
static DM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)(.*)$").unwrap());
// The left side excludes hemisphere letters so moving the suffix to the
// front cannot re-trigger on its own output.
static HEMISPHERE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^NSEW]*)([NSEW]+)$").unwrap());

/// Rewrite a raw coordinate value into canonical hemisphere-prefixed
/// decimal degrees.
pub fn normalize_coordinate(raw: &str, axis: CoordinateAxis) -> String {
    let positive = axis.positive_hemisphere();
    let negative = axis.negative_hemisphere();

    let mut value = raw.to_uppercase().trim().to_string();
    // Unify separators and signs: "N12 34" and "12°34'" both become
    // colon-delimited, "+" is implicit, "-" means the negative hemisphere.
    value = value.replace(' ', ":");
    value = value.replace('+', "");
    value = value.replace('-', &negative.to_string());
    value = value.replace(',', ".");
    value = value.replace('\u{00b0}', ":");
    value = value.replace('\'', ":");

    value = convert_to_decimal(&value);

    if let Some(caps) = HEMISPHERE_SUFFIX_RE.captures(&value) {
        value = format!("{}{}", &caps[2], &caps[1]);
    }

    if let Some(first) = value.chars().next()
        && first != positive
        && first != negative
    {
        value.insert(0, positive);
    }
    value
}

/// Convert leading colon-delimited degree fields to decimal degrees.
///
/// The trailing capture keeps whatever followed the numeric part (a
/// hemisphere letter, usually) so the suffix rule can move it up front.
/// Fields that fail to parse leave the value untouched.
fn convert_to_decimal(value: &str) -> String {
    if let Some(caps) = DMS_RE.captures(value) {
        let (Ok(degrees), Ok(minutes), Ok(seconds)) = (
            caps[1].parse::<f64>(),
            caps[2].parse::<f64>(),
            caps[3].parse::<f64>(),
        ) else {
            return value.to_string();
        };
        let decimal = round4(degrees + minutes / 60.0 + seconds / 3600.0);
        return format!("{}{decimal}", &caps[4]);
    }
    if let Some(caps) = DM_RE.captures(value) {
        let (Ok(degrees), Ok(minutes)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
            return value.to_string();
        };
        let decimal = round4(degrees + minutes / 60.0);
        return format!("{}{decimal}", &caps[3]);
    }
    value.to_string()
}

fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_becomes_hemisphere() {
        assert_eq!(
            normalize_coordinate("-0.5698", CoordinateAxis::Longitude),
            "W0.5698"
        );
        assert_eq!(
            normalize_coordinate("+17.1234", CoordinateAxis::Latitude),
            "N17.1234"
        );
    }

    #[test]
    fn test_bare_value_gets_positive_prefix() {
        assert_eq!(
            normalize_coordinate("17.1234", CoordinateAxis::Latitude),
            "N17.1234"
        );
        assert_eq!(
            normalize_coordinate("0,5698", CoordinateAxis::Longitude),
            "E0.5698"
        );
    }

    #[test]
    fn test_trailing_hemisphere_moves_to_front() {
        assert_eq!(
            normalize_coordinate("17.1234E", CoordinateAxis::Longitude),
            "E17.1234"
        );
    }

    #[test]
    fn test_degrees_minutes_seconds() {
        assert_eq!(
            normalize_coordinate("0 34 11.2W", CoordinateAxis::Longitude),
            "W0.5698"
        );
        assert_eq!(
            normalize_coordinate("12\u{00b0}34'56", CoordinateAxis::Latitude),
            "N12.5822"
        );
    }

    #[test]
    fn test_degrees_minutes_only() {
        assert_eq!(
            normalize_coordinate("0 34W", CoordinateAxis::Longitude),
            "W0.5667"
        );
    }

    #[test]
    fn test_prefixed_input_is_stable() {
        assert_eq!(
            normalize_coordinate("N51.5074", CoordinateAxis::Latitude),
            "N51.5074"
        );
        assert_eq!(
            normalize_coordinate("S0.5698", CoordinateAxis::Latitude),
            "S0.5698"
        );
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize_coordinate("", CoordinateAxis::Latitude), "");
        assert_eq!(normalize_coordinate("   ", CoordinateAxis::Latitude), "");
    }
}
