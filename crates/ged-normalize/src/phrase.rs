//! Date-phrase handling.
//!
//! A parenthesized suffix is a free-text date phrase (`17 NOV 1860
//! (maybe wrong)`). The phrase is carried around the rewrite pipeline
//! verbatim: it is split off before the first `(` and reattached,
//! unmodified, after every rule has run.

/// Split a raw value into the date segment and an optional phrase.
///
/// The phrase is everything after the first `(`, returned without the
/// opening parenthesis and exactly as typed.
pub fn split_phrase(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('(') {
        Some((date, phrase)) => (date, Some(phrase)),
        None => (raw, None),
    }
}

/// Reattach a phrase extracted by [`split_phrase`].
pub fn reattach(date: String, phrase: Option<&str>) -> String {
    match phrase {
        Some(phrase) => format!("{date} ({phrase}"),
        None => date,
    }
}
