//! CLI library components for the GEDCOM field normalizer.

pub mod batch;
pub mod logging;
