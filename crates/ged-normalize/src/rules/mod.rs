//! The individual rewrite stages, one module per rule.

pub mod calendar;
pub mod months;
pub mod padding;
pub mod quarter;
pub mod shorthand;
pub mod triple;
pub mod us_format;
