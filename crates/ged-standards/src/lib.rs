pub mod months;
pub mod registry;

pub use months::{
    ENGLISH_MONTH_NAMES, FRENCH_MONTHS, GREGORIAN_MONTHS, HEBREW_MONTHS, HIJRI_MONTHS,
    JALALI_MONTHS, MonthTable,
};
pub use registry::{CalendarRegistry, month_table};
