pub mod calendar;
pub mod enums;
pub mod error;

pub use calendar::CalendarSystem;
pub use enums::{CoordinateAxis, DateOrder, Qualifier};
pub use error::{GedError, Result};
