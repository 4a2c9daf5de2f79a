pub mod range;
pub mod weekday;
pub mod year;

pub use range::{irange, DateRange, DateRangeError, RangePoint};
pub use weekday::{IsoWeekDay, WeekDay, WeekDayOutOfRange};
pub use year::{string2year, YearParseError};
