use chrono::{Datelike, Weekday};
use mince_core::{ScalarEnum, StructuredValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{value} is not a valid {type_name} value")]
pub struct WeekDayOutOfRange {
    pub type_name: &'static str,
    pub value: u8,
}

const MEMBERS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn member_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

macro_rules! weekday_enum {
    ($(#[$meta:meta])* $name:ident, first = $first:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[repr(u8)]
        pub enum $name {
            Monday = $first,
            Tuesday,
            Wednesday,
            Thursday,
            Friday,
            Saturday,
            Sunday,
        }

        impl $name {
            pub const ALL: [Self; 7] = [
                Self::Monday,
                Self::Tuesday,
                Self::Wednesday,
                Self::Thursday,
                Self::Friday,
                Self::Saturday,
                Self::Sunday,
            ];

            pub fn of(date: &impl Datelike) -> Self {
                Self::from(date.weekday())
            }

            pub fn value(self) -> u8 {
                self as u8
            }

            pub fn weekday(self) -> Weekday {
                MEMBERS[usize::from(self.value() - $first)]
            }
        }

        impl From<Weekday> for $name {
            fn from(day: Weekday) -> Self {
                Self::ALL[day.num_days_from_monday() as usize]
            }
        }

        impl TryFrom<u8> for $name {
            type Error = WeekDayOutOfRange;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                value
                    .checked_sub($first)
                    .and_then(|offset| Self::ALL.get(usize::from(offset)).copied())
                    .ok_or(WeekDayOutOfRange {
                        type_name: stringify!($name),
                        value,
                    })
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(member_name(self.weekday()))
            }
        }

        impl ScalarEnum for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn member_name(&self) -> &'static str {
                member_name(self.weekday())
            }

            fn scalar(&self) -> Value {
                Value::from(self.value())
            }
        }

        impl From<$name> for StructuredValue {
            fn from(day: $name) -> Self {
                StructuredValue::from_enum(&day)
            }
        }
    };
}

weekday_enum!(
    /// Days of the week with Monday as 0 and Sunday as 6.
    WeekDay,
    first = 0
);

weekday_enum!(
    /// ISO days of the week with Monday as 1 and Sunday as 7.
    IsoWeekDay,
    first = 1
);

#[cfg(test)]
#[path = "weekday_test.rs"]
mod tests;
