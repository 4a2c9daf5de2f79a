use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub type Mapping = IndexMap<String, StructuredValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<StructuredValue>),
    Mapping(Mapping),
    Timestamp(Timestamp),
    Enum(EnumConstant),
    Opaque(OpaqueValue),
}

impl StructuredValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Timestamp(_) => "timestamp",
            Self::Enum(_) => "enum",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Name of the concrete type, used when reporting values that cannot be encoded.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Enum(constant) => constant.type_name.as_str(),
            Self::Opaque(opaque) => opaque.type_name,
            other => other.kind(),
        }
    }

    pub fn from_enum<E: ScalarEnum>(member: &E) -> Self {
        Self::Enum(EnumConstant::of(member))
    }

    pub fn opaque<T: Any + Send + Sync>(inner: T) -> Self {
        Self::Opaque(OpaqueValue::new(inner))
    }
}

impl From<Value> for StructuredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(object) => Self::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for StructuredValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StructuredValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for StructuredValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for StructuredValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for StructuredValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StructuredValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<StructuredValue>> From<Vec<T>> for StructuredValue {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for StructuredValue {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<NaiveDateTime> for StructuredValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(Timestamp::Naive(value))
    }
}

impl From<DateTime<FixedOffset>> for StructuredValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(Timestamp::Aware(value))
    }
}

impl From<DateTime<Utc>> for StructuredValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(Timestamp::Aware(value.fixed_offset()))
    }
}

impl<T: Into<StructuredValue>> From<Option<T>> for StructuredValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A point in time that may or may not carry a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// ISO-8601 text with the fractional part only when it is non-zero.
    ///
    /// Whole microseconds render with six digits, anything finer with nine.
    pub fn to_iso_string(&self) -> String {
        let naive = match self {
            Self::Naive(naive) => *naive,
            Self::Aware(aware) => aware.naive_local(),
        };
        // `%S` already reports a leap second as 60
        let mut out = naive.format("%Y-%m-%dT%H:%M:%S").to_string();
        let nanos = naive.nanosecond() % 1_000_000_000;
        if nanos != 0 {
            if nanos % 1_000 == 0 {
                out.push_str(&format!(".{:06}", nanos / 1_000));
            } else {
                out.push_str(&format!(".{nanos:09}"));
            }
        }
        if let Self::Aware(aware) = self {
            out.push_str(&format_offset(aware.offset().local_minus_utc()));
        }
        out
    }
}

/// `+HH:MM`, or `+HH:MM:SS` when the offset is not a whole number of minutes.
fn format_offset(local_minus_utc: i32) -> String {
    let sign = if local_minus_utc < 0 { '-' } else { '+' };
    let total = local_minus_utc.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3_600, total / 60 % 60, total % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Enumerations whose members stand for an underlying scalar.
pub trait ScalarEnum {
    fn type_name(&self) -> &'static str;
    fn member_name(&self) -> &'static str;
    fn scalar(&self) -> Value;
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstant {
    pub type_name: String,
    pub member: String,
    pub value: Value,
}

impl EnumConstant {
    pub fn of<E: ScalarEnum>(member: &E) -> Self {
        Self {
            type_name: member.type_name().to_string(),
            member: member.member_name().to_string(),
            value: member.scalar(),
        }
    }
}

#[derive(Clone)]
pub struct OpaqueValue {
    pub type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(inner: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(inner),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl Debug for OpaqueValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpaqueValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
