use crate::value::StructuredValue;
use serde_json::Value;
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

/// Turns a value the canonical encoder does not understand natively into JSON.
pub trait Coercion: Send + Sync {
    fn name(&self) -> &str;
    fn applies(&self, value: &StructuredValue) -> bool;
    fn coerce(&self, value: &StructuredValue) -> Value;
}

/// Ordered list of coercions. The first entry whose `applies` returns true wins.
#[derive(Clone)]
pub struct CoercionTable {
    entries: Vec<Arc<dyn Coercion>>,
}

impl CoercionTable {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, coercion: impl Coercion + 'static) -> &mut Self {
        self.entries.push(Arc::new(coercion));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }

    pub fn coerce(&self, value: &StructuredValue) -> Option<Value> {
        let entry = self.entries.iter().find(|entry| entry.applies(value))?;
        tracing::trace!(coercion = entry.name(), kind = value.kind(), "coercing value");
        Some(entry.coerce(value))
    }
}

impl Default for CoercionTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(TimestampCoercion).register(EnumCoercion);
        table
    }
}

impl Debug for CoercionTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampCoercion;

impl Coercion for TimestampCoercion {
    fn name(&self) -> &str {
        "timestamp"
    }

    fn applies(&self, value: &StructuredValue) -> bool {
        matches!(value, StructuredValue::Timestamp(_))
    }

    fn coerce(&self, value: &StructuredValue) -> Value {
        match value {
            StructuredValue::Timestamp(timestamp) => Value::String(timestamp.to_iso_string()),
            _ => Value::Null,
        }
    }
}

/// Replaces an enum member with its underlying value, never its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumCoercion;

impl Coercion for EnumCoercion {
    fn name(&self) -> &str {
        "enum"
    }

    fn applies(&self, value: &StructuredValue) -> bool {
        matches!(value, StructuredValue::Enum(_))
    }

    fn coerce(&self, value: &StructuredValue) -> Value {
        match value {
            StructuredValue::Enum(constant) => constant.value.clone(),
            _ => Value::Null,
        }
    }
}

pub struct OpaqueCoercion<T, F> {
    name: String,
    encode: F,
    marker: PhantomData<fn(&T)>,
}

/// Coercion for opaque values holding a `T`.
pub fn opaque_coercion<T, F>(name: impl Into<String>, encode: F) -> OpaqueCoercion<T, F>
where
    T: Any,
    F: Fn(&T) -> Value + Send + Sync,
{
    OpaqueCoercion {
        name: name.into(),
        encode,
        marker: PhantomData,
    }
}

impl<T, F> Coercion for OpaqueCoercion<T, F>
where
    T: Any,
    F: Fn(&T) -> Value + Send + Sync,
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn applies(&self, value: &StructuredValue) -> bool {
        matches!(value, StructuredValue::Opaque(opaque) if opaque.downcast_ref::<T>().is_some())
    }

    fn coerce(&self, value: &StructuredValue) -> Value {
        match value {
            StructuredValue::Opaque(opaque) => opaque
                .downcast_ref::<T>()
                .map_or(Value::Null, |inner| (self.encode)(inner)),
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
#[path = "coercion_test.rs"]
mod tests;
