use crate::coercion::CoercionTable;
use crate::field_path::FieldPath;
use crate::value::StructuredValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("value at `{path}` has unsupported type `{type_name}`")]
    Unsupported { path: FieldPath, type_name: String },
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncodingError {
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Unsupported { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}

/// Compact JSON with object keys sorted at every depth and non-ASCII text left as is.
///
/// Takes the top-level entries by reference, so a `&Mapping` or a filtered view of one.
pub fn stable_json_bytes<'a, E>(entries: E, coercions: &CoercionTable) -> Result<Vec<u8>, EncodingError>
where
    E: IntoIterator<Item = (&'a String, &'a StructuredValue)>,
{
    let normalized = normalize_entries(entries, coercions, &FieldPath::root())?;
    Ok(serde_json::to_vec(&normalized)?)
}

pub fn stable_json_string<'a, E>(entries: E, coercions: &CoercionTable) -> Result<String, EncodingError>
where
    E: IntoIterator<Item = (&'a String, &'a StructuredValue)>,
{
    let normalized = normalize_entries(entries, coercions, &FieldPath::root())?;
    Ok(serde_json::to_string(&normalized)?)
}

fn normalize_value(
    value: &StructuredValue,
    coercions: &CoercionTable,
    path: &FieldPath,
) -> Result<Value, EncodingError> {
    match value {
        StructuredValue::Null => Ok(Value::Null),
        StructuredValue::Bool(flag) => Ok(Value::Bool(*flag)),
        StructuredValue::Number(number) => Ok(Value::Number(number.clone())),
        StructuredValue::String(text) => Ok(Value::String(text.clone())),
        StructuredValue::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_value(item, coercions, &path.child_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        StructuredValue::Mapping(mapping) => normalize_entries(mapping, coercions, path),
        extended => coercions
            .coerce(extended)
            .map(sort_json_objects)
            .ok_or_else(|| EncodingError::Unsupported {
                path: path.clone(),
                type_name: extended.type_name().to_string(),
            }),
    }
}

fn normalize_entries<'a, E>(entries: E, coercions: &CoercionTable, path: &FieldPath) -> Result<Value, EncodingError>
where
    E: IntoIterator<Item = (&'a String, &'a StructuredValue)>,
{
    let mut ordered = BTreeMap::new();
    for (key, value) in entries {
        ordered.insert(key.clone(), normalize_value(value, coercions, &path.child_key(key.as_str()))?);
    }

    let mut out = Map::new();
    for (key, value) in ordered {
        out.insert(key, value);
    }
    Ok(Value::Object(out))
}

// Coercions may hand back objects built in any order.
fn sort_json_objects(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let ordered = object
                .into_iter()
                .map(|(key, value)| (key, sort_json_objects(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(ordered.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_json_objects).collect()),
        other => other,
    }
}

#[cfg(test)]
#[path = "stable_json_test.rs"]
mod tests;
