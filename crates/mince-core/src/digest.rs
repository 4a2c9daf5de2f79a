//! Order-independent fingerprints of nested mappings.
//!
//! A [`StructuralDigest`] filters the top level of a mapping, renders it as
//! canonical JSON (sorted keys, compact separators, literal UTF-8) and hashes
//! the text with SHA-256. Two mappings holding the same keys and values digest
//! identically no matter how their keys were inserted.

use crate::coercion::{Coercion, CoercionTable};
use crate::filter::{ConfigurationError, FieldFilter};
use crate::stable_hash::sha256_hex;
use crate::stable_json::{stable_json_string, EncodingError};
use crate::value::Mapping;

#[derive(Debug, Clone, Default)]
pub struct StructuralDigest {
    filter: FieldFilter,
    coercions: CoercionTable,
}

impl StructuralDigest {
    /// Fails when both key sets are given and non-empty.
    pub fn configure<I, E>(include_keys: Option<I>, exclude_keys: Option<E>) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let filter = FieldFilter::from_options(include_keys, exclude_keys)?;
        Ok(Self::with_filter(filter))
    }

    pub fn with_filter(filter: FieldFilter) -> Self {
        Self {
            filter,
            coercions: CoercionTable::default(),
        }
    }

    /// Appends a coercion after the built-in timestamp and enum entries.
    pub fn with_coercion(mut self, coercion: impl Coercion + 'static) -> Self {
        self.coercions.register(coercion);
        self
    }

    pub fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    pub fn coercions(&self) -> &CoercionTable {
        &self.coercions
    }

    pub fn canonical_json(&self, mapping: &Mapping) -> Result<String, EncodingError> {
        stable_json_string(self.filter.select(mapping), &self.coercions)
    }

    pub fn digest(&self, mapping: &Mapping) -> Result<String, EncodingError> {
        self.canonical_digest(mapping).map(|(digest, _)| digest)
    }

    /// The digest together with the canonical text it was computed from.
    pub fn canonical_digest(&self, mapping: &Mapping) -> Result<(String, String), EncodingError> {
        let canonical = self.canonical_json(mapping)?;
        let digest = sha256_hex(canonical.as_bytes());
        tracing::debug!(
            keys = mapping.len(),
            canonical_len = canonical.len(),
            digest = %digest,
            "computed structural digest"
        );
        Ok((digest, canonical))
    }
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
