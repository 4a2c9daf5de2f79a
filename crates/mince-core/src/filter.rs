use crate::value::{Mapping, StructuredValue};
use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("include_keys and exclude_keys are mutually exclusive (include: {include:?}, exclude: {exclude:?})")]
    ConflictingFilters {
        include: BTreeSet<String>,
        exclude: BTreeSet<String>,
    },
}

/// Shallow key selection applied to the top level of a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter {
    #[default]
    All,
    Include(BTreeSet<String>),
    Exclude(BTreeSet<String>),
}

impl FieldFilter {
    /// Empty key sets count as absent.
    pub fn from_options<I, E>(include: Option<I>, exclude: Option<E>) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let include = collect_keys(include);
        let exclude = collect_keys(exclude);
        match (include.is_empty(), exclude.is_empty()) {
            (true, true) => Ok(Self::All),
            (false, true) => Ok(Self::Include(include)),
            (true, false) => Ok(Self::Exclude(exclude)),
            (false, false) => Err(ConfigurationError::ConflictingFilters { include, exclude }),
        }
    }

    pub fn keeps(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Include(keys) => keys.contains(key),
            Self::Exclude(keys) => !keys.contains(key),
        }
    }

    /// Borrowed view of the kept entries, in their original order.
    pub fn select<'a>(&'a self, mapping: &'a Mapping) -> impl Iterator<Item = (&'a String, &'a StructuredValue)> + 'a {
        mapping.iter().filter(move |(key, _)| self.keeps(key))
    }
}

fn collect_keys<T>(keys: Option<T>) -> BTreeSet<String>
where
    T: IntoIterator,
    T::Item: Into<String>,
{
    keys.into_iter().flatten().map(Into::into).collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
