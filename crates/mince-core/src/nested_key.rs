use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Follows `key -> value` links through `links` until a key is missing or maps
/// to itself, and returns the last key reached.
///
/// A chain that loops back onto an earlier key stops at that key.
pub fn find_nested_key<K, Q>(key: &Q, links: &HashMap<K, K>) -> K
where
    K: Borrow<Q> + Eq + Hash + Clone,
    Q: ToOwned<Owned = K> + Eq + Hash + ?Sized,
{
    let mut current = key.to_owned();
    let mut visited = HashSet::new();
    while let Some(next) = links.get(Borrow::<Q>::borrow(&current)) {
        if *next == current || !visited.insert(current.clone()) {
            break;
        }
        current = next.clone();
    }
    current
}

#[cfg(test)]
#[path = "nested_key_test.rs"]
mod tests;
