use std::collections::HashSet;
use std::hash::Hash;

/// True when no element of `iterable` appears twice.
pub fn uniques<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut seen = HashSet::new();
    iterable.into_iter().all(|item| seen.insert(item))
}

/// True when no two elements share the same key.
pub fn uniques_by<I, K, F>(iterable: I, mut key: F) -> bool
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut seen = HashSet::new();
    iterable.into_iter().all(|item| seen.insert(key(&item)))
}

#[derive(Debug, Clone)]
pub struct Uniquer<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> Iterator for Uniquer<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let Self { iter, seen, key } = self;
        iter.find(|item| seen.insert(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Yields each element the first time it is seen, lazily.
pub fn uniquer<I>(iterable: I) -> Uniquer<I::IntoIter, I::Item, fn(&I::Item) -> I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let key: fn(&I::Item) -> I::Item = Clone::clone;
    uniquer_by(iterable, key)
}

/// Yields each element whose key has not been seen before, lazily.
pub fn uniquer_by<I, K, F>(iterable: I, key: F) -> Uniquer<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    Uniquer {
        iter: iterable.into_iter(),
        seen: HashSet::new(),
        key,
    }
}

#[cfg(test)]
#[path = "uniques_test.rs"]
mod tests;
