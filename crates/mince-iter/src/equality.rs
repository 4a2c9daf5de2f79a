/// True when every element equals the first one. Empty input counts as equal.
pub fn all_equal<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = iterable.into_iter();
    match iter.next() {
        Some(first) => iter.all(|item| item == first),
        None => true,
    }
}

pub fn all_equal_by<I, K, F>(iterable: I, key: F) -> bool
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(I::Item) -> K,
{
    all_equal(iterable.into_iter().map(key))
}

/// True when no element equals its immediate predecessor.
///
/// Only neighbours are compared: `[1, 2, 1]` counts as distinct.
pub fn all_distinct<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = iterable.into_iter();
    let Some(mut previous) = iter.next() else {
        return true;
    };
    for item in iter {
        if item == previous {
            return false;
        }
        previous = item;
    }
    true
}

pub fn all_distinct_by<I, K, F>(iterable: I, key: F) -> bool
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(I::Item) -> K,
{
    all_distinct(iterable.into_iter().map(key))
}

#[cfg(test)]
#[path = "equality_test.rs"]
mod tests;
