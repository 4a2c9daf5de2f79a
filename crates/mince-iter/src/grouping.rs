use std::iter::{Fuse, Peekable};

#[derive(Debug, Clone)]
pub struct Grouper<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Grouper<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let group = self.iter.by_ref().take(self.size).collect::<Vec<_>>();
        (!group.is_empty()).then_some(group)
    }
}

/// Consecutive chunks of `size` elements; the last chunk may be shorter.
///
/// A `size` of zero produces no chunks.
pub fn grouper<I: IntoIterator>(iterable: I, size: usize) -> Grouper<Fuse<I::IntoIter>> {
    Grouper {
        iter: iterable.into_iter().fuse(),
        size,
    }
}

pub fn consume<I: IntoIterator>(iterable: I) {
    iterable.into_iter().for_each(drop);
}

/// `None` for an empty iterator, otherwise the iterator with nothing consumed.
pub fn as_not_empty<I: IntoIterator>(iterable: I) -> Option<Peekable<I::IntoIter>> {
    let mut iter = iterable.into_iter().peekable();
    iter.peek()?;
    Some(iter)
}

pub fn is_only_one<I: IntoIterator>(iterable: I) -> bool {
    let mut iter = iterable.into_iter();
    iter.next().is_some() && iter.next().is_none()
}

#[derive(Debug, Clone)]
pub struct Split<I: Iterator> {
    iter: Fuse<I>,
    sep: I::Item,
    maxsplit: Option<usize>,
    splits: usize,
}

impl<I> Iterator for Split<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        if self.maxsplit.is_some_and(|maxsplit| self.splits >= maxsplit) {
            let mut rest = vec![first];
            rest.extend(self.iter.by_ref());
            return Some(rest);
        }

        self.splits += 1;
        let mut group = Vec::new();
        let mut current = Some(first);
        while let Some(item) = current {
            if item == self.sep {
                break;
            }
            group.push(item);
            current = self.iter.next();
        }
        Some(group)
    }
}

/// Splits `iterable` on elements equal to `sep`, dropping the separators.
///
/// Adjacent separators produce empty groups, a trailing separator does not.
/// Once `maxsplit` groups have been cut the remainder comes back as one group,
/// separators included; `Some(0)` returns everything as a single group.
pub fn split<I>(iterable: I, sep: I::Item, maxsplit: Option<usize>) -> Split<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    Split {
        iter: iterable.into_iter().fuse(),
        sep,
        maxsplit,
        splits: 0,
    }
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;
