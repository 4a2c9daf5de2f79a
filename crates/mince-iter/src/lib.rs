//! Small iterator helpers: duplicate checks, first-seen filtering, chunking and splitting.

pub mod equality;
pub mod grouping;
pub mod uniques;

pub use equality::{all_distinct, all_distinct_by, all_equal, all_equal_by};
pub use grouping::{as_not_empty, consume, grouper, is_only_one, split, Grouper, Split};
pub use uniques::{uniquer, uniquer_by, uniques, uniques_by, Uniquer};
