use super::{all_distinct, all_distinct_by, all_equal, all_equal_by};

#[test]
fn all_equal_on_empty_and_single() {
    assert!(all_equal(Vec::<u8>::new()));
    assert!(all_equal([7]));
}

#[test]
fn all_equal_detects_difference() {
    assert!(all_equal([2, 2, 2]));
    assert!(!all_equal([2, 2, 3]));
}

#[test]
fn all_equal_by_compares_keys() {
    assert!(all_equal_by(["apple", "avocado"], |word| word.len() > 3));
    assert!(!all_equal_by(["apple", "fig"], |word| word.len()));
}

#[test]
fn all_distinct_compares_neighbours_only() {
    assert!(all_distinct([1, 2, 3]));
    assert!(all_distinct([1, 2, 1]));
    assert!(!all_distinct([1, 1, 2]));
    assert!(all_distinct(Vec::<u8>::new()));
}

#[test]
fn all_distinct_by_uses_key() {
    assert!(!all_distinct_by(["Ant", "ant"], |word| word.to_lowercase()));
    assert!(all_distinct_by(["Ant", "bee"], |word| word.to_lowercase()));
}
