//! Sorting with comparator closures
//!
//! [`sorted_by`] takes a strict "less than" predicate, the shape of a
//! comparator written as a nested function or a closure. The three
//! `sort_using_*` functions differ only in how that predicate is spelled.

use std::cmp::Ordering;

/// Return a sorted copy of `items`, ordered by the strict predicate `less`.
///
/// `less` must be a strict weak order. Stability is not guaranteed.
pub fn sorted_by<T, F>(items: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut sorted = items.to_vec();
    sorted.sort_unstable_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    sorted
}

/// Sort ascending with a named nested predicate passed by name.
pub fn sort_using_nested_function(array: &[i64]) -> Vec<i64> {
    fn ascending(a: &i64, b: &i64) -> bool {
        a < b
    }

    sorted_by(array, ascending)
}

/// Sort ascending with an inline closure, types and body spelled out.
pub fn sort_using_closure(array: &[i64]) -> Vec<i64> {
    sorted_by(array, |a: &i64, b: &i64| -> bool {
        a < b
    })
}

/// Sort ascending with the shortest closure form.
pub fn sort_using_closure_short(array: &[i64]) -> Vec<i64> {
    sorted_by(array, |a, b| a < b)
}
