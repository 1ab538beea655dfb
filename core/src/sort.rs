//! Ordering logic for user rows.

use std::cmp::Ordering;

use sysdash_types::{Direction, SortKey, UserRow};

/// Compares two rows by `key` in ascending order.
///
/// Natural ordering per field: integer compare for id, lexicographic for
/// user and role, calendar ordering for date.
#[must_use]
pub fn compare_by(a: &UserRow, b: &UserRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::User => a.user.cmp(&b.user),
        SortKey::Role => a.role.cmp(&b.role),
        SortKey::Date => a.date.cmp(&b.date),
    }
}

/// Reorders `rows` in place by `key`.
///
/// Uses the standard library's stable sort: rows with equal keys keep
/// their current relative order, and the result is always a permutation
/// of the input.
pub fn sort_rows(rows: &mut [UserRow], key: SortKey, direction: Direction) {
    rows.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}
