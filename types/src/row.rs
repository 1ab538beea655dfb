//! The user record as served by the users endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One display record from the users endpoint.
///
/// Field names match the wire format (`id`, `user`, `role`, `date`); the
/// date is an ISO `YYYY-MM-DD` calendar date. Rows are immutable once
/// fetched: sorting reorders a sequence of rows, it never edits one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    /// Unique, stable identity.
    pub id: u64,
    pub user: String,
    pub role: String,
    pub date: NaiveDate,
}

impl UserRow {
    #[must_use]
    pub fn new(id: u64, user: impl Into<String>, role: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            user: user.into(),
            role: role.into(),
            date,
        }
    }
}
