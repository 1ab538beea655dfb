//! Built-in demo data source.
//!
//! Stands in for the users endpoint when no base URL is configured: the
//! same five rows the reference service generates, delivered after an
//! artificial delay so the loading state is visible.

use std::time::Duration;

use chrono::{Days, Local};

use sysdash_types::UserRow;

use crate::FetchError;

/// Default artificial delay before the demo rows resolve.
pub const DEMO_DELAY: Duration = Duration::from_secs(2);

const DEMO_ROW_COUNT: u64 = 5;

/// Generates `count` demo rows: ids `1..=count`, `user {i}` / `role {i}`,
/// dated `today - (i - 1)` days, so dates strictly descend as ids ascend.
#[must_use]
pub fn sample_users(count: u64) -> Vec<UserRow> {
    let today = Local::now().date_naive();
    (1..=count)
        .map(|i| {
            let date = today.checked_sub_days(Days::new(i - 1)).unwrap_or(today);
            UserRow::new(i, format!("user {i}"), format!("role {i}"), date)
        })
        .collect()
}

/// Resolves to the standard five demo rows after `delay`.
///
/// Infallible in practice; typed like the HTTP fetch so the caller is
/// indifferent to which source backed the run.
pub async fn fetch_demo(delay: Duration) -> Result<Vec<UserRow>, FetchError> {
    tokio::time::sleep(delay).await;
    tracing::debug!(count = DEMO_ROW_COUNT, "serving demo users");
    Ok(sample_users(DEMO_ROW_COUNT))
}
