//! Shared helpers for the integration suite.

mod vt100_backend;

pub use vt100_backend::VT100Backend;

use std::time::Duration;

use chrono::NaiveDate;
use ratatui::Terminal;
use sysdash_engine::App;
use sysdash_types::UserRow;

/// Drives the app until its fetch settles, or panics after ~10 s.
pub async fn settle(app: &mut App) {
    for _ in 0..2000 {
        app.tick();
        if !app.state().is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("fetch did not settle in time");
}

/// Five rows with ids 1..=5 in descending date order, the shape the
/// users endpoint serves them in.
pub fn fetched_rows() -> Vec<UserRow> {
    (1..=5_u64)
        .map(|i| {
            let day = 10 - u32::try_from(i).unwrap();
            let date = NaiveDate::from_ymd_opt(2026, 8, day).expect("valid test date");
            UserRow::new(i, format!("user {i}"), format!("role {i}"), date)
        })
        .collect()
}

/// A terminal over a virtual screen, for render assertions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(width, height)).expect("terminal builds")
}
