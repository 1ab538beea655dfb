//! Top-level application state.

use std::time::{Duration, Instant};

use sysdash_client::{FetchError, UsersClient, fetch_demo};
use sysdash_core::UserTable;
use sysdash_types::{SortKey, UserRow, ui::UiOptions};

use crate::config::DashConfig;
use crate::fetch::{FetchHandle, FetchState};

/// The dashboard: one fetch, then an interactive table.
///
/// The frame loop drives it with [`App::tick`] (poll the in-flight fetch)
/// and the input layer calls the sort/focus/quit intents. All sort state
/// lives in the loaded [`UserTable`]; nothing is shared across tasks.
#[derive(Debug)]
pub struct App {
    fetch: Option<FetchHandle<Vec<UserRow>>>,
    state: FetchState<UserTable>,
    started: Instant,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    /// Wraps an already-spawned fetch.
    #[must_use]
    pub fn new(fetch: FetchHandle<Vec<UserRow>>, ui_options: UiOptions) -> Self {
        Self {
            fetch: Some(fetch),
            state: FetchState::Loading,
            started: Instant::now(),
            ui_options,
            should_quit: false,
        }
    }

    /// Spawns the run's data fetch per `config`: the configured endpoint
    /// when one is set, the built-in demo source otherwise.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: &DashConfig) -> Result<Self, FetchError> {
        let fetch = match config.endpoint() {
            Some(base_url) => {
                tracing::info!(endpoint = %base_url, "fetching users over HTTP");
                let client = UsersClient::new(base_url)?;
                FetchHandle::spawn(async move { client.fetch_users().await })
            }
            None => {
                tracing::info!("no endpoint configured; using demo data");
                FetchHandle::spawn(fetch_demo(config.demo_delay()))
            }
        };
        Ok(Self::new(fetch, config.ui_options()))
    }

    /// Advances the state machine: polls the in-flight fetch, if any.
    ///
    /// The resolved row sequence becomes the table in fetch order; a
    /// rejection becomes the terminal fallback state for this run.
    pub fn tick(&mut self) {
        let Some(handle) = self.fetch.as_mut() else {
            return;
        };
        let Some(result) = handle.poll() else {
            return;
        };
        self.fetch = None;
        self.state = match result {
            Ok(rows) => {
                tracing::info!(count = rows.len(), "user list loaded");
                FetchState::Loaded(UserTable::new(rows))
            }
            Err(err) => {
                tracing::warn!("fetch failed: {err}");
                FetchState::Failed(err)
            }
        };
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<UserTable> {
        &self.state
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Time since the app started; drives the loading spinner.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn table_mut(&mut self) -> Option<&mut UserTable> {
        match &mut self.state {
            FetchState::Loaded(table) => Some(table),
            _ => None,
        }
    }

    /// Header activation on `key`. Ignored until the table is loaded.
    pub fn sort_by(&mut self, key: SortKey) {
        if let Some(table) = self.table_mut() {
            table.activate(key);
        }
    }

    pub fn focus_left(&mut self) {
        if let Some(table) = self.table_mut() {
            table.focus_left();
        }
    }

    pub fn focus_right(&mut self) {
        if let Some(table) = self.table_mut() {
            table.focus_right();
        }
    }

    pub fn activate_focused(&mut self) {
        if let Some(table) = self.table_mut() {
            table.activate_focused();
        }
    }
}
