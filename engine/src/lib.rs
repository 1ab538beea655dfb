//! Application state machine and configuration for sysdash.
//!
//! The engine owns everything between the data sources (client crate) and
//! rendering (tui crate): the async view model for the one fetch a run
//! performs, the top-level [`App`] the frame loop drives, and config
//! loading.

mod app;
mod config;
mod fetch;

pub use app::App;
pub use config::{AppConfig, ConfigError, DashConfig};
pub use fetch::{FetchHandle, FetchState};
