//! Read client for the users endpoint.
//!
//! One operation: GET `{base}/api/users`, returning a JSON array of
//! [`UserRow`]. No request parameters, no pagination, no authentication.
//! Anything that keeps a user list from arriving surfaces as a single
//! [`FetchError`]; the caller turns it into the fallback view rather than
//! retrying.

mod demo;

pub use demo::{DEMO_DELAY, fetch_demo, sample_users};

use std::time::Duration;

use thiserror::Error;

use sysdash_types::UserRow;

/// Path of the users resource under the configured base URL.
pub const USERS_PATH: &str = "/api/users";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The single user-facing failure kind: the fetch did not produce a user
/// list. Variants exist for logging; the UI treats them uniformly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("users endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("response body is not a user list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("fetch stopped before a result was delivered")]
    Interrupted,
}

/// HTTP client for the users endpoint.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    /// Builds a client for the service at `base_url` (scheme + authority,
    /// e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Fetches the full user list. Exactly one request; no retries.
    pub async fn fetch_users(&self) -> Result<Vec<UserRow>, FetchError> {
        let url = format!("{}{USERS_PATH}", self.base_url);
        tracing::debug!(%url, "fetching users");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        let users: Vec<UserRow> = serde_json::from_str(&body)?;
        tracing::debug!(count = users.len(), "user list fetched");
        Ok(users)
    }
}
