//! Shared HTTP helpers for the external data sources
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Extracted request setup and error mapping from the API clients

use anyhow::{anyhow, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout for third-party APIs
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RurawrBot/1.2)";

/// Build a client with a timeout and the bot's user agent
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Turn a transport error into a short, user-presentable message
pub fn describe_error(e: &reqwest::Error) -> anyhow::Error {
    if e.is_timeout() {
        anyhow!("Request timed out")
    } else if e.is_connect() {
        anyhow!("Could not connect to the server")
    } else if e.is_decode() {
        anyhow!("Server returned malformed data: {e}")
    } else {
        anyhow!("HTTP request failed: {e}")
    }
}

/// Send a prepared request and decode a JSON body, failing on non-2xx status
pub async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await.map_err(|e| describe_error(&e))?;

    let status = response.status();
    debug!("{} -> {status}", response.url());
    if !status.is_success() {
        return Err(anyhow!("Server returned HTTP {status}"));
    }

    response.json::<T>().await.map_err(|e| describe_error(&e))
}
