//! Xtream provider HTTP client
//!
//! Xtream-codes providers serve extended-M3U playlists from a `get.php`
//! endpoint keyed by a username/password pair in the query string.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Playlist request timeout
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Playlist download failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(StatusCode),
}

/// HTTP client for an Xtream-codes provider
#[derive(Clone)]
pub struct XtreamClient {
    base_url: String,
    username: String,
    password: String,
    http_client: Client,
}

impl XtreamClient {
    /// Create a new client for the given provider host
    pub fn new(host: &str, username: &str, password: &str) -> Result<Self> {
        Url::parse(host).with_context(|| format!("Invalid provider host: {}", host))?;
        let base_url = host.trim_end_matches('/').to_string();

        let http_client = Client::builder()
            .user_agent(concat!("rjmtv/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            username: username.to_string(),
            password: password.to_string(),
            http_client,
        })
    }

    /// Build the extended-M3U playlist URL
    pub fn playlist_url(&self) -> String {
        format!(
            "{}/get.php?username={}&password={}&type=m3u_plus&output=ts",
            self.base_url,
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
        )
    }

    /// Download the raw playlist as text
    pub async fn fetch_playlist(&self) -> Result<String, FetchError> {
        // The full URL carries credentials, so only the host is logged
        debug!("Fetching playlist from {}", self.base_url);

        let response = self.http_client.get(self.playlist_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content = response.text().await?;
        debug!("Fetched {} bytes of playlist text", content.len());
        Ok(content)
    }
}
