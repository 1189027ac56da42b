//! Advent of Code private leaderboard API client.
//!
//! The command layer only sees the [`LeaderboardFetcher`] capability, which
//! keeps it testable without network access. [`AdventOfCodeClient`] is the
//! production implementation: one authenticated GET per call, no retries and
//! no caching.

use crate::leaderboard::LeaderboardResponse;
use crate::types::{AocError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Default Advent of Code site.
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Capability to fetch a private leaderboard for a given edition.
#[async_trait]
pub trait LeaderboardFetcher: Send + Sync {
    /// Fetch the configured private leaderboard for `year`.
    async fn fetch_leaderboard(&self, year: i32) -> Result<LeaderboardResponse>;
}

/// Configuration for the Advent of Code API client
#[derive(Debug, Clone)]
pub struct AdventOfCodeClientConfig {
    /// Base URL of the Advent of Code site
    pub base_url: String,
    /// Value of the `session` cookie of a member of the leaderboard
    pub session_token: String,
    /// Private leaderboard id (the owner's member id)
    pub leaderboard_id: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for AdventOfCodeClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_token: String::new(),
            leaderboard_id: String::new(),
            timeout_secs: 10,
            user_agent: concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
                " (Discord leaderboard bot)"
            )
            .to_string(),
        }
    }
}

impl AdventOfCodeClientConfig {
    /// Create a new configuration with the minimum required parameters
    pub fn new(session_token: impl Into<String>, leaderboard_id: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            leaderboard_id: leaderboard_id.into(),
            ..Default::default()
        }
    }

    /// Point the client at a different site, e.g. a local mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for the Advent of Code private leaderboard API
#[derive(Debug, Clone)]
pub struct AdventOfCodeClient {
    client: Client,
    base_url: Url,
    config: AdventOfCodeClientConfig,
}

impl AdventOfCodeClient {
    /// Create a new client with the given configuration
    pub fn new(config: AdventOfCodeClientConfig) -> Result<Self> {
        if config.leaderboard_id.trim().is_empty() {
            return Err(AocError::config("Leaderboard id cannot be empty"));
        }

        // Trailing slash so `join` appends instead of replacing the last segment
        let base_url = Url::parse(&format!("{}/", config.base_url.trim_end_matches('/')))
            .map_err(|e| AocError::config(format!("Invalid base URL '{}': {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AocError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// URL of the JSON leaderboard for `year`
    pub fn leaderboard_url(&self, year: i32) -> Result<Url> {
        self.base_url
            .join(&format!(
                "{year}/leaderboard/private/view/{}.json",
                self.config.leaderboard_id
            ))
            .map_err(|e| AocError::config(format!("Cannot build leaderboard URL: {e}")))
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn send(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(
                header::COOKIE,
                format!("session={}", self.config.session_token),
            )
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timed out: {}", e);
                    AocError::network_with_source("Request timeout", e)
                } else {
                    error!("Request failed: {}", e);
                    AocError::network_with_source("Request failed", e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {}", status);
            Ok(response)
        } else {
            error!("Advent of Code returned {}", status);
            Err(AocError::advent_of_code_with_status(
                format!("API returned {status}"),
                status.as_u16(),
            ))
        }
    }
}

#[async_trait]
impl LeaderboardFetcher for AdventOfCodeClient {
    #[instrument(skip(self))]
    async fn fetch_leaderboard(&self, year: i32) -> Result<LeaderboardResponse> {
        let url = self.leaderboard_url(year)?;
        let response = self.send(url).await?;

        let text = response
            .text()
            .await
            .map_err(|e| AocError::network_with_source("Failed to read response body", e))?;

        // An expired session is redirected to an HTML page, which lands here
        let board: LeaderboardResponse = serde_json::from_str(&text).map_err(|e| {
            warn!("Leaderboard response was not valid JSON: {}", e);
            AocError::from(e)
        })?;

        info!(
            "Fetched {} leaderboard with {} members",
            board.event,
            board.members.len()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_url() {
        let client = AdventOfCodeClient::new(AdventOfCodeClientConfig::new("token", "490120"))
            .unwrap();
        assert_eq!(
            client.leaderboard_url(2021).unwrap().as_str(),
            "https://adventofcode.com/2021/leaderboard/private/view/490120.json"
        );
    }

    #[test]
    fn test_leaderboard_url_keeps_base_path() {
        let config = AdventOfCodeClientConfig::new("token", "42")
            .with_base_url("http://localhost:8080/aoc/");
        let client = AdventOfCodeClient::new(config).unwrap();
        assert_eq!(
            client.leaderboard_url(2015).unwrap().as_str(),
            "http://localhost:8080/aoc/2015/leaderboard/private/view/42.json"
        );
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(AdventOfCodeClient::new(AdventOfCodeClientConfig::new("token", "")).is_err());
        assert!(AdventOfCodeClient::new(
            AdventOfCodeClientConfig::new("token", "1").with_base_url("not a url")
        )
        .is_err());
    }
}
