//! Configuration schema definitions using serde.

use aoc_common::{AdventOfCodeClientConfig, AocError};
use serde::{Deserialize, Serialize};

/// Main configuration structure for the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Advent of Code configuration.
    pub advent_of_code: AdventOfCodeConfig,
    /// Embed colour configuration.
    pub embed_colours: EmbedColoursConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Prefix for text commands.
    pub prefix: String,
}

/// Advent of Code leaderboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventOfCodeConfig {
    /// `session` cookie of an account that can view the leaderboard.
    pub session_token: String,
    /// Private leaderboard id.
    pub leaderboard_id: String,
    /// Join code shown to users so they can enter the leaderboard.
    pub invite_code: String,
    /// Number of members listed in the embed.
    pub results_per_page: usize,
    /// Base URL of the Advent of Code site.
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

/// Embed colours as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedColoursConfig {
    /// Colour of successful replies.
    pub success: String,
    /// Colour of error replies.
    pub error: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AocError> {
        crate::validator::ConfigValidator::validate(self)
    }

    /// Settings for the Advent of Code HTTP client.
    pub fn client_config(&self) -> AdventOfCodeClientConfig {
        let aoc = &self.advent_of_code;
        AdventOfCodeClientConfig::new(aoc.session_token.clone(), aoc.leaderboard_id.clone())
            .with_base_url(aoc.base_url.clone())
            .with_timeout(aoc.timeout_secs)
    }
}

impl EmbedColoursConfig {
    /// Success colour as an RGB value.
    pub fn success_rgb(&self) -> Result<u32, AocError> {
        aoc_common::parse_hex_colour(&self.success)
    }

    /// Error colour as an RGB value.
    pub fn error_rgb(&self) -> Result<u32, AocError> {
        aoc_common::parse_hex_colour(&self.error)
    }
}
