//! Default values for every configuration section.

use crate::schema::*;
use aoc_common::DEFAULT_BASE_URL;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            advent_of_code: AdventOfCodeConfig::default(),
            embed_colours: EmbedColoursConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: "?".to_string(),
        }
    }
}

impl Default for AdventOfCodeConfig {
    fn default() -> Self {
        Self {
            session_token: String::new(),
            leaderboard_id: String::new(),
            invite_code: String::new(),
            results_per_page: 15,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for EmbedColoursConfig {
    fn default() -> Self {
        Self {
            success: "#1C5D99".to_string(),
            error: "#BC3838".to_string(),
        }
    }
}
