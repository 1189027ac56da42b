//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use aoc_common::{parse_hex_colour, AocError};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<(), AocError> {
        if config.discord.token.is_empty() {
            return Err(AocError::config("Discord token cannot be empty"));
        }

        let aoc = &config.advent_of_code;
        if aoc.session_token.is_empty() {
            return Err(AocError::config(
                "Advent of Code session token cannot be empty",
            ));
        }
        if aoc.leaderboard_id.is_empty() {
            return Err(AocError::config("Leaderboard id cannot be empty"));
        }
        if aoc.results_per_page == 0 {
            return Err(AocError::validation(
                "must be greater than 0",
                "advent_of_code.results_per_page",
            ));
        }
        if aoc.timeout_secs == 0 {
            return Err(AocError::validation(
                "must be greater than 0",
                "advent_of_code.timeout_secs",
            ));
        }

        parse_hex_colour(&config.embed_colours.success)?;
        parse_hex_colour(&config.embed_colours.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "discord".to_string();
        config.advent_of_code.session_token = "session".to_string();
        config.advent_of_code.leaderboard_id = "490120".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigValidator::validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_results_per_page_rejected() {
        let mut config = valid_config();
        config.advent_of_code.results_per_page = 0;
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(AocError::Validation { .. })
        ));
    }

    #[test]
    fn test_bad_colour_rejected() {
        let mut config = valid_config();
        config.embed_colours.error = "red".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_missing_leaderboard_rejected() {
        let mut config = valid_config();
        config.advent_of_code.leaderboard_id.clear();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
