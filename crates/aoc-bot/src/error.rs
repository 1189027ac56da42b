//! Application-wide error types using thiserror.

use aoc_common::AocError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] AocError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Poise framework error.
    #[error("Framework error: {0}")]
    Framework(String),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
