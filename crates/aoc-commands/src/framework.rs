//! Poise framework setup and command registration logic.

use crate::leaderboard::LeaderboardSettings;
use aoc_common::LeaderboardFetcher;
use std::sync::Arc;

/// Application data accessible in all commands.
pub struct Data {
    /// Settings of the leaderboard command.
    pub settings: LeaderboardSettings,
    /// Shared Advent of Code client.
    pub fetcher: Arc<dyn LeaderboardFetcher>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// All commands the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![crate::adventofcode::adventofcode()]
}

/// Creates a new Poise framework answering text commands after `prefix`.
pub fn create_framework(prefix: &str) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.into()),
            ..Default::default()
        },
        ..Default::default()
    })
}
