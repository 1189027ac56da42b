//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use aoc_commands::{create_framework, Data, LeaderboardSettings};
use aoc_common::{AdventOfCodeClient, LeaderboardFetcher};
use aoc_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::info;

/// Main bot structure.
pub struct AocBot {
    config: Arc<Config>,
    settings: LeaderboardSettings,
    fetcher: Arc<dyn LeaderboardFetcher>,
}

impl AocBot {
    /// Creates a bot backed by the real Advent of Code client.
    pub fn new(config: Config) -> BotResult<Self> {
        let client = AdventOfCodeClient::new(config.client_config())?;
        Self::with_fetcher(config, Arc::new(client))
    }

    /// Creates a bot using the given leaderboard source.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn LeaderboardFetcher>) -> BotResult<Self> {
        let settings = LeaderboardSettings::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            settings,
            fetcher,
        })
    }

    /// Settings handed to the leaderboard command.
    pub const fn settings(&self) -> &LeaderboardSettings {
        &self.settings
    }

    /// Starts the bot.
    pub async fn start(&self) -> BotResult<()> {
        let settings = self.settings.clone();
        let fetcher = Arc::clone(&self.fetcher);

        let framework = create_framework(&self.config.discord.prefix)
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("{} is connected", ready.user.name);
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    Ok(Data { settings, fetcher })
                })
            })
            .build();

        let intents =
            serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{:?}", e)))?;

        client
            .start()
            .await
            .map_err(|e| BotError::Framework(format!("{:?}", e)))?;
        Ok(())
    }
}
