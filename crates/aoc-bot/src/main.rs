//! Main entry point for the AoC leaderboard bot.

use aoc_bot::{AocBot, BotResult};
use aoc_config::{Config, ConfigLoader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aoc_bot=debug,aoc_common=info,aoc_commands=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AoC leaderboard bot");

    let config = load_config().await?;
    let bot = AocBot::new(config)?;

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}

async fn load_config() -> BotResult<Config> {
    let loader = ConfigLoader::from_env();
    let config = loader.load().await?;

    config.validate()?;
    info!(
        "Configuration loaded from {} (leaderboard {})",
        loader.path().display(),
        config.advent_of_code.leaderboard_id
    );
    Ok(config)
}
