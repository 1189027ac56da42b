//! `adventofcode` command showing the private leaderboard.

use crate::framework::{Context, Error};
use crate::leaderboard;

/// Shows the current leaderboard for adventofcode.
#[poise::command(prefix_command, slash_command, aliases("aoc"))]
pub async fn adventofcode(
    ctx: Context<'_>,
    #[description = "Edition year, e.g. 2021"] year: Option<String>,
) -> Result<(), Error> {
    let data = ctx.data();
    let message = leaderboard::run(
        data.fetcher.as_ref(),
        &data.settings,
        year.as_deref(),
        aoc_common::aoc_today(),
    )
    .await;

    ctx.send(poise::CreateReply::default().embed(message.to_embed()))
        .await?;
    Ok(())
}
