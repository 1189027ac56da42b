//! Leaderboard rendering, independent of Discord.
//!
//! [`run`] resolves the requested year, fetches the leaderboard through a
//! [`LeaderboardFetcher`] and always produces exactly one [`RenderedMessage`],
//! either the ranked table or an error.

use aoc_common::{current_aoc_year, AocError, LeaderboardEntry, LeaderboardFetcher, FIRST_AOC_YEAR};
use aoc_config::Config;
use chrono::NaiveDate;
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Title of successful replies.
pub const SUCCESS_TITLE: &str = "Advent Of Code";

/// Title of error replies.
pub const ERROR_TITLE: &str = "Error";

const TABLE_HEADER: &str = "(Name, Stars, Points)";

/// Discord's limit on the length of an embed field value.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Reasons the command cannot show a leaderboard.
#[derive(thiserror::Error, Debug)]
pub enum LeaderboardError {
    /// Requested year is not a valid edition.
    #[error("Year requested not available.\nPlease query a year between 2015 and {latest}")]
    InvalidYear {
        /// Latest edition that has started.
        latest: i32,
    },

    /// The Advent of Code API could not be queried.
    #[error("Could not get the leaderboard for Advent Of Code.")]
    FetchFailure(#[source] AocError),
}

/// Settings the command reads from the bot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSettings {
    /// Join code shown in the description.
    pub invite_code: String,
    /// Private leaderboard id used in the "View Leaderboard" link.
    pub leaderboard_id: String,
    /// Number of members listed.
    pub results_per_page: usize,
    /// Embed colour of successful replies.
    pub success_colour: u32,
    /// Embed colour of error replies.
    pub error_colour: u32,
}

impl LeaderboardSettings {
    /// Extracts the command settings, parsing the configured colours.
    pub fn from_config(config: &Config) -> Result<Self, AocError> {
        Ok(Self {
            invite_code: config.advent_of_code.invite_code.clone(),
            leaderboard_id: config.advent_of_code.leaderboard_id.clone(),
            results_per_page: config.advent_of_code.results_per_page,
            success_colour: config.embed_colours.success_rgb()?,
            error_colour: config.embed_colours.error_rgb()?,
        })
    }
}

/// A single embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field body.
    pub value: String,
}

/// Reply content before it is turned into a Discord embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Embed title.
    pub title: String,
    /// Embed description.
    pub description: String,
    /// Embed fields, in order.
    pub fields: Vec<EmbedField>,
    /// Embed colour as RGB.
    pub colour: u32,
}

impl RenderedMessage {
    /// Error reply for `error`.
    pub fn error(error: &LeaderboardError, colour: u32) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            description: error.to_string(),
            fields: Vec::new(),
            colour,
        }
    }

    /// Whether this is an error reply.
    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }

    /// Builds the serenity embed.
    pub fn to_embed(&self) -> serenity::CreateEmbed {
        self.fields.iter().fold(
            serenity::CreateEmbed::new()
                .title(&self.title)
                .description(&self.description)
                .colour(self.colour),
            |embed, field| embed.field(&field.name, &field.value, false),
        )
    }
}

/// Resolves the edition to show.
///
/// No argument means the latest edition. Anything that is not an integer in
/// `FIRST_AOC_YEAR..=latest` is rejected.
pub fn resolve_year(requested: Option<&str>, today: NaiveDate) -> Result<i32, LeaderboardError> {
    let latest = current_aoc_year(today);
    let Some(arg) = requested else {
        return Ok(latest);
    };

    match arg.trim().parse::<i32>() {
        Ok(year) if (FIRST_AOC_YEAR..=latest).contains(&year) => Ok(year),
        _ => Err(LeaderboardError::InvalidYear { latest }),
    }
}

/// Name as it can appear inside the code block.
///
/// Backticks would close the block, so they become apostrophes.
fn table_name(name: &str) -> String {
    name.replace('`', "'")
}

/// Formats ranked entries as fixed-width rows `"{rank}) {name} | {stars} | {score}"`.
pub fn format_rows(entries: &[LeaderboardEntry]) -> Vec<String> {
    let rank_width = entries.len().to_string().len().max(2);
    let name_width = entries
        .iter()
        .map(|e| table_name(&e.name).chars().count())
        .max()
        .unwrap_or(0);
    let stars_width = entries
        .iter()
        .map(|e| e.stars.to_string().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{:>rank_width$}) {:<name_width$} | {:<stars_width$} | {}",
                i + 1,
                table_name(&e.name),
                e.stars,
                e.local_score
            )
        })
        .collect()
}

/// Code block listing the given entries under the table header.
pub fn format_table(entries: &[LeaderboardEntry]) -> String {
    format!(
        "```java\n{TABLE_HEADER}\n{}\n```",
        format_rows(entries).join("\n")
    )
}

/// Table of at most `limit` entries that fits in one embed field.
///
/// Rows are dropped from the bottom until the block is within
/// [`FIELD_VALUE_LIMIT`] characters.
pub fn format_bounded_table(entries: &[LeaderboardEntry], limit: usize) -> String {
    let mut shown = entries.len().min(limit);
    loop {
        let table = format_table(&entries[..shown]);
        if shown == 0 || table.chars().count() <= FIELD_VALUE_LIMIT {
            return table;
        }
        shown -= 1;
    }
}

/// Link to the private leaderboard page for `year`.
pub fn leaderboard_link(year: i32, leaderboard_id: &str) -> String {
    format!("https://adventofcode.com/{year}/leaderboard/private/view/{leaderboard_id}")
}

/// Renders the reply for one invocation of the command.
pub async fn run(
    fetcher: &dyn LeaderboardFetcher,
    settings: &LeaderboardSettings,
    requested_year: Option<&str>,
    today: NaiveDate,
) -> RenderedMessage {
    match render(fetcher, settings, requested_year, today).await {
        Ok(message) => message,
        Err(e) => RenderedMessage::error(&e, settings.error_colour),
    }
}

async fn render(
    fetcher: &dyn LeaderboardFetcher,
    settings: &LeaderboardSettings,
    requested_year: Option<&str>,
    today: NaiveDate,
) -> Result<RenderedMessage, LeaderboardError> {
    let year = resolve_year(requested_year, today)?;
    debug!(year, "Fetching Advent of Code leaderboard");

    let board = fetcher
        .fetch_leaderboard(year)
        .await
        .map_err(LeaderboardError::FetchFailure)?;

    let ranked = board.ranked_entries();

    Ok(RenderedMessage {
        title: SUCCESS_TITLE.to_string(),
        description: format!(
            "Leaderboard ID: `{}`\n\n[View Leaderboard]({})",
            settings.invite_code,
            leaderboard_link(year, &settings.leaderboard_id)
        ),
        fields: vec![EmbedField {
            name: format!("Top {}", settings.results_per_page),
            value: format_bounded_table(&ranked, settings.results_per_page),
        }],
        colour: settings.success_colour,
    })
}
