//! # AoC Common
//!
//! Shared types, utilities, and the Advent of Code API client for the
//! leaderboard bot.
//!
//! This crate provides the foundational types used across all other crates in
//! the workspace: the error type, date and colour helpers, and the
//! [`LeaderboardFetcher`] capability that the command layer depends on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod leaderboard;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use client::*;
pub use leaderboard::*;
pub use types::*;
pub use utils::*;
