//! # AoC Commands
//!
//! Discord command implementations using Poise framework for the Advent of
//! Code leaderboard bot.
//!
//! The Discord-facing command lives in [`adventofcode`]; everything it renders
//! is produced by [`leaderboard`], which can be driven without a gateway.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod adventofcode;
pub mod framework;
pub mod leaderboard;

pub use framework::*;
pub use leaderboard::*;
