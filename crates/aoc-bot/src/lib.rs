//! # AoC Bot
//!
//! Discord bot answering `adventofcode` with an Advent of Code private
//! leaderboard.
//!
//! This is the main binary crate that wires configuration, the Advent of Code
//! client and the Poise framework together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
