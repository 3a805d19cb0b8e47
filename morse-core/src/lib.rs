#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Decision core of a button-driven morse code guessing game.
//! Decodes entered symbols against the A-Z/0-9 table and runs the
//! level, lives and wins progression behind a small HAL boundary.

pub mod types;
pub mod table;
pub mod decoder;
pub mod accumulator;
pub mod status;
pub mod messages;
pub mod watchdog;
pub mod game;
pub mod controller;
pub mod hal;

#[cfg(feature = "test-utils")]
pub mod test_utils;


pub use types::*;
pub use table::{CodeTableEntry, CODE_TABLE, TABLE_LEN};
pub use decoder::{decode, match_level_command};
pub use accumulator::{Accepted, InputAccumulator, PendingAnswer, Phase};
pub use status::StatusColor;
pub use messages::GameMessage;
pub use watchdog::{SoftTimeout, TimeoutPolicy};
pub use game::*;
pub use controller::*;
pub use hal::{*, Instant, Duration};

/// Game library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 9 second rounds, 250ms dash threshold
pub const fn default_config() -> GameConfig {
    GameConfig::DEFAULT
}
