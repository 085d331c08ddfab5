//! Core domain types for the door game.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Unique identifier for a game.
pub type GameId = String;

/// Index of a door, counted from zero.
pub type DoorIndex = u8;

/// Number of doors in a game.
pub const DOOR_COUNT: DoorIndex = 3;

/// Result of a game as reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// The picked door is the winning door.
    #[display("WIN")]
    Win,
    /// The picked door is not the winning door.
    #[display("LOSE")]
    Lose,
}

impl Outcome {
    /// Returns the outcome as the wire string (`"WIN"` or `"LOSE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
        }
    }
}
