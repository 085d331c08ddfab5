//! Monty Hall style door game: three doors, one prize, one reveal.

mod game;
mod rules;
mod types;

pub use game::DoorGame;
pub use rules::check_outcome;
pub use types::{DOOR_COUNT, DoorIndex, GameId, Outcome};
