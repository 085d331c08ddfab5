//! Win determination for the door game.

use super::game::DoorGame;
use super::types::{DoorIndex, Outcome};
use tracing::instrument;

/// Decides the outcome of a game for a picked door.
///
/// The outcome is evaluated against the `picked` argument alone; the pick
/// stored on the game by [`DoorGame::pick`] is not consulted.
#[instrument(skip(game), fields(game_id = %game.id()))]
pub fn check_outcome(game: &DoorGame, picked: DoorIndex) -> Outcome {
    if picked == game.winning_door() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
