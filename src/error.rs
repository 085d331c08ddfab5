//! Error types for registry lookups.

use crate::games::doors::GameId;
use derive_more::{Display, Error};

/// Lookup failure for a game id that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("game not found: {game_id}")]
pub struct NotFoundError {
    game_id: GameId,
}

impl NotFoundError {
    /// Creates a not-found error for the given game id.
    pub fn new(game_id: impl Into<GameId>) -> Self {
        Self {
            game_id: game_id.into(),
        }
    }

    /// Returns the game id that failed to resolve.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }
}
