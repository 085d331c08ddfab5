//! Per-game state record for the door game.

use super::types::{DoorIndex, GameId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// State of a single door game.
///
/// Created with a randomly chosen winning door; the door to reveal is fixed
/// at creation so repeated reveals return the same door. The picked door is
/// recorded as-is: no range check, no comparison against the revealed door,
/// last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorGame {
    id: GameId,
    winning_door: DoorIndex,
    revealed_door: DoorIndex,
    picked_door: Option<DoorIndex>,
}

impl DoorGame {
    /// Creates a new game with the given id and winning door.
    ///
    /// The revealed door is the lowest door index that is not the winning
    /// door, so the invariant `revealed_door != winning_door` holds from
    /// creation onward.
    #[instrument]
    pub fn new(id: GameId, winning_door: DoorIndex) -> Self {
        let revealed_door = if winning_door == 0 { 1 } else { 0 };
        debug!(game_id = %id, revealed_door, "Created game state");
        Self {
            id,
            winning_door,
            revealed_door,
            picked_door: None,
        }
    }

    /// Records the player's picked door, replacing any earlier pick.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn pick(&mut self, door: DoorIndex) {
        if let Some(previous) = self.picked_door {
            warn!(previous, door, "Replacing an earlier pick");
        }
        self.picked_door = Some(door);
    }

    /// Returns the game id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the winning door.
    pub fn winning_door(&self) -> DoorIndex {
        self.winning_door
    }

    /// Returns the non-winning door shown to the player.
    pub fn revealed_door(&self) -> DoorIndex {
        self.revealed_door
    }

    /// Returns the door the player picked, if any.
    pub fn picked_door(&self) -> Option<DoorIndex> {
        self.picked_door
    }
}
