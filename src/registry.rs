//! Registry managing the lifecycle of door games.

use crate::error::NotFoundError;
use crate::games::doors::{DOOR_COUNT, DoorGame, DoorIndex, GameId, Outcome, check_outcome};
use dashmap::DashMap;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Manages all door games.
///
/// The backing table supports concurrent insert and lookup without external
/// locking; clones share the same table. Games live in the registry for the
/// life of the process and are never evicted. Picks against the same game
/// from concurrent callers are last-write-wins.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: Arc<DashMap<GameId, DoorGame>>,
}

impl GameRegistry {
    /// Creates a new, empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(DashMap::new()),
        }
    }

    /// Starts a new game and returns its id.
    ///
    /// The winning door is chosen uniformly at random from the
    /// [`DOOR_COUNT`] doors.
    #[instrument(skip(self))]
    pub fn start_new(&self) -> GameId {
        info!("Starting a new game");
        let id = Uuid::new_v4().to_string();
        let winning_door = rand::thread_rng().gen_range(0..DOOR_COUNT);
        self.games
            .insert(id.clone(), DoorGame::new(id.clone(), winning_door));

        debug!(game_id = %id, "Game registered");
        id
    }

    /// Returns the door to reveal: a door that is not the winning door.
    ///
    /// The revealed door is fixed at game creation, so repeated calls for
    /// the same game return the same door.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the id is not in the registry.
    #[instrument(skip(self))]
    pub fn reveal(&self, id: &str) -> Result<DoorIndex, NotFoundError> {
        info!("Getting the door to reveal");
        let game = self.lookup(id)?;
        Ok(game.revealed_door())
    }

    /// Records the player's picked door.
    ///
    /// The pick is stored as-is: no range validation, no comparison against
    /// the revealed door, and a repeated pick overwrites the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the id is not in the registry.
    #[instrument(skip(self))]
    pub fn pick(&self, id: &str, picked: DoorIndex) -> Result<(), NotFoundError> {
        info!("Picking a door");
        let mut game = self.games.get_mut(id).ok_or_else(|| {
            warn!(game_id = id, "Game not found");
            NotFoundError::new(id)
        })?;
        game.pick(picked);
        Ok(())
    }

    /// Determines the outcome of the game for the given pick.
    ///
    /// Evaluates the `picked` argument against the winning door; the pick
    /// stored by [`pick`](Self::pick) is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the id is not in the registry.
    #[instrument(skip(self))]
    pub fn outcome(&self, id: &str, picked: DoorIndex) -> Result<Outcome, NotFoundError> {
        info!("Determining the outcome of the game");
        let game = self.lookup(id)?;
        let outcome = check_outcome(&game, picked);

        info!(game_id = id, %outcome, "Game outcome determined");
        Ok(outcome)
    }

    /// Returns a snapshot of the game with the given id.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Option<DoorGame> {
        let game = self.games.get(id).map(|entry| entry.value().clone());

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    fn lookup(
        &self,
        id: &str,
    ) -> Result<dashmap::mapref::one::Ref<'_, GameId, DoorGame>, NotFoundError> {
        self.games.get(id).ok_or_else(|| {
            warn!(game_id = id, "Game not found");
            NotFoundError::new(id)
        })
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
