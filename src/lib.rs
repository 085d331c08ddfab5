//! Doorgame library - a Monty Hall style game behind a concurrent registry.
//!
//! A player starts a game (three doors, one winning door chosen at random),
//! the system reveals a non-winning door, the player picks a door, and the
//! system reports the outcome.
//!
//! # Architecture
//!
//! - **Registry**: concurrent id → game table with the four lifecycle
//!   operations (start, reveal, pick, outcome)
//! - **Games**: the door game state record and its win-determination rule
//!
//! The crate is a library; request handling, response formatting, and span
//! emission belong to the embedding caller.
//!
//! # Example
//!
//! ```
//! use doorgame::{GameRegistry, Outcome};
//!
//! # fn example() -> Result<(), doorgame::NotFoundError> {
//! let registry = GameRegistry::new();
//!
//! let id = registry.start_new();
//! let revealed = registry.reveal(&id)?;
//!
//! registry.pick(&id, 0)?;
//! let outcome = registry.outcome(&id, 0)?;
//! assert!(matches!(outcome, Outcome::Win | Outcome::Lose));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod games;
mod registry;

// Crate-level exports - Errors
pub use error::NotFoundError;

// Crate-level exports - Registry
pub use registry::GameRegistry;

// Crate-level exports - Game types
pub use games::doors::{DOOR_COUNT, DoorGame, DoorIndex, GameId, Outcome, check_outcome};
