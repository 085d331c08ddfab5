//! Integration tests for the game registry lifecycle.

use doorgame::{DOOR_COUNT, GameRegistry, Outcome};

/// Initializes tracing output for test debugging (safe to call repeatedly).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn test_start_new_registers_game() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    assert!(!id.is_empty());

    let game = registry.get_game(&id).expect("game should be registered");
    assert_eq!(game.id(), id);
    assert!(game.winning_door() < DOOR_COUNT);
    assert_eq!(game.picked_door(), None);
}

#[test]
fn test_start_new_yields_distinct_ids() {
    init_tracing();
    let registry = GameRegistry::new();

    let first = registry.start_new();
    let second = registry.start_new();
    assert_ne!(first, second);
}

#[test]
fn test_reveal_never_returns_winning_door() {
    init_tracing();
    let registry = GameRegistry::new();

    // The winning door is random; cover all three cases by repetition.
    for _ in 0..50 {
        let id = registry.start_new();
        let revealed = registry.reveal(&id).unwrap();
        let winning = registry.get_game(&id).unwrap().winning_door();

        assert_ne!(revealed, winning);
        assert!(revealed < DOOR_COUNT);
    }
}

#[test]
fn test_reveal_is_idempotent() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    let first = registry.reveal(&id).unwrap();
    let second = registry.reveal(&id).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pick_stores_door() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    registry.pick(&id, 2).unwrap();
    assert_eq!(registry.get_game(&id).unwrap().picked_door(), Some(2));

    // Repeated pick overwrites the earlier one.
    registry.pick(&id, 0).unwrap();
    assert_eq!(registry.get_game(&id).unwrap().picked_door(), Some(0));
}

#[test]
fn test_pick_permits_out_of_range_door() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    registry.pick(&id, 9).unwrap();
    assert_eq!(registry.get_game(&id).unwrap().picked_door(), Some(9));
    assert_eq!(registry.outcome(&id, 9).unwrap(), Outcome::Lose);
}

#[test]
fn test_outcome_win_iff_picked_is_winning() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    let winning = registry.get_game(&id).unwrap().winning_door();

    for picked in 0..DOOR_COUNT {
        let expected = if picked == winning {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        assert_eq!(registry.outcome(&id, picked).unwrap(), expected);
    }
}

#[test]
fn test_outcome_ignores_stored_pick() {
    init_tracing();
    let registry = GameRegistry::new();

    let id = registry.start_new();
    let winning = registry.get_game(&id).unwrap().winning_door();
    let losing = (winning + 1) % DOOR_COUNT;

    // Store a losing pick, then query with the winning door: the outcome
    // follows the argument, not the stored pick.
    registry.pick(&id, losing).unwrap();
    assert_eq!(registry.outcome(&id, winning).unwrap(), Outcome::Win);
    assert_eq!(registry.outcome(&id, losing).unwrap(), Outcome::Lose);
}

#[test]
fn test_unknown_id_is_not_found() {
    init_tracing();
    let registry = GameRegistry::new();

    let err = registry.reveal("no-such-game").unwrap_err();
    assert_eq!(err.game_id(), "no-such-game");
    assert_eq!(err.to_string(), "game not found: no-such-game");

    assert!(registry.pick("no-such-game", 1).is_err());
    assert!(registry.outcome("no-such-game", 1).is_err());
    assert!(registry.get_game("no-such-game").is_none());
}

#[test]
fn test_games_are_isolated_by_id() {
    init_tracing();
    let registry = GameRegistry::new();

    let first = registry.start_new();
    let second = registry.start_new();

    registry.pick(&first, 1).unwrap();
    assert_eq!(registry.get_game(&second).unwrap().picked_door(), None);
}
