//! Session-scoped game operations between the HTTP layer and the engine.

use uuid::Uuid;

use crate::domain::{snapshot, FreeCellGame, GameSnapshot, MoveKind};
use crate::errors::domain::DomainError;
use crate::state::app_state::AppState;

/// Result of creating a session: its id plus the initial deal.
#[derive(Debug, Clone)]
pub struct CreatedGame {
    pub game_id: Uuid,
    pub snapshot: GameSnapshot,
}

/// Result of a move attempt. `moved` is the engine's soft success flag;
/// illegal-but-well-formed moves come back as `moved: false` with the board
/// unchanged.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub moved: bool,
    pub won: bool,
    pub snapshot: GameSnapshot,
}

fn new_engine(seed: Option<u64>) -> Result<FreeCellGame, DomainError> {
    match seed {
        Some(seed) => FreeCellGame::with_seed(seed),
        None => FreeCellGame::new(),
    }
}

/// Deal a fresh game and register it as a new session.
pub fn create_game(state: &AppState, seed: Option<u64>) -> Result<CreatedGame, DomainError> {
    let game = new_engine(seed)?;
    let snap = snapshot(&game);
    let game_id = state.insert_game(game);
    tracing::info!(game_id = %game_id, seeded = seed.is_some(), "game.created");
    Ok(CreatedGame {
        game_id,
        snapshot: snap,
    })
}

/// Read-only view of a session's board.
pub fn game_snapshot(state: &AppState, game_id: Uuid) -> Result<GameSnapshot, DomainError> {
    let handle = state
        .game(game_id)
        .ok_or_else(|| DomainError::game_not_found(game_id))?;
    let game = handle.lock();
    Ok(snapshot(&game))
}

/// Apply one move to a session's engine.
pub fn apply_move(
    state: &AppState,
    game_id: Uuid,
    mv: MoveKind,
) -> Result<MoveOutcome, DomainError> {
    let handle = state
        .game(game_id)
        .ok_or_else(|| DomainError::game_not_found(game_id))?;
    let mut game = handle.lock();

    let moved = game.apply(mv)?;
    let won = game.is_winner();
    tracing::debug!(game_id = %game_id, ?mv, moved, won, "game.move");

    Ok(MoveOutcome {
        moved,
        won,
        snapshot: snapshot(&game),
    })
}

/// Reset a session by discarding its engine and dealing a fresh one in place.
pub fn restart(
    state: &AppState,
    game_id: Uuid,
    seed: Option<u64>,
) -> Result<GameSnapshot, DomainError> {
    let handle = state
        .game(game_id)
        .ok_or_else(|| DomainError::game_not_found(game_id))?;
    let fresh = new_engine(seed)?;
    let mut game = handle.lock();
    *game = fresh;
    tracing::info!(game_id = %game_id, "game.restarted");
    Ok(snapshot(&game))
}

/// End a session.
pub fn remove(state: &AppState, game_id: Uuid) -> Result<(), DomainError> {
    if state.remove_game(game_id) {
        tracing::info!(game_id = %game_id, "game.removed");
        Ok(())
    } else {
        Err(DomainError::game_not_found(game_id))
    }
}
