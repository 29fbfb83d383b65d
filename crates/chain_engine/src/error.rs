//! Error types for the chain reaction engine
//!
//! Construction-time validation failures are reported through
//! [`EngineError`]. Gameplay-level failures (illegal moves, queries for
//! unknown players) are deliberately *not* errors: they degrade to safe
//! return values (`false`, `0`, `None`) so that no fault can cross the
//! session interface as a panic.

use thiserror::Error;

/// Errors that can occur while creating a game session
#[derive(Error, Debug)]
pub enum EngineError {
    /// Board dimensions outside the supported range
    #[error("invalid board dimensions {rows}x{cols} (sides must be {min}..={max})", min = crate::constants::MIN_GRID_DIM, max = crate::constants::MAX_GRID_DIM)]
    InvalidDimensions { rows: usize, cols: usize },

    /// Player count outside the supported range
    #[error("invalid player count {count} (must be {min}..={max})", min = crate::constants::MIN_PLAYERS, max = crate::constants::MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },

    /// Bot assigned to a seat that does not exist
    #[error("bot assigned to seat {seat}, but the session has only {players} players")]
    BotSeatOutOfRange { seat: usize, players: usize },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
