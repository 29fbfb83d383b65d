//! Engine-wide constants
//!
//! Tunables and limits shared across the board, game and search modules.

/// Minimum board side length. A 1-wide board degenerates every cell to a
/// corner and makes the capacity rule meaningless.
pub const MIN_GRID_DIM: usize = 2;

/// Maximum board side length accepted at session creation.
pub const MAX_GRID_DIM: usize = 32;

/// Minimum number of seats in a session.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of seats in a session.
pub const MAX_PLAYERS: usize = 8;

/// Total plies examined by the minimax bot. The root candidate move
/// consumes one ply, so each search worker recurses two plies deep.
pub const SEARCH_DEPTH: u32 = 3;

/// Orb capacity of a corner cell.
pub const CORNER_CAPACITY: u32 = 1;

/// Orb capacity of a non-corner edge cell.
pub const EDGE_CAPACITY: u32 = 2;

/// Orb capacity of an interior cell.
pub const INTERIOR_CAPACITY: u32 = 3;
