//! Core data structures for the chain reaction engine
//!
//! ## The `Cell` invariant
//!
//! A cell is either empty (`owner == None`, `orbs == 0`) or held by one
//! player with at least one orb. The engine never stores an owner with
//! zero orbs or orbs without an owner; every mutation in the game module
//! preserves this pairing and the test suite asserts it after every move.
//!
//! ## Identifiers
//!
//! Players are dense indices `0..player_count` ([`PlayerId`]). Scores,
//! alive flags and bot assignments are plain vectors indexed by seat,
//! which keeps the per-simulation clone performed by the bots a handful
//! of `memcpy`s rather than a pointer chase.

/// Seat index, `0..player_count`.
pub type PlayerId = usize;

/// One cell of the board: an optional owner and its orb count.
///
/// Invariant: `orbs == 0` exactly when `owner == None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub owner: Option<PlayerId>,
    pub orbs: u32,
}

impl Cell {
    /// An unowned cell with no orbs.
    pub const EMPTY: Cell = Cell {
        owner: None,
        orbs: 0,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// A board coordinate, row-major addressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        GridPos { row, col }
    }
}

/// One orb travelling from an exploding cell to a neighbor.
///
/// These are replay artifacts for the caller's animation layer, valid
/// only for the most recently applied move. They carry no authority over
/// game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OrbFlight {
    pub src_row: usize,
    pub src_col: usize,
    pub dst_row: usize,
    pub dst_col: usize,
    /// The player the orb is attributed to (the exploding cell's owner).
    pub player: PlayerId,
}

/// Bot strategy variant assignable to a seat at session creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BotKind {
    /// Uniform pick among the valid moves.
    Random,
    /// One-ply lookahead maximizing immediate score gain.
    Greedy,
    /// Alpha-beta minimax with parallel root fan-out.
    Minimax,
}
