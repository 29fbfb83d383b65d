//! Bot strategies
//!
//! One capability, three variants: every bot implements [`BotStrategy`]
//! and produces a move (or `None`) for a seat. Bots never mutate the
//! caller's game; they clone it and simulate moves on the clone, which
//! is what makes the minimax fan-out safe without locking.
//!
//! ## Module Organization
//!
//! - `random` - uniform pick among valid moves
//! - `greedy` - one-ply lookahead on immediate score gain
//! - `minimax` - alpha-beta search with one thread per root candidate

mod greedy;
mod minimax;
mod random;

pub use greedy::GreedyBot;
pub use minimax::MinimaxBot;
pub use random::RandomBot;

use crate::game::Game;
use crate::types::{BotKind, GridPos, PlayerId};

/// A move-selection strategy for one bot-controlled seat.
pub trait BotStrategy {
    /// Pick a move for `player`, or `None` when no valid move exists.
    ///
    /// Implementations read `game` and clone it for simulation; the
    /// authoritative instance is never touched.
    fn find_move(&self, game: &Game, player: PlayerId) -> Option<GridPos>;
}

impl BotKind {
    /// Instantiate the strategy for this variant.
    pub fn strategy(self) -> Box<dyn BotStrategy> {
        match self {
            BotKind::Random => Box::new(RandomBot),
            BotKind::Greedy => Box::new(GreedyBot),
            BotKind::Minimax => Box::new(MinimaxBot),
        }
    }
}
