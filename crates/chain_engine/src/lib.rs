//! # Chain Reaction Engine
//!
//! An N-player grid game: placing an orb in a cell you own (or in an
//! empty cell) may push it past its positional capacity and trigger a
//! cascading chain of explosions that redistribute orbs, and ownership,
//! to the orthogonal neighbors. The last player holding orbs wins.
//!
//! The crate splits into:
//!
//! - [`board`] - grid storage, capacities, adjacency
//! - [`game`] - the state machine: validation, move application and
//!   cascade resolution, score/alive bookkeeping, winner detection
//! - [`bot`] - the strategy trait and its random, greedy and minimax
//!   implementations
//! - [`session`] - the owned session object exposed to a host
//!   controller
//!
//! ## Concurrency model
//!
//! The authoritative [`game::Game`] is mutated only by sequential
//! `apply_move` calls from one control path. Bot search clones it, one
//! private clone per worker thread at the minimax root, so the fan-out
//! needs no locks and the caller simply joins every worker.
//!
//! ```
//! use chain_engine::{BotKind, GameSession, SessionConfig};
//!
//! let config = SessionConfig::new(2, 6, 6).with_bot(1, BotKind::Minimax);
//! let mut session = GameSession::new(config).unwrap();
//!
//! assert!(session.apply_move(0, 0, 0));
//! if let Some(mv) = session.request_bot_move(1) {
//!     assert!(session.apply_move(mv.row, mv.col, 1));
//! }
//! ```

pub mod board;
pub mod bot;
pub mod constants;
pub mod error;
pub mod game;
pub mod session;
pub mod types;

pub use board::Board;
pub use bot::{BotStrategy, GreedyBot, MinimaxBot, RandomBot};
pub use error::{EngineError, EngineResult};
pub use game::Game;
pub use session::{GameSession, SessionConfig};
pub use types::{BotKind, Cell, GridPos, OrbFlight, PlayerId};
