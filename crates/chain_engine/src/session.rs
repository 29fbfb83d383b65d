//! Session lifecycle and the host-facing API
//!
//! The engine used to live behind a process-global pointer in its host
//! bridge. Here the session is an explicitly owned value: creating a
//! [`GameSession`] starts a game, dropping it (or rebinding the
//! variable) releases it. There is exactly one authoritative game per
//! session, mutated only through [`GameSession::apply_move`]; bot
//! search only ever reads and clones it.

use log::info;

use crate::constants::{MAX_GRID_DIM, MAX_PLAYERS, MIN_GRID_DIM, MIN_PLAYERS};
use crate::error::{EngineError, EngineResult};
use crate::game::Game;
use crate::types::{BotKind, GridPos, OrbFlight, PlayerId};

/// Configuration for a new session: grid size, seat count and bot
/// assignment.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub players: usize,
    bots: Vec<(PlayerId, BotKind)>,
}

impl SessionConfig {
    pub fn new(players: usize, rows: usize, cols: usize) -> SessionConfig {
        SessionConfig {
            rows,
            cols,
            players,
            bots: Vec::new(),
        }
    }

    /// Assign a bot to a seat. Seats are validated when the session is
    /// created.
    pub fn with_bot(mut self, seat: PlayerId, kind: BotKind) -> SessionConfig {
        self.bots.push((seat, kind));
        self
    }

    /// Legacy-style constructor: a numeric bot selector for seat 1,
    /// where 0 means no bot, 1 random, 2 greedy, 3 minimax. Unknown
    /// selectors mean no bot, and single-seat sessions never get one.
    pub fn with_bot_selector(
        players: usize,
        selector: u8,
        rows: usize,
        cols: usize,
    ) -> SessionConfig {
        let config = SessionConfig::new(players, rows, cols);
        let kind = match selector {
            1 => Some(BotKind::Random),
            2 => Some(BotKind::Greedy),
            3 => Some(BotKind::Minimax),
            _ => None,
        };
        match kind {
            Some(kind) if players > 1 => config.with_bot(1, kind),
            _ => config,
        }
    }
}

/// One running chain reaction game.
///
/// All gameplay queries and mutations from the host go through this
/// type. Gameplay failures degrade to safe return values; only
/// construction can error.
pub struct GameSession {
    game: Game,
}

impl GameSession {
    /// Initialize a fresh session
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the dimensions or player count are
    /// out of range, or a bot is assigned to a seat that does not
    /// exist.
    pub fn new(config: SessionConfig) -> EngineResult<GameSession> {
        if config.rows < MIN_GRID_DIM
            || config.rows > MAX_GRID_DIM
            || config.cols < MIN_GRID_DIM
            || config.cols > MAX_GRID_DIM
        {
            return Err(EngineError::InvalidDimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }
        if config.players < MIN_PLAYERS || config.players > MAX_PLAYERS {
            return Err(EngineError::InvalidPlayerCount {
                count: config.players,
            });
        }

        let mut bots: Vec<Option<BotKind>> = vec![None; config.players];
        for &(seat, kind) in &config.bots {
            if seat >= config.players {
                return Err(EngineError::BotSeatOutOfRange {
                    seat,
                    players: config.players,
                });
            }
            bots[seat] = Some(kind);
        }

        info!(
            "session created: {}x{} grid, {} players, {} bot seats",
            config.rows,
            config.cols,
            config.players,
            bots.iter().flatten().count()
        );

        Ok(GameSession {
            game: Game::new(config.rows, config.cols, config.players, bots),
        })
    }

    /// Read access to the underlying game, for bots and analysis.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Execute a move for a player. `false` means the move was illegal
    /// and nothing changed.
    pub fn apply_move(&mut self, row: usize, col: usize, player: PlayerId) -> bool {
        self.game.apply_move(row, col, player)
    }

    /// Serialized row-major grid snapshot (`owner,orbs` cells, `;`
    /// within rows, `|` between rows).
    pub fn grid_state(&self) -> String {
        self.game.grid_state()
    }

    /// The winner, once the grace period has passed and a sole player
    /// remains alive.
    pub fn winner(&self) -> Option<PlayerId> {
        self.game.winner()
    }

    /// Whether a player is out of the game. Out-of-range ids default to
    /// eliminated.
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.game.is_eliminated(player)
    }

    /// Current score of a player; 0 for out-of-range ids.
    pub fn player_score(&self, player: PlayerId) -> i32 {
        self.game.player_score(player)
    }

    /// Orb flights of the most recently applied move, for animation
    /// playback.
    pub fn last_animation_events(&self) -> &[OrbFlight] {
        self.game.last_animation_events()
    }

    /// Whether a seat was assigned a bot at creation.
    pub fn is_bot_controlled(&self, player: PlayerId) -> bool {
        self.game.is_bot_controlled(player)
    }

    /// Ask the seat's bot for a move. `None` for human seats and for
    /// bots with no valid move.
    pub fn request_bot_move(&self, player: PlayerId) -> Option<GridPos> {
        let strategy = self.game.bot_kind(player)?.strategy();
        strategy.find_move(&self.game, player)
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        info!("session destroyed after {} moves", self.game.moves_made());
    }
}
