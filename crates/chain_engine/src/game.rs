//! Game state machine: move validation, move application, cascades
//!
//! `Game` is the sole mutator of session state. It owns the board plus
//! the per-player score and alive bookkeeping, and implements the chain
//! reaction algorithm:
//!
//! 1. A placed orb that pushes a cell past its capacity seeds a FIFO
//!    worklist.
//! 2. Popped cells that are still over capacity explode: the cell is
//!    reset and one orb is pushed to each in-bounds orthogonal
//!    neighbor, claiming (or flipping) ownership there.
//! 3. Neighbors pushed over their own capacity are enqueued in turn,
//!    guarded by a membership flag so a cell never occupies the
//!    worklist twice.
//!
//! Below saturation, boundary explosions leak surplus orbs off-grid,
//! which bounds the cascade's energy. A fully saturated board stops
//! leaking (every explosion pushes exactly one orb per neighbor), so
//! resolution also halts as soon as at most one player remains alive:
//! the position is decided and further redistribution cannot change
//! the outcome.
//!
//! ## Score accounting
//!
//! Scores are maintained incrementally: +1 on placement, and during an
//! explosion the exploding owner first loses the full exploded orb
//! count, then regains one orb per in-bounds neighbor (plus any orbs
//! captured from a flipped victim, whose owner loses them). After each
//! cascade a defensive pass clamps negative scores to zero and rebuilds
//! the alive bookkeeping by scanning the seats. The incremental path is
//! the correctness story; the clamp is a resilience backstop.

use std::collections::VecDeque;

use log::debug;

use crate::board::Board;
use crate::types::{BotKind, Cell, GridPos, OrbFlight, PlayerId};

/// Complete state of one chain reaction session.
///
/// Cloning yields an independent simulation sandbox: bots clone the
/// authoritative instance and apply moves to the clone, never to the
/// original. Clones drop the animation trace, since simulated moves are
/// never replayed.
pub struct Game {
    board: Board,
    player_count: usize,
    scores: Vec<i32>,
    alive: Vec<bool>,
    alive_count: usize,
    last_alive: Option<PlayerId>,
    moves_made: usize,
    bots: Vec<Option<BotKind>>,
    animations: Vec<OrbFlight>,
}

impl Clone for Game {
    fn clone(&self) -> Self {
        Game {
            board: self.board.clone(),
            player_count: self.player_count,
            scores: self.scores.clone(),
            alive: self.alive.clone(),
            alive_count: self.alive_count,
            last_alive: self.last_alive,
            moves_made: self.moves_made,
            bots: self.bots.clone(),
            // Simulation clones are never replayed by the UI.
            animations: Vec::new(),
        }
    }
}

impl Game {
    /// Create a fresh game. Inputs are assumed validated by the session
    /// layer; `bots` must already be sized to `player_count`.
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        player_count: usize,
        bots: Vec<Option<BotKind>>,
    ) -> Game {
        Game {
            board: Board::new(rows, cols),
            player_count,
            scores: vec![0; player_count],
            alive: vec![false; player_count],
            alive_count: 0,
            last_alive: None,
            moves_made: 0,
            bots,
            animations: Vec::with_capacity(rows * cols),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Total count of successfully applied top-level moves.
    #[inline]
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Current score of a player; 0 for out-of-range ids.
    pub fn player_score(&self, player: PlayerId) -> i32 {
        self.scores.get(player).copied().unwrap_or(0)
    }

    /// Check if a move is legal
    ///
    /// A move is legal when the target is in bounds and the cell is
    /// unowned or already owned by `player`. No side effects; safe to
    /// call from concurrent simulations on distinct clones.
    pub fn is_move_valid(&self, row: usize, col: usize, player: PlayerId) -> bool {
        if !self.board.in_bounds(row, col) || player >= self.player_count {
            return false;
        }
        let cell = self.board.cell(row, col);
        cell.is_empty() || cell.owner == Some(player)
    }

    /// All valid moves for a player, in row-major order.
    ///
    /// The enumeration order is part of the bot contract: greedy and
    /// minimax tie-breaking both favor the first-enumerated move.
    pub fn valid_moves(&self, player: PlayerId) -> Vec<GridPos> {
        self.board
            .positions()
            .filter(|p| self.is_move_valid(p.row, p.col, player))
            .collect()
    }

    /// Execute a move for a player
    ///
    /// Places one orb at `(row, col)` and resolves any resulting chain
    /// reaction. Transactional: an illegal move returns `false` and
    /// leaves every piece of state, including the animation trace,
    /// untouched.
    ///
    /// # Returns
    ///
    /// `true` if the move was applied, `false` if it was rejected.
    pub fn apply_move(&mut self, row: usize, col: usize, player: PlayerId) -> bool {
        if !self.is_move_valid(row, col, player) {
            return false;
        }

        self.animations.clear();

        let cell = self.board.cell_mut(row, col);
        cell.owner = Some(player);
        cell.orbs += 1;
        self.adjust_score(player, 1);

        if self.board.cell(row, col).orbs > self.board.capacity(row, col) {
            let mut unstable = VecDeque::new();
            unstable.push_back(GridPos::new(row, col));
            self.resolve_cascade(unstable);
        }

        self.moves_made += 1;
        true
    }

    /// Drain the worklist of over-capacity cells.
    ///
    /// `in_queue` prevents a cell from occupying the worklist twice at
    /// once; a popped cell may still be stale (overwritten since it was
    /// enqueued) and is then discarded. Resolution stops early once at
    /// most one player remains alive: the position is decided, and a
    /// saturated board would otherwise cycle forever.
    fn resolve_cascade(&mut self, mut unstable: VecDeque<GridPos>) {
        let mut in_queue = vec![false; self.board.rows() * self.board.cols()];
        for pos in &unstable {
            in_queue[self.board.flat_index(pos.row, pos.col)] = true;
        }

        let mut explosions = 0usize;

        while let Some(pos) = unstable.pop_front() {
            in_queue[self.board.flat_index(pos.row, pos.col)] = false;

            let cell = self.board.cell(pos.row, pos.col);
            let owner = match cell.owner {
                Some(owner) if cell.orbs > self.board.capacity(pos.row, pos.col) => owner,
                // Stale entry: emptied or back under capacity since enqueued.
                _ => continue,
            };
            let exploded_orbs = cell.orbs;

            // The owner gives up the whole pile before it is pushed out;
            // the distribution below regains what stays on the grid.
            self.adjust_score(owner, -(exploded_orbs as i32));
            *self.board.cell_mut(pos.row, pos.col) = Cell::EMPTY;
            explosions += 1;

            let neighbors: Vec<GridPos> = self.board.neighbors(pos.row, pos.col).collect();
            for next in neighbors {
                self.animations.push(OrbFlight {
                    src_row: pos.row,
                    src_col: pos.col,
                    dst_row: next.row,
                    dst_col: next.col,
                    player: owner,
                });

                let neighbor = self.board.cell(next.row, next.col);
                match neighbor.owner {
                    None => {
                        *self.board.cell_mut(next.row, next.col) = Cell {
                            owner: Some(owner),
                            orbs: 1,
                        };
                        self.adjust_score(owner, 1);
                    }
                    Some(holder) if holder == owner => {
                        self.board.cell_mut(next.row, next.col).orbs += 1;
                        self.adjust_score(owner, 1);
                    }
                    Some(victim) => {
                        let captured = neighbor.orbs;
                        *self.board.cell_mut(next.row, next.col) = Cell {
                            owner: Some(owner),
                            orbs: captured + 1,
                        };
                        self.adjust_score(owner, captured as i32 + 1);
                        self.adjust_score(victim, -(captured as i32));
                    }
                }

                let idx = self.board.flat_index(next.row, next.col);
                if self.board.cell(next.row, next.col).orbs
                    > self.board.capacity(next.row, next.col)
                    && !in_queue[idx]
                {
                    unstable.push_back(next);
                    in_queue[idx] = true;
                }
            }

            // Decided position: one owner holds every orb. Stop here;
            // on a saturated board nothing leaks and the worklist would
            // never drain on its own.
            if self.alive_count <= 1 {
                break;
            }
        }

        debug!(
            "cascade resolved: {} explosions, {} orb flights",
            explosions,
            self.animations.len()
        );

        self.clamp_scores();
    }

    /// Apply a score delta and track alive/dead threshold crossings.
    ///
    /// Out-of-range ids are ignored. When the alive count drops to
    /// exactly one, the sole survivor is re-identified by a linear scan;
    /// this is the only non-O(1) step and fires only on that transition.
    fn adjust_score(&mut self, player: PlayerId, delta: i32) {
        if player >= self.scores.len() {
            return;
        }
        self.scores[player] += delta;
        if self.scores[player] > 0 {
            if !self.alive[player] {
                self.alive[player] = true;
                self.alive_count += 1;
                self.last_alive = Some(player);
            }
        } else if self.alive[player] {
            self.alive[player] = false;
            self.alive_count -= 1;
            if self.alive_count == 1 {
                self.last_alive = self.alive.iter().position(|&a| a);
            } else if self.alive_count == 0 {
                self.last_alive = None;
            }
        }
    }

    /// Defensive backstop after a cascade: clamp negative scores to zero
    /// and rebuild the alive bookkeeping from the scores. Not a
    /// substitute for the incremental accounting being right.
    fn clamp_scores(&mut self) {
        for score in &mut self.scores {
            if *score < 0 {
                *score = 0;
            }
        }
        self.alive_count = 0;
        self.last_alive = None;
        for player in 0..self.scores.len() {
            if self.scores[player] > 0 {
                self.alive[player] = true;
                self.alive_count += 1;
                self.last_alive = Some(player);
            } else {
                self.alive[player] = false;
            }
        }
    }

    /// The winning player, if the game is decided.
    ///
    /// No winner is declared before every seat has had one turn (the
    /// grace period); after that the sole alive player wins.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.moves_made < self.player_count {
            return None;
        }
        if self.alive_count == 1 {
            self.last_alive
        } else {
            None
        }
    }

    /// Whether a player has been knocked out.
    ///
    /// Always `false` during the grace period; out-of-range ids default
    /// to eliminated.
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        if player >= self.scores.len() {
            return true;
        }
        if self.moves_made < self.player_count {
            return false;
        }
        self.scores[player] <= 0
    }

    /// Serialized grid snapshot for the host UI.
    ///
    /// Cells render as `owner,orbs` with `-1` for unowned, joined by
    /// `;` within a row and `|` between rows.
    pub fn grid_state(&self) -> String {
        let mut out = String::with_capacity(self.rows() * self.cols() * 4);
        for row in 0..self.rows() {
            if row > 0 {
                out.push('|');
            }
            for col in 0..self.cols() {
                if col > 0 {
                    out.push(';');
                }
                let cell = self.board.cell(row, col);
                let owner = cell.owner.map_or(-1, |p| p as i64);
                out.push_str(&format!("{},{}", owner, cell.orbs));
            }
        }
        out
    }

    /// Orb flights produced by the most recently applied move.
    pub fn last_animation_events(&self) -> &[OrbFlight] {
        &self.animations
    }

    /// Bot variant assigned to a seat, if any.
    pub fn bot_kind(&self, player: PlayerId) -> Option<BotKind> {
        self.bots.get(player).copied().flatten()
    }

    /// Whether a seat is bot-controlled.
    pub fn is_bot_controlled(&self, player: PlayerId) -> bool {
        self.bot_kind(player).is_some()
    }
}
