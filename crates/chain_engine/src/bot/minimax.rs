//! Depth-limited minimax with alpha-beta pruning
//!
//! The root fans out one worker thread per candidate move. Each worker
//! owns a private clone of the game with its candidate already applied
//! and explores the remaining plies sequentially; no game state is
//! shared between workers, so no locking is needed. The caller blocks
//! until every worker has joined.
//!
//! The opponent model is a fixed two-seat adversary: the sole opponent
//! of seat 0 is seat 1 and vice versa. Seats beyond the first two have
//! no opponent in this model and their evaluation degrades to the
//! seat's own score.

use std::thread;

use log::{debug, warn};

use super::BotStrategy;
use crate::constants::SEARCH_DEPTH;
use crate::game::Game;
use crate::types::{GridPos, PlayerId};

/// Alpha-beta minimax bot with parallel exploration of the root moves.
pub struct MinimaxBot;

impl BotStrategy for MinimaxBot {
    fn find_move(&self, game: &Game, player: PlayerId) -> Option<GridPos> {
        let candidates = game.valid_moves(player);
        if candidates.is_empty() {
            return None;
        }
        // A forced move needs no search.
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        let mut workers = Vec::with_capacity(candidates.len());
        for &mv in &candidates {
            let mut sim = game.clone();
            workers.push(thread::spawn(move || {
                sim.apply_move(mv.row, mv.col, player);
                minimax(&sim, SEARCH_DEPTH - 1, i32::MIN, i32::MAX, false, player)
            }));
        }

        // Join in enumeration order; strict `>` keeps the earliest best
        // so a later equal score never displaces it.
        let mut best = candidates[0];
        let mut best_score = i32::MIN;
        for (idx, worker) in workers.into_iter().enumerate() {
            let score = match worker.join() {
                Ok(score) => score,
                Err(_) => {
                    warn!(
                        "search worker for candidate ({}, {}) panicked",
                        candidates[idx].row, candidates[idx].col
                    );
                    i32::MIN
                }
            };
            if score > best_score {
                best_score = score;
                best = candidates[idx];
            }
        }

        debug!(
            "minimax chose ({}, {}) at score {} from {} candidates",
            best.row,
            best.col,
            best_score,
            candidates.len()
        );
        Some(best)
    }
}

/// The fixed two-seat adversary of `player`. Seats beyond the first two
/// have no opponent in this model.
fn opponent_of(player: PlayerId) -> Option<PlayerId> {
    1usize.checked_sub(player)
}

/// Score difference between the searching player and its opponent.
fn evaluate(game: &Game, me: PlayerId) -> i32 {
    let opponent_score = opponent_of(me).map_or(0, |opp| game.player_score(opp));
    game.player_score(me) - opponent_score
}

/// Recursive alpha-beta evaluator.
///
/// Terminal positions (depth exhausted, decided game, or a minimizing
/// side with no move) evaluate to the score difference from the
/// searching player's perspective. Each child move is simulated on a
/// fresh clone; the caller's state is never touched.
fn minimax(
    game: &Game,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    me: PlayerId,
) -> i32 {
    if depth == 0 || game.winner().is_some() {
        return evaluate(game, me);
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in game.valid_moves(me) {
            let mut child = game.clone();
            child.apply_move(mv.row, mv.col, me);
            let eval = minimax(&child, depth - 1, alpha, beta, false, me);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break; // beta cut-off
            }
        }
        max_eval
    } else {
        let opponent = match opponent_of(me) {
            Some(opponent) => opponent,
            None => return evaluate(game, me),
        };
        let moves = game.valid_moves(opponent);
        // An opponent with no reply is a terminal position.
        if moves.is_empty() {
            return evaluate(game, me);
        }
        let mut min_eval = i32::MAX;
        for mv in moves {
            let mut child = game.clone();
            child.apply_move(mv.row, mv.col, opponent);
            let eval = minimax(&child, depth - 1, alpha, beta, true, me);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break; // alpha cut-off
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_no_valid_moves_returns_none() {
        let mut game = Game::new(2, 2, 2, vec![None, None]);
        for pos in game.board().positions().collect::<Vec<_>>() {
            assert!(game.apply_move(pos.row, pos.col, 1));
        }
        assert_eq!(MinimaxBot.find_move(&game, 0), None);
    }

    #[test]
    fn test_single_valid_move_short_circuits() {
        let mut game = Game::new(2, 2, 2, vec![None, None]);
        for &(r, c) in &[(0, 0), (0, 1), (1, 0)] {
            assert!(game.apply_move(r, c, 1));
        }
        assert_eq!(MinimaxBot.find_move(&game, 0), Some(GridPos::new(1, 1)));
    }

    #[test]
    fn test_chosen_move_is_valid() {
        let mut game = Game::new(3, 3, 2, vec![None, None]);
        assert!(game.apply_move(0, 0, 0));
        assert!(game.apply_move(2, 2, 1));
        let mv = MinimaxBot.find_move(&game, 0).expect("moves exist");
        assert!(game.is_move_valid(mv.row, mv.col, 0));
    }

    #[test]
    fn test_search_does_not_mutate_caller_state() {
        let mut game = Game::new(3, 3, 2, vec![None, None]);
        assert!(game.apply_move(0, 0, 0));
        assert!(game.apply_move(2, 2, 1));

        let grid_before = game.grid_state();
        let scores_before = (game.player_score(0), game.player_score(1));
        let moves_before = game.moves_made();

        MinimaxBot.find_move(&game, 0);

        assert_eq!(game.grid_state(), grid_before);
        assert_eq!(
            (game.player_score(0), game.player_score(1)),
            scores_before
        );
        assert_eq!(game.moves_made(), moves_before);
    }

    #[test]
    fn test_evaluate_is_score_difference() {
        let mut game = Game::new(3, 3, 2, vec![None, None]);
        assert!(game.apply_move(0, 0, 0));
        assert!(game.apply_move(1, 1, 1));
        assert!(game.apply_move(1, 1, 1));
        assert_eq!(evaluate(&game, 0), 1 - 2);
        assert_eq!(evaluate(&game, 1), 2 - 1);
    }

    #[test]
    fn test_terminal_evaluation_on_decided_game() {
        let mut game = Game::new(3, 3, 2, vec![None, None]);
        assert!(game.apply_move(0, 0, 0));
        assert!(game.apply_move(2, 2, 0));
        assert_eq!(game.winner(), Some(0), "decided position");
        // Depth remaining, but the winner check terminates the search.
        assert_eq!(minimax(&game, 2, i32::MIN, i32::MAX, true, 0), 2);
    }
}
