//! Greedy one-ply lookahead

use super::BotStrategy;
use crate::game::Game;
use crate::types::{GridPos, PlayerId};

/// Simulates every valid move on a sandbox clone and keeps the one with
/// the largest immediate score gain. Ties go to the first-enumerated
/// (row-major) move.
pub struct GreedyBot;

impl BotStrategy for GreedyBot {
    fn find_move(&self, game: &Game, player: PlayerId) -> Option<GridPos> {
        let moves = game.valid_moves(player);
        if moves.is_empty() {
            return None;
        }

        let score_before = game.player_score(player);
        let mut best = moves[0];
        let mut best_gain = i32::MIN;

        for &mv in &moves {
            let mut sim = game.clone();
            sim.apply_move(mv.row, mv.col, player);
            let gain = sim.player_score(player) - score_before;
            if gain > best_gain {
                best_gain = gain;
                best = mv;
            }
        }

        Some(best)
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
        assert_eq!(GreedyBot.find_move(&game, 0), None);
    }

    #[test]
    fn test_single_valid_move_is_returned() {
        let mut game = Game::new(2, 2, 2, vec![None, None]);
        for &(r, c) in &[(0, 0), (0, 1), (1, 0)] {
            assert!(game.apply_move(r, c, 1));
        }
        assert_eq!(GreedyBot.find_move(&game, 0), Some(GridPos::new(1, 1)));
    }

    #[test]
    fn test_prefers_capturing_explosion() {
        let mut game = Game::new(3, 3, 2, vec![None, None]);
        // Player 0 has a primed corner; player 1 holds a fat pile next
        // to it. Re-placing at the corner explodes and captures the
        // pile, far out-gaining any fresh placement.
        assert!(game.apply_move(0, 0, 0));
        assert!(game.apply_move(0, 1, 1));
        assert!(game.apply_move(0, 1, 1));

        let mv = GreedyBot.find_move(&game, 0).expect("moves exist");
        assert_eq!(
            mv,
            GridPos::new(0, 0),
            "greedy must pick the capturing explosion"
        );
    }

    #[test]
    fn test_tie_breaks_to_first_enumerated() {
        let game = Game::new(3, 3, 2, vec![None, None]);
        // Empty board: every placement gains exactly one orb.
        assert_eq!(GreedyBot.find_move(&game, 0), Some(GridPos::new(0, 0)));
    }
}
