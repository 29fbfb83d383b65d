//! Uniformly random move selection

use rand::Rng;

use super::BotStrategy;
use crate::game::Game;
use crate::types::{GridPos, PlayerId};

/// Picks uniformly among the valid moves using the thread-local
/// generator.
pub struct RandomBot;

impl BotStrategy for RandomBot {
    fn find_move(&self, game: &Game, player: PlayerId) -> Option<GridPos> {
        let moves = game.valid_moves(player);
        if moves.is_empty() {
            return None;
        }
        let mut rng = rand::rng();
        Some(moves[rng.random_range(0..moves.len())])
    }
}
