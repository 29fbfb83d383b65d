//! Game Flow Integration Tests
//!
//! Tests for full game flows through the public session API:
//! - Session lifecycle and configuration
//! - Whole matches driven by bots
//! - Score/ownership invariants across cascades
//! - Winner detection and the grace period

use chain_engine::{BotKind, Game, GameSession, GridPos, PlayerId, SessionConfig};

/// Sum of orbs over cells owned by `player`. Must match the recorded
/// score in every reachable state.
fn owned_orbs(game: &Game, player: PlayerId) -> i32 {
    game.board()
        .cells()
        .iter()
        .filter(|cell| cell.owner == Some(player))
        .map(|cell| cell.orbs as i32)
        .sum()
}

fn assert_invariants(game: &Game) {
    for player in 0..game.player_count() {
        assert_eq!(
            game.player_score(player),
            owned_orbs(game, player),
            "score bookkeeping must match the board for player {player}"
        );
    }
    for cell in game.board().cells() {
        assert_eq!(
            cell.orbs == 0,
            cell.owner.is_none(),
            "a cell is owned exactly when it holds orbs"
        );
    }
}

/// Drive a bot-vs-bot match to its end (or a move cap), checking the
/// invariants after every applied move. Returns the winner, if any.
fn play_match(mut session: GameSession, move_cap: usize) -> Option<PlayerId> {
    let mut player = 0;
    for _ in 0..move_cap {
        if let Some(winner) = session.winner() {
            return Some(winner);
        }
        if !session.is_eliminated(player) {
            match session.request_bot_move(player) {
                Some(GridPos { row, col }) => {
                    assert!(
                        session.apply_move(row, col, player),
                        "a bot move must always be applicable"
                    );
                    assert_invariants(session.game());
                }
                None => {
                    // A seat with no move is out of the game.
                    assert!(session.game().valid_moves(player).is_empty());
                }
            }
        }
        player = (player + 1) % 2;
    }
    session.winner()
}

// ============================================================================
// Full Matches
// ============================================================================

#[test]
fn test_random_vs_random_match_keeps_invariants() {
    let config = SessionConfig::new(2, 4, 4)
        .with_bot(0, BotKind::Random)
        .with_bot(1, BotKind::Random);
    let session = GameSession::new(config).expect("valid config");
    play_match(session, 400);
}

#[test]
fn test_greedy_vs_greedy_match_keeps_invariants() {
    let config = SessionConfig::new(2, 4, 4)
        .with_bot(0, BotKind::Greedy)
        .with_bot(1, BotKind::Greedy);
    let session = GameSession::new(config).expect("valid config");
    play_match(session, 400);
}

#[test]
fn test_minimax_vs_greedy_match_keeps_invariants() {
    let config = SessionConfig::new(2, 3, 3)
        .with_bot(0, BotKind::Minimax)
        .with_bot(1, BotKind::Greedy);
    let session = GameSession::new(config).expect("valid config");
    play_match(session, 200);
}

// ============================================================================
// Winner Detection
// ============================================================================

#[test]
fn test_grace_period_blocks_early_winner() {
    let mut session = GameSession::new(SessionConfig::new(3, 4, 4)).expect("valid config");

    // Two of three players place; player 2 never does. Even though only
    // placed players are alive, no winner may be declared before three
    // moves have been made.
    assert!(session.apply_move(0, 0, 0));
    assert_eq!(session.winner(), None);
    assert!(session.apply_move(3, 3, 1));
    assert_eq!(session.winner(), None, "two moves < three players");
    assert!(!session.is_eliminated(2), "grace period shields player 2");

    assert!(session.apply_move(0, 3, 0));
    assert!(session.is_eliminated(2));
    assert_eq!(session.winner(), None, "two players still alive");
}

#[test]
fn test_capture_decides_the_game() {
    let mut session = GameSession::new(SessionConfig::new(2, 3, 3)).expect("valid config");

    assert!(session.apply_move(0, 1, 1));
    assert!(session.apply_move(0, 0, 0));
    assert!(session.apply_move(0, 0, 0)); // corner explodes, flips (0,1)

    assert_eq!(session.winner(), Some(0));
    assert!(session.is_eliminated(1));
    assert_eq!(session.player_score(1), 0);
}

// ============================================================================
// Snapshot & Animation Surface
// ============================================================================

#[test]
fn test_snapshot_and_animation_round() {
    let mut session = GameSession::new(SessionConfig::new(2, 3, 3)).expect("valid config");

    assert!(session.apply_move(0, 0, 0));
    assert!(session.last_animation_events().is_empty());
    assert_eq!(
        session.grid_state(),
        "0,1;-1,0;-1,0|-1,0;-1,0;-1,0|-1,0;-1,0;-1,0"
    );

    assert!(session.apply_move(0, 0, 0));
    let events = session.last_animation_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.player == 0));
    let destinations: Vec<_> = events.iter().map(|e| (e.dst_row, e.dst_col)).collect();
    assert!(destinations.contains(&(0, 1)));
    assert!(destinations.contains(&(1, 0)));

    // The next move replaces the trace even when nothing explodes.
    assert!(session.apply_move(2, 2, 1));
    assert!(session.last_animation_events().is_empty());
}

// ============================================================================
// Cascade Stress
// ============================================================================

#[test]
fn test_saturated_board_cascade_terminates() {
    let mut session = GameSession::new(SessionConfig::new(2, 5, 5)).expect("valid config");
    let game_positions: Vec<GridPos> = session.game().board().positions().collect();

    // Fill every cell to exactly its capacity, split between the two
    // players by column parity, then trip the interior.
    for pos in &game_positions {
        let player = pos.col % 2;
        let cap = session.game().board().capacity(pos.row, pos.col);
        for _ in 0..cap {
            assert!(session.apply_move(pos.row, pos.col, player));
        }
    }
    assert!(session.apply_move(2, 2, 0));
    assert_invariants(session.game());

    // At saturation every explosion redistributes fully in-bounds, so
    // the cascade can only end by deciding the game.
    assert!(
        session.winner().is_some(),
        "saturated cascade must end with a sole owner"
    );

    // No orbs appear from nowhere: the board holds at most what was
    // placed.
    let total: u32 = session.game().board().cells().iter().map(|c| c.orbs).sum();
    let placed: u32 = game_positions
        .iter()
        .map(|p| session.game().board().capacity(p.row, p.col))
        .sum::<u32>()
        + 1;
    assert!(total <= placed);
}
