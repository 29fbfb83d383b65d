//! Bot arena: plays two bots against each other through the public
//! session API and reports the result.
//!
//! Usage: `chain-arena [bot_a] [bot_b] [rows] [cols]`
//! where a bot is `random`, `greedy` or `minimax`. Defaults to a
//! minimax-vs-greedy match on a 6x6 grid. Set `RUST_LOG=debug` to see
//! cascade and search activity.

use anyhow::{bail, Context, Result};
use log::info;

use chain_engine::{BotKind, GameSession, SessionConfig};

fn parse_bot(name: &str) -> Result<BotKind> {
    match name {
        "random" => Ok(BotKind::Random),
        "greedy" => Ok(BotKind::Greedy),
        "minimax" => Ok(BotKind::Minimax),
        other => bail!("unknown bot '{other}' (expected random, greedy or minimax)"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let bot_a = parse_bot(args.first().map_or("minimax", String::as_str))?;
    let bot_b = parse_bot(args.get(1).map_or("greedy", String::as_str))?;
    let rows: usize = args
        .get(2)
        .map_or(Ok(6), |s| s.parse())
        .context("rows must be a number")?;
    let cols: usize = args
        .get(3)
        .map_or(Ok(6), |s| s.parse())
        .context("cols must be a number")?;

    let config = SessionConfig::new(2, rows, cols)
        .with_bot(0, bot_a)
        .with_bot(1, bot_b);
    let mut session = GameSession::new(config)?;

    println!("{:?} vs {:?} on a {}x{} grid", bot_a, bot_b, rows, cols);

    let move_cap = rows * cols * 20;
    let mut player = 0;
    for turn in 0..move_cap {
        if let Some(winner) = session.winner() {
            println!("winner: player {winner} after {turn} turns");
            println!("final grid: {}", session.grid_state());
            return Ok(());
        }

        if !session.is_eliminated(player) {
            if let Some(mv) = session.request_bot_move(player) {
                session.apply_move(mv.row, mv.col, player);
                info!(
                    "turn {turn}: player {player} -> ({}, {}), scores {}:{}",
                    mv.row,
                    mv.col,
                    session.player_score(0),
                    session.player_score(1)
                );
            }
        }
        player = (player + 1) % 2;
    }

    println!("no winner within {move_cap} turns");
    println!("final grid: {}", session.grid_state());
    Ok(())
}
