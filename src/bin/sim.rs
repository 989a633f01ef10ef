#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minefield::{init_logging, CpuController, Game, GameConfig, GameMode, GameStatus, Player, Seat};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Play one CPU-vs-CPU game and print a JSON summary.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 3)]
    width: usize,
    #[arg(long, default_value_t = 3)]
    height: usize,
    #[arg(long, default_value_t = 2)]
    mines: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = GameConfig::new(args.width, args.height, args.mines, GameMode::VsCpu)?;

    let board = minefield::Board::new(config.width, config.height);
    let mut game = Game::new(
        board,
        Player::cpu("CPU 1", config.mines),
        Player::cpu("CPU 2", config.mines),
    );
    let mut cpu1 = CpuController::new(SmallRng::seed_from_u64(args.seed));
    let mut cpu2 = CpuController::new(SmallRng::seed_from_u64(args.seed.wrapping_add(1)));

    let status = game.run([&mut cpu1, &mut cpu2], |_, report| {
        log::info!("round {} -> {:?}", report.round, report.remaining);
    })?;

    let winner = match status {
        GameStatus::Winner(seat) => Some(game.player(seat).name.clone()),
        _ => None,
    };
    let result = json!({
        "rounds": game.round(),
        "status": status,
        "winner": winner,
        "remaining": {
            "player1": game.player(Seat::First).remaining_mines(),
            "player2": game.player(Seat::Second).remaining_mines(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
