#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minefield::{
    init_logging, render_board, render_outcome, render_round_header, render_round_results,
    Board, CliController, Controller, CpuController, Game, GameConfig, GameError, GameMode,
    MAX_SIZE, MIN_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player minefield on a tiny grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix the CPU's RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Debug: print where the CPU places its mines")]
    reveal_cpu_mines: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut console = CliController::stdio();
    match run_session(&mut console, &mut rng, cli.reveal_cpu_mines) {
        Ok(()) | Err(GameError::InputClosed) => {}
        Err(e) => return Err(e.into()),
    }
    println!("\nThanks for playing Minefield! See you next time.");
    Ok(())
}

/// Menu, setup and game, repeated until the player quits.
#[cfg(feature = "std")]
fn run_session(
    console: &mut CliController<std::io::Stdin, std::io::Stdout>,
    rng: &mut SmallRng,
    reveal_cpu_mines: bool,
) -> Result<(), GameError> {
    loop {
        console.say("\n======================\n=== MINEFIELD GAME ===\n======================\n")?;
        let Some(mode) = console.choose_game_mode()? else {
            return Ok(());
        };

        console.say("\n=== BOARD DIMENSIONS ===\n")?;
        let width = console.request_dimension("Board Width", MIN_SIZE, MAX_SIZE)?;
        let height = console.request_dimension("Board Height", MIN_SIZE, MAX_SIZE)?;
        let preview = Board::new(width, height);
        console.say(&render_board(&preview))?;

        console.say("=== NUMBER OF MINES ===\n")?;
        let mines = console.request_mine_count(&preview)?;
        let config = GameConfig::new(width, height, mines, mode)?;

        play_game(console, &config, rng, reveal_cpu_mines)?;
        if !console.ask_play_again()? {
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
fn play_game(
    console: &mut CliController<std::io::Stdin, std::io::Stdout>,
    config: &GameConfig,
    rng: &mut SmallRng,
    reveal_cpu_mines: bool,
) -> Result<(), GameError> {
    let mut game = Game::from_config(config);
    let mut first = CliController::stdio();
    let mut second: Box<dyn Controller> = match config.mode {
        GameMode::VsCpu => Box::new(
            CpuController::new(SmallRng::from_rng(&mut *rng))
                .with_announcements(true)
                .reveal_placements(reveal_cpu_mines),
        ),
        GameMode::TwoPlayer => Box::new(CliController::stdio()),
    };

    while !game.status().is_over() {
        console.say(&render_round_header(game.round() + 1))?;
        console.say(&render_board(game.board()))?;
        let report = game.play_round([&mut first, &mut *second])?;
        console.say(&render_round_results(&game, &report))?;
    }
    console.say(&render_outcome(&game))?;
    console.say("\n=== GAME OVER ===\n")?;
    Ok(())
}
