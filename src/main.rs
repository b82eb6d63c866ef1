use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use gambit_cli::{Session, SessionConfig};
use gambit_core::{Board, Color, STARTING_PLACEMENT};
use gambit_game::Game;

#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "Two-player chess in the terminal")]
struct Cli {
    /// Starting position as FEN piece placement (ranks 8 to 1)
    #[arg(long, default_value = STARTING_PLACEMENT)]
    position: String,
    /// Black moves first
    #[arg(long)]
    black_first: bool,
    /// Do not draw the board after each move
    #[arg(long)]
    no_board: bool,
    /// Print the number of moves played after each move
    #[arg(long)]
    move_count: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();
    info!("gambit starting");

    let board: Board = cli
        .position
        .parse()
        .with_context(|| format!("invalid --position \"{}\"", cli.position))?;
    let side = if cli.black_first { Color::Black } else { Color::White };
    let config = SessionConfig {
        render_board: !cli.no_board,
        show_move_count: cli.move_count,
    };

    let stdin = io::stdin();
    let game = Game::from_board(board, side);
    let mut session = Session::new(game, stdin.lock(), io::stdout(), config);
    let status = session.run()?;
    info!(%status, "gambit exiting");
    Ok(())
}
