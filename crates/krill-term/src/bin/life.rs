//! Conway's Game of Life on the full terminal screen.

use clap::Parser;

use krill_automata::Board;
use krill_engine::RunConfig;
use krill_term::run_in_terminal;

#[derive(Debug, Parser)]
#[command(name = "life", about = "Conway's Game of Life in the terminal")]
struct Args {
    /// Delay between two generations, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay: u64,

    /// Treat the virtual border cells as alive.
    #[arg(long)]
    border_cells_alive: bool,

    /// Seed for the random initial state (defaults to the clock).
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let config = RunConfig::new(args.delay, args.seed);
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let result = run_in_terminal(config.delay_ms, |rows, cols| {
        let mut board = Board::new(rows, cols, args.border_cells_alive, config.seed)?;
        board.randomize();
        Ok(Box::new(board))
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
