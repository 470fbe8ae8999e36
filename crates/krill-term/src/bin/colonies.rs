//! Game of Life with competing colonies conquering territory.

use clap::Parser;

use krill_automata::ColonyBoard;
use krill_core::ColonyCatalog;
use krill_engine::RunConfig;
use krill_term::run_in_terminal;

#[derive(Debug, Parser)]
#[command(
    name = "colonies",
    about = "Conway's Game of Life with competing colonies"
)]
struct Args {
    /// Delay between two generations, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay: u64,

    /// Number of competing colonies.
    #[arg(
        long,
        value_name = "N",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(2..=8)
    )]
    colonies: u8,

    /// Mark territory that has ever been alive.
    #[arg(long)]
    show_explored: bool,

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
        let mut board = ColonyBoard::new(
            rows,
            cols,
            usize::from(args.colonies),
            args.show_explored,
            ColonyCatalog::standard(),
            config.seed,
        )?;
        board.randomize();
        Ok(Box::new(board))
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
