//! Scrolling trace of a 1-D elementary automaton.

use clap::Parser;

use krill_automata::{HistoryRing, LineAutomaton};
use krill_core::Rule;
use krill_engine::RunConfig;
use krill_term::run_in_terminal;

#[derive(Debug, Parser)]
#[command(
    name = "elementary",
    about = "Elementary cellular automaton driven by a Wolfram rule"
)]
struct Args {
    /// Delay between two generations, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay: u64,

    /// Wolfram rule number.
    #[arg(long, value_name = "0-255", default_value_t = 90)]
    rule: u8,

    /// Randomize the initial state instead of seeding the center cell.
    #[arg(long)]
    randomize: bool,

    /// Seed for random operations (defaults to the clock).
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
        let mut line = LineAutomaton::new(Rule::new(args.rule), cols, config.seed)?;
        if args.randomize {
            line.randomize();
        } else {
            line.start_with_center();
        }
        let ring = HistoryRing::new(line, rows)?;
        Ok(Box::new(ring))
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
