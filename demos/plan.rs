//! Load or generate a board, plan a route across it and print the result.
//!
//! Run: cargo run --bin plan -- --board demos/boards/gap.board 0,0 4,5

use std::process::ExitCode;

use clap::Parser;
use gridpath_demos::{Options, init_logging, run, summary};

fn main() -> ExitCode {
    let opts = match Options::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(opts.verbose);

    match run(&opts) {
        Ok((board, outcome)) => {
            print!("{board}");
            println!("{}", summary(&outcome));
            if outcome.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
