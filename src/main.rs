// drills - word-aware truncation and majority counting from the command line
//
// Architecture:
// - Library (drills): pure truncate/majority functions, config, logging setup
// - CLI (cli.rs): clap command tree, output formatting, exit codes
//
// Exit codes: 0 success, 2 invalid argument (negative budget/threshold,
// malformed number list, clap usage errors), 1 anything else.

mod cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
