//! Categorycheck CLI entry point.

use categorycheck::cli::{self, Cli, EXIT_ERROR};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli::run_check(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
