//! Cupcakes CLI entry point
//!
//! Minimal entrypoint: parse CLI arguments, dispatch to the matching
//! command, print errors to stderr, exit non-zero on failure. All real
//! logic lives in the CLI module.

use cupcakes::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
