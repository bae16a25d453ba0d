#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! nbblack — apply the Black formatter to Jupyter notebook code cells.

mod cli;
mod commands;
mod config;
mod fmt;
mod notebook;

use clap::Parser;

use cli::{Cli, OutputCtx};

/// Check-mode exit statuses above this are reserved for errors.
const MAX_COUNT_EXIT: usize = 100;

fn main() {
    let cli = Cli::parse();
    let ctx = OutputCtx::new(cli.debug);

    match commands::format::run(&cli, &ctx) {
        Ok(count) => {
            if cli.check && count > 0 {
                let code = i32::try_from(count.min(MAX_COUNT_EXIT)).unwrap_or(1);
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
