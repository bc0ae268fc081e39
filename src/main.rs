mod api;
mod cli;
mod commit;
mod config;
mod constants;
mod git;
#[cfg(test)]
mod testutil;
mod ui;

use crate::cli::{Cli, Command};
use anyhow::Result;

fn main() {
    if let Err(e) = run() {
        error!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match Cli::parse_args().command {
        Command::Commit(args) => commit::run(&args),
    }
}
