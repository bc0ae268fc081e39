use crate::constants::DEFAULT_TIMEOUT_SECS;
use clap::{Args, Parser, Subcommand};

/// A CLI tool for writing faster commit messages
///
/// SplitJoin is a productivity focused service for helping developers
/// communicate more easily and effectively. Write your commit messages in an
/// instant and then edit them as you wish.
#[derive(Parser, Debug)]
#[command(
    name = "sj",
    about,
    long_about,
    arg_required_else_help = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a commit message for your staged changes
    ///
    /// Sends the staged diff to the SplitJoin API and prints back a suggested
    /// commit message. Requires SJ_ACCESS_TOKEN to be set.
    Commit(CommitArgs),
}

#[derive(Args, Debug)]
pub struct CommitArgs {
    /// API endpoint (overrides SJ_ENDPOINT)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// seconds to wait for the API before giving up
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// print the full JSON response from the API
    #[arg(long)]
    pub debug_response: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
