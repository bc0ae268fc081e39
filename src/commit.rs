use crate::api::{self, Client, MessageService, Reply};
use crate::cli::CommitArgs;
use crate::config::Config;
use crate::constants::SPINNER_MESSAGE;
use crate::git;
use crate::ui::Spinner;
use crate::{debug, info, warning};
use anyhow::{Result, bail};
use std::path::Path;
use std::time::Duration;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized, please check your personal access token.";

/// `sj commit`: resolve config, then ask the api about the staged diff in
/// the current directory
pub fn run(args: &CommitArgs) -> Result<()> {
    let config = Config::resolve(
        args.endpoint.as_deref(),
        Duration::from_secs(args.timeout),
        |key| std::env::var(key).ok(),
    )?;
    let client = Client::new(&config);

    let reply = suggest(Path::new("."), &client, args.debug_response)?;
    report(&reply);

    Ok(())
}

/// check the repository at `path`, send its staged diff, and interpret the reply
pub fn suggest(path: &Path, service: &impl MessageService, debug_response: bool) -> Result<Reply> {
    if !git::is_work_tree(path)? {
        bail!("not a git repository, please run this command from inside a git repository");
    }
    if !git::has_staged_changes(path)? {
        bail!("no staged changes, please stage your changes before running this command");
    }

    let diff = git::staged_diff(path)?;

    let response = {
        let _spinner = Spinner::start(SPINNER_MESSAGE);
        service.request(&diff)?
    };

    if debug_response {
        debug!("{}", response.body);
    }

    api::interpret(&response)
}

fn report(reply: &Reply) {
    match reply {
        Reply::Unauthorized => warning!("{UNAUTHORIZED_MESSAGE}"),
        Reply::Message { status, message } => {
            // best-effort: the server may still explain itself on failure
            if !(200..300).contains(status) {
                warning!("server responded with status {status}");
            }
            info!("{message}");
        }
    }
}
