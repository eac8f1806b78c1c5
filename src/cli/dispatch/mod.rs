use crate::cli::{actions::Action, commands, globals::GlobalArgs};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Map validated CLI matches to an action and the global options it runs with.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let state_file = matches
        .get_one::<PathBuf>(commands::ARG_STATE_FILE)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(commands::DEFAULT_STATE_FILE));

    let mut globals = GlobalArgs::new(state_file);
    if let Some(delay) = matches.get_one::<u64>(commands::ARG_LOGIN_DELAY_MS) {
        globals.set_login_delay(Duration::from_millis(*delay));
    }

    let action = match matches.subcommand() {
        Some(("status", _)) => Action::Status,
        Some(("logout", _)) => Action::Logout,
        Some(("login", sub_m)) => Action::Login {
            email: sub_m
                .get_one::<String>("email")
                .cloned()
                .context("missing required argument: --email")?,
            password: sub_m
                .get_one::<String>("password")
                .cloned()
                .map(SecretString::from)
                .context("missing required argument: --password")?,
        },
        Some(("visit", sub_m)) => Action::Visit {
            path: sub_m
                .get_one::<String>("path")
                .cloned()
                .context("missing required argument: <path>")?,
        },
        Some((name, _)) => return Err(anyhow!("unknown subcommand: {name}")),
        None => return Err(anyhow!("missing subcommand")),
    };

    Ok((action, globals))
}
