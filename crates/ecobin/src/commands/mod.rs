//! Command dispatch: bridges CLI args -> core Synchronizer -> output formatting.

pub mod admin;
pub mod auth;
pub mod bins;
pub mod config_cmd;
pub mod history;
pub mod leaderboard;
pub mod stats;
pub mod util;
pub mod watch;

use ecobin_core::SyncConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    config: SyncConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(config, args, global).await,
        Command::Logout => auth::logout(config, global),
        Command::Register(args) => auth::register(config, args, global).await,
        Command::Stats => stats::handle(config, global).await,
        Command::History(args) => history::handle(config, args, global).await,
        Command::Leaderboard(args) => leaderboard::handle(config, args, global).await,
        Command::Bins(args) => bins::handle(config, args, global).await,
        Command::Watch(args) => watch::handle(config, args, global).await,
        Command::Admin(args) => admin::handle(config, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
