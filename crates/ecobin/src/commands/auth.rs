//! Session command handlers: login, logout, register.

use ecobin_core::{SyncConfig, Synchronizer};

use crate::cli::{GlobalOpts, LoginArgs, RegisterArgs};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn login(
    config: SyncConfig,
    args: LoginArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let password = util::resolve_password(args.password)?;

    let sync = Synchronizer::new(config)?;
    let user = sync.login(&args.username, &password).await?;

    let out = output::render_record(
        &global.output,
        user.as_ref(),
        |u| format!("Logged in as {} ({})", u.full_name, u.role),
        |u| u.username.clone(),
    );
    output::emit(&out, global.quiet);
    Ok(())
}

pub fn logout(config: SyncConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let sync = Synchronizer::new(config)?;
    let restored = sync.restore();
    sync.logout();

    match restored {
        Some(user) => output::emit(&format!("Logged out {}", user.username), global.quiet),
        None => output::emit("No active session", global.quiet),
    }
    Ok(())
}

pub async fn register(
    config: SyncConfig,
    args: RegisterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let password = util::resolve_password(args.password)?;

    let sync = Synchronizer::new(config)?;
    let user_id = sync
        .register(&args.full_name, &args.username, &password, &args.rfid_uid)
        .await?;

    output::emit(
        &format!(
            "Created account '{}' (id {user_id}). Log in with: ecobin login {}",
            args.username, args.username
        ),
        global.quiet,
    );
    Ok(())
}
