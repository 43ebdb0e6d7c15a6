//! Shared helpers for command handlers.

use std::io::IsTerminal;

use secrecy::SecretString;

use ecobin_core::{CoreError, Synchronizer};

use crate::error::CliError;

/// Fail unless a session was restored onto the store.
pub fn require_session(sync: &Synchronizer) -> Result<(), CoreError> {
    if sync.store().identity().is_none() {
        return Err(CoreError::NotLoggedIn);
    }
    Ok(())
}

/// Resolve a password from the flag or an interactive prompt.
pub fn resolve_password(flag: Option<String>) -> Result<SecretString, CliError> {
    if let Some(password) = flag {
        return Ok(SecretString::from(password));
    }
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(SecretString::from(password))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal on stdin there is nobody to ask, so the caller gets
/// a hard error pointing at `--yes`.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.to_owned(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
