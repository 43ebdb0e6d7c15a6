//! Personal stats command handler.

use ecobin_core::{SyncConfig, Synchronizer, User};

use crate::cli::GlobalOpts;
use crate::commands::util;
use crate::error::CliError;
use crate::output;

fn detail(user: &User) -> String {
    format!(
        "{}  (@{})\n\
         Role:            {}\n\
         Points:          {}\n\
         Items recycled:  {}\n\
         CO2 saved:       {}",
        user.full_name,
        user.username,
        user.role,
        user.current_points,
        user.total_recycled,
        output::carbon_cell(user.carbon_saved_g),
    )
}

pub async fn handle(config: SyncConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let user = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.refresh().await?;
        if let Some(message) = sync.store().error() {
            return Err(ecobin_core::CoreError::Api {
                message,
                status: None,
            });
        }
        sync.store()
            .identity()
            .ok_or(ecobin_core::CoreError::NotLoggedIn)
    })
    .await?;

    let out = output::render_record(&global.output, user.as_ref(), detail, |u| {
        u.username.clone()
    });
    output::emit(&out, global.quiet);
    Ok(())
}
