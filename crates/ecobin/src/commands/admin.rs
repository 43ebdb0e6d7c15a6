//! Admin command handlers: bin reset and system-wide activity audit.

use tabled::Tabled;

use ecobin_core::{ActivityLog, SyncConfig, Synchronizer};

use crate::cli::{AdminArgs, AdminCommand, GlobalOpts};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "WHEN")]
    when: String,
    #[tabled(rename = "USER")]
    user: String,
    #[tabled(rename = "TYPE")]
    waste_type: String,
    #[tabled(rename = "ITEMS")]
    items: i64,
    #[tabled(rename = "POINTS")]
    points: i64,
}

fn to_row(entry: &ActivityLog) -> ActivityRow {
    ActivityRow {
        when: output::timestamp_cell(entry.log.timestamp),
        user: entry.user_name.clone(),
        waste_type: entry.log.waste_type.clone(),
        items: entry.log.waste_count,
        points: entry.log.points_earned,
    }
}

pub async fn handle(
    config: SyncConfig,
    args: AdminArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AdminCommand::ResetBin { bin_id } => reset_bin(config, bin_id, global).await,
        AdminCommand::Logs { limit } => logs(config, limit, global).await,
    }
}

async fn reset_bin(config: SyncConfig, bin_id: i64, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm(&format!("Reset fill level of bin {bin_id}?"), global.yes)? {
        output::emit("Aborted", global.quiet);
        return Ok(());
    }

    let message = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.reset_bin(bin_id).await
    })
    .await?;

    output::emit(&message, global.quiet);
    Ok(())
}

async fn logs(config: SyncConfig, limit: usize, global: &GlobalOpts) -> Result<(), CliError> {
    let entries = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.recent_logs(limit).await
    })
    .await?;

    let rows = entries.iter().map(to_row).collect();
    let out = output::render_rows(&global.output, &entries, rows, |entry| {
        entry.log.id.clone()
    });
    output::emit(&out, global.quiet);
    Ok(())
}
