//! Personal recycling history command handler.

use tabled::Tabled;

use ecobin_core::{SyncConfig, Synchronizer, WasteLog};

use crate::cli::{GlobalOpts, HistoryArgs};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "WHEN")]
    when: String,
    #[tabled(rename = "TYPE")]
    waste_type: String,
    #[tabled(rename = "ITEMS")]
    items: i64,
    #[tabled(rename = "POINTS")]
    points: i64,
}

fn to_row(log: &WasteLog) -> HistoryRow {
    HistoryRow {
        when: output::timestamp_cell(log.timestamp),
        waste_type: log.waste_type.clone(),
        items: log.waste_count,
        points: log.points_earned,
    }
}

pub async fn handle(
    config: SyncConfig,
    args: HistoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let config = SyncConfig {
        history_limit: args.limit,
        ..config
    };

    let logs = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.refresh().await?;
        if let Some(message) = sync.store().error() {
            return Err(ecobin_core::CoreError::Api {
                message,
                status: None,
            });
        }
        Ok(sync.store().logs_snapshot())
    })
    .await?;

    let rows = logs.iter().map(to_row).collect();
    let out = output::render_rows(&global.output, &logs, rows, |log| log.id.clone());
    output::emit(&out, global.quiet);
    Ok(())
}
