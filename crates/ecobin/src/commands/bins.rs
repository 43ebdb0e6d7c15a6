//! Smart-bin telemetry command handler.

use tabled::Tabled;

use ecobin_core::{SmartBin, SyncConfig, Synchronizer};

use crate::cli::{BinsArgs, GlobalOpts, OutputFormat};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct BinRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "FILL")]
    fill: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn to_row(bin: &SmartBin, color: bool) -> BinRow {
    BinRow {
        id: bin.id.clone(),
        name: bin.name.clone(),
        location: bin.location.clone(),
        fill: output::fill_cell(bin.fill_pct, color && bin.fill_pct >= SmartBin::FILL_WARN_PCT),
        status: bin.status.to_string(),
    }
}

pub async fn handle(
    config: SyncConfig,
    args: BinsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let bins = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.refresh().await?;
        if let Some(message) = sync.store().error() {
            return Err(ecobin_core::CoreError::Api {
                message,
                status: None,
            });
        }
        Ok(sync.store().bins_snapshot())
    })
    .await?;

    let filtered: Vec<SmartBin> = bins
        .iter()
        .filter(|bin| !args.attention || bin.needs_attention())
        .cloned()
        .collect();

    let color = matches!(global.output, OutputFormat::Table) && output::should_color(&global.color);
    let rows = filtered.iter().map(|bin| to_row(bin, color)).collect();
    let out = output::render_rows(&global.output, &filtered, rows, |bin| bin.id.clone());
    output::emit(&out, global.quiet);
    Ok(())
}
