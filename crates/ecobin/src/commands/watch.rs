//! Live dashboard: arm the background poller and print each refresh.

use std::time::Duration;

use owo_colors::OwoColorize;

use ecobin_core::{DataStore, SmartBin, SyncConfig, Synchronizer};

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

fn summary_line(store: &DataStore) -> String {
    let points = store
        .identity()
        .map_or(0, |user| user.current_points);
    let bins = store.bins_snapshot();
    let attention = bins.iter().filter(|bin| bin.needs_attention()).count();
    let stamp = store
        .last_refresh()
        .map_or_else(|| "-".to_owned(), |t| t.format("%H:%M:%S").to_string());

    format!(
        "[{stamp}] points: {points}  bins: {} ({attention} need attention)  activity: {} entries",
        bins.len(),
        store.logs_snapshot().len(),
    )
}

fn attention_lines(bins: &[SmartBin], color: bool) -> Vec<String> {
    bins.iter()
        .filter(|bin| bin.needs_attention())
        .map(|bin| {
            let line = format!("  ! {} at {}% ({})", bin.name, bin.fill_pct, bin.status);
            if color { line.yellow().to_string() } else { line }
        })
        .collect()
}

pub async fn handle(
    config: SyncConfig,
    args: WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let config = match args.interval {
        Some(secs) => SyncConfig {
            refresh_interval: Duration::from_secs(secs),
            ..config
        },
        None => config,
    };

    let sync = Synchronizer::new(config)?;
    if sync.restore().is_none() {
        return Err(CliError::NotLoggedIn);
    }

    let color = output::should_color(&global.color);
    let store = sync.store().clone();
    let mut refreshes = store.subscribe_last_refresh();
    let mut errors = store.subscribe_error();

    sync.start();
    output::emit("Watching (press Ctrl-C to stop)", global.quiet);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,

            changed = refreshes.changed() => {
                if changed.is_err() {
                    break;
                }
                output::emit(&summary_line(&store), global.quiet);
                for line in attention_lines(&store.bins_snapshot(), color) {
                    output::emit(&line, global.quiet);
                }
            }

            changed = errors.changed() => {
                if changed.is_err() {
                    break;
                }
                let banner = errors.borrow_and_update().clone();
                if let Some(message) = banner {
                    eprintln!("refresh failed: {message}");
                }
            }
        }
    }

    sync.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobin_core::BinStatus;

    fn bin(fill_pct: u8, status: BinStatus) -> SmartBin {
        SmartBin {
            id: "1".into(),
            name: "Library North".into(),
            location: "Campus Location".into(),
            max_capacity: 60.0,
            fill_pct,
            status,
            battery_pct: 85,
        }
    }

    #[test]
    fn only_bins_needing_attention_are_listed() {
        let bins = vec![bin(20, BinStatus::Active), bin(90, BinStatus::Active)];
        let lines = attention_lines(&bins, false);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("90%"));
    }
}
