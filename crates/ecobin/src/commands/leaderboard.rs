//! Campus leaderboard command handler.

use tabled::Tabled;

use ecobin_core::{SyncConfig, Synchronizer, User};

use crate::cli::{GlobalOpts, LeaderboardArgs};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "POINTS")]
    points: i64,
    #[tabled(rename = "ITEMS")]
    items: i64,
    #[tabled(rename = "CO2 SAVED")]
    carbon: String,
}

fn to_row(rank: usize, user: &User) -> LeaderboardRow {
    LeaderboardRow {
        rank,
        name: user.full_name.clone(),
        points: user.current_points,
        items: user.total_recycled,
        carbon: output::carbon_cell(user.carbon_saved_g),
    }
}

pub async fn handle(
    config: SyncConfig,
    args: LeaderboardArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let config = SyncConfig {
        leaderboard_limit: args.limit,
        ..config
    };

    let leaders = Synchronizer::oneshot(config, |sync| async move {
        util::require_session(&sync)?;
        sync.refresh().await?;
        if let Some(message) = sync.store().error() {
            return Err(ecobin_core::CoreError::Api {
                message,
                status: None,
            });
        }
        Ok(sync.store().leaderboard_snapshot())
    })
    .await?;

    // The backend returns rows sorted by points, so rank is positional.
    let rows = leaders
        .iter()
        .enumerate()
        .map(|(i, user)| to_row(i + 1, user))
        .collect();
    let out = output::render_rows(&global.output, &leaders, rows, |user| {
        user.username.clone()
    });
    output::emit(&out, global.quiet);
    Ok(())
}
