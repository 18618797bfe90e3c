use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use domain::dto::NewSubmission;
use domain::models::LeaderboardEntry;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::{Context, print_json};

#[derive(Subcommand)]
pub enum SubmissionsCommand {
    /// Your own submissions, team and individual
    Mine,
    Show { id: Uuid },
    /// Submissions to a competition (addressed by its event id)
    List { competition: Uuid },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Standing {
    rank: usize,
    name: String,
    final_score: Decimal,
}

/// Submits for the event's competition, through your team when it is team-based.
pub async fn submit(ctx: &Context, event: Uuid, url: &str, description: &str) -> Result<()> {
    let view = ctx.loader.load(event, Utc::now()).await?;
    let created = ctx
        .loader
        .submit(&view, &NewSubmission::new(url, description))
        .await?;
    print_json(&created)
}

pub async fn leaderboard(ctx: &Context, competition: Uuid) -> Result<()> {
    let entries = ctx.api.leaderboard(competition).await?;
    print_json(&standings(&entries))
}

fn standings(entries: &[LeaderboardEntry]) -> Vec<Standing> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Standing {
            rank: i + 1,
            name: entry.display_name(),
            final_score: entry.final_score,
        })
        .collect()
}

pub async fn run(ctx: &Context, command: SubmissionsCommand) -> Result<()> {
    match command {
        SubmissionsCommand::Mine => print_json(&ctx.api.my_submissions().await?),
        SubmissionsCommand::Show { id } => print_json(&ctx.api.submission_detail(id).await?),
        SubmissionsCommand::List { competition } => {
            print_json(&ctx.api.competition_submissions(competition).await?)
        }
    }
}
