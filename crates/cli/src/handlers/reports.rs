use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use domain::dto::{EventReportFilters, UserReportFilters};
use domain::models::{EventStatus, RoleName, UserStatus};
use uuid::Uuid;

use super::{Context, print_json};

#[derive(Subcommand)]
pub enum ReportsCommand {
    Users {
        #[arg(long)]
        role: Option<RoleName>,

        #[arg(long)]
        status: Option<UserStatus>,

        /// YYYY-MM-DD
        #[arg(long)]
        created_after: Option<NaiveDate>,

        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    Events {
        #[arg(long)]
        status: Option<EventStatus>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// Detailed export of one event
    Event {
        id: Uuid,

        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

pub async fn run(ctx: &Context, command: ReportsCommand) -> Result<()> {
    let (report, output) = match command {
        ReportsCommand::Users {
            role,
            status,
            created_after,
            output,
        } => {
            let filters = UserReportFilters {
                role,
                status,
                created_after,
            };
            (ctx.api.users_report(&filters).await?, output)
        }
        ReportsCommand::Events {
            status,
            start_date,
            end_date,
            output,
        } => {
            let filters = EventReportFilters {
                status,
                start_date,
                end_date,
            };
            (ctx.api.events_report(&filters).await?, output)
        }
        ReportsCommand::Event { id, output } => (ctx.api.event_report(id).await?, output),
    };

    tokio::fs::create_dir_all(&output)
        .await
        .with_context(|| format!("Cannot create {}", output.display()))?;
    let path = report.write_to(&output).await?;

    print_json(&serde_json::json!({
        "file": path.display().to_string(),
        "bytes": report.bytes.len(),
    }))
}
