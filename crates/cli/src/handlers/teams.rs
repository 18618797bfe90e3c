use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::Subcommand;
use uuid::Uuid;

use super::{Context, print_json, print_message};

#[derive(Subcommand)]
pub enum TeamsCommand {
    /// Teams you belong to
    Mine,
    /// Create a team for an event's competition; you become its leader
    Create {
        event: Uuid,

        #[arg(long)]
        name: String,
    },
    /// Join a team of an event's competition with its invitation code
    Join {
        event: Uuid,

        #[arg(long)]
        code: String,
    },
    /// Leave your team for an event
    Leave { event: Uuid },
    RemoveMember { team: Uuid, user: Uuid },
    /// Teams entered in a competition (addressed by its event id)
    List { competition: Uuid },
}

pub async fn run(ctx: &Context, command: TeamsCommand) -> Result<()> {
    match command {
        TeamsCommand::Mine => print_json(&ctx.api.my_teams().await?),
        TeamsCommand::Create { event, name } => {
            let view = ctx.loader.load(event, Utc::now()).await?;
            print_json(&ctx.loader.create_team(&view, &name).await?)
        }
        TeamsCommand::Join { event, code } => {
            let message = ctx.loader.join_team(event, &code).await?;
            print_message(message, "Joined team")
        }
        TeamsCommand::Leave { event } => {
            let view = ctx.loader.load(event, Utc::now()).await?;
            let team_id = view
                .participation
                .team_id
                .context("You are not in a team for this event")?;
            let message = ctx.loader.leave_team(event, team_id).await?;
            print_message(message, "Left team")
        }
        TeamsCommand::RemoveMember { team, user } => {
            let message = ctx.api.remove_team_member(team, user).await?;
            ctx.loader.cache().clear();
            print_message(message, "Member removed")
        }
        TeamsCommand::List { competition } => {
            let teams = ctx.api.competition_teams(competition).await?;
            for team in &teams {
                if let Err(e) = team.check_single_leader() {
                    tracing::warn!("{}", e);
                }
            }
            print_json(&teams)
        }
    }
}
