use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use client::ParticipationView;
use domain::dto::{
    CreateCompetitionRequest, CreateEventRequest, CriterionInput, EventFilters,
    UpdateCompetitionRequest, UpdateEventRequest,
};
use domain::models::{Event, EventStatus, PaginationMeta};
use domain::{EventPhase, ParticipationAction};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::{Context, parse_pair, print_json, print_message};

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List events with their current phase
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show an event with the viewer's participation and available actions
    Show { id: Uuid },
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// RFC 3339, e.g. 2025-06-01T09:00:00Z
        #[arg(long)]
        start: DateTime<Utc>,

        #[arg(long)]
        end: DateTime<Utc>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long, default_value = "DRAFT")]
        status: EventStatus,

        #[arg(long)]
        max_participants: Option<u32>,
    },
    Update {
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        start: Option<DateTime<Utc>>,

        #[arg(long)]
        end: Option<DateTime<Utc>>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        status: Option<EventStatus>,

        #[arg(long)]
        max_participants: Option<u32>,
    },
    Delete { id: Uuid },
    Register { id: Uuid },
    /// Registrations of an event, or your own when no event is given
    Registrations { id: Option<Uuid> },
    /// Turn an event into a judged competition
    Promote {
        id: Uuid,

        #[arg(long)]
        team_based: bool,

        #[arg(long)]
        min_team_size: Option<u32>,

        #[arg(long)]
        max_team_size: Option<u32>,

        /// NAME=MAX_SCORE, repeatable
        #[arg(long = "criterion", value_parser = parse_criterion)]
        criteria: Vec<CriterionInput>,
    },
    /// Adjust a competition's team rules or criteria
    UpdateCompetition {
        id: Uuid,

        #[arg(long)]
        team_based: Option<bool>,

        #[arg(long)]
        min_team_size: Option<u32>,

        #[arg(long)]
        max_team_size: Option<u32>,

        /// NAME=MAX_SCORE, repeatable; replaces all criteria
        #[arg(long = "criterion", value_parser = parse_criterion)]
        criteria: Vec<CriterionInput>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventRow<'a> {
    #[serde(flatten)]
    event: &'a Event,
    phase: EventPhase,
}

#[derive(Serialize)]
struct EventList<'a> {
    items: Vec<EventRow<'a>>,
    pagination: Option<&'a PaginationMeta>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDetails<'a> {
    #[serde(flatten)]
    view: &'a ParticipationView,
    phase: EventPhase,
    actions: Vec<ParticipationAction>,
}

pub async fn run(ctx: &Context, command: EventsCommand) -> Result<()> {
    match command {
        EventsCommand::List {
            search,
            page,
            limit,
        } => {
            let filters = EventFilters {
                search,
                page,
                limit,
            };
            let events = ctx.api.list_events(&filters).await?;
            let now = Utc::now();

            print_json(&EventList {
                items: events
                    .items
                    .iter()
                    .map(|event| EventRow {
                        event,
                        phase: EventPhase::at(event, now),
                    })
                    .collect(),
                pagination: events.pagination.as_ref(),
            })
        }
        EventsCommand::Show { id } => {
            let now = Utc::now();
            let view = ctx.loader.load(id, now).await?;

            print_json(&EventDetails {
                phase: EventPhase::at(&view.event, now),
                actions: view.participation.actions(),
                view: &view,
            })
        }
        EventsCommand::Create {
            title,
            description,
            start,
            end,
            location,
            status,
            max_participants,
        } => {
            let request = CreateEventRequest {
                title,
                description,
                start_time: start,
                end_time: end,
                location,
                status,
                max_participants,
            };
            print_json(&ctx.api.create_event(&request).await?)
        }
        EventsCommand::Update {
            id,
            title,
            description,
            start,
            end,
            location,
            status,
            max_participants,
        } => {
            let request = UpdateEventRequest {
                title,
                description,
                start_time: start,
                end_time: end,
                location,
                status,
                max_participants,
            };
            if request.is_empty() {
                bail!("Nothing to update");
            }
            print_json(&ctx.api.update_event(id, &request).await?)
        }
        EventsCommand::Delete { id } => {
            let message = ctx.api.delete_event(id).await?;
            print_message(message, "Event deleted")
        }
        EventsCommand::Register { id } => print_json(&ctx.loader.register(id).await?),
        EventsCommand::Registrations { id: Some(id) } => {
            print_json(&ctx.api.event_registrations(id).await?)
        }
        EventsCommand::Registrations { id: None } => print_json(&ctx.api.my_registrations().await?),
        EventsCommand::Promote {
            id,
            team_based,
            min_team_size,
            max_team_size,
            criteria,
        } => {
            let request =
                CreateCompetitionRequest::new(team_based, min_team_size, max_team_size, criteria);
            let competition = ctx.api.promote_to_competition(id, &request).await?;
            ctx.loader.cache().invalidate_event(id);
            print_json(&competition)
        }
        EventsCommand::UpdateCompetition {
            id,
            team_based,
            min_team_size,
            max_team_size,
            criteria,
        } => {
            let request = UpdateCompetitionRequest {
                is_team_based: team_based,
                min_team_size,
                max_team_size,
                judging_criteria: (!criteria.is_empty()).then_some(criteria),
            };
            let competition = ctx.api.update_competition(id, &request).await?;
            ctx.loader.cache().invalidate_event(id);
            print_json(&competition)
        }
    }
}

fn parse_criterion(raw: &str) -> std::result::Result<CriterionInput, String> {
    let (name, score) = parse_pair(raw)?;
    let max_score: Decimal = score
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", score))?;
    Ok(CriterionInput::new(name, max_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_criterion() {
        let criterion = parse_criterion("Code quality=25").unwrap();
        assert_eq!(criterion.name, "Code quality");
        assert_eq!(criterion.max_score, Decimal::from(25));

        assert!(parse_criterion("Design=lots").is_err());
    }
}
