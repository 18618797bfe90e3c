use std::collections::BTreeMap;

use anyhow::Result;
use clap::Subcommand;
use domain::dto::SurveyResponseRequest;
use serde::Serialize;
use uuid::Uuid;

use super::{Context, parse_pair, print_json, print_message};

#[derive(Subcommand)]
pub enum AnalyticsCommand {
    Kpis,
    /// New users per month
    Growth,
    /// Registrations against submissions per event
    Engagement,
    /// Aggregated survey answers for an event
    Survey { event: Uuid },
}

#[derive(Subcommand)]
pub enum SurveyCommand {
    /// The standard post-event questionnaire
    Questions,
    Respond {
        event: Uuid,

        /// QUESTION_ID=ANSWER, repeatable
        #[arg(long = "answer", value_parser = parse_pair)]
        answers: Vec<(String, String)>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EngagementRow {
    title: String,
    registration_count: u64,
    submission_count: u64,
    conversion_percent: Option<f64>,
}

pub async fn run(ctx: &Context, command: AnalyticsCommand) -> Result<()> {
    match command {
        AnalyticsCommand::Kpis => print_json(&ctx.api.admin_kpis().await?),
        AnalyticsCommand::Growth => print_json(&ctx.api.user_growth().await?),
        AnalyticsCommand::Engagement => {
            let rows: Vec<EngagementRow> = ctx
                .api
                .event_engagement()
                .await?
                .into_iter()
                .map(|e| EngagementRow {
                    conversion_percent: e.conversion_percent(),
                    title: e.title,
                    registration_count: e.registration_count,
                    submission_count: e.submission_count,
                })
                .collect();
            print_json(&rows)
        }
        AnalyticsCommand::Survey { event } => print_json(&ctx.api.survey_results(event).await?),
    }
}

pub async fn run_survey(ctx: &Context, command: SurveyCommand) -> Result<()> {
    match command {
        SurveyCommand::Questions => print_json(&ctx.api.standard_survey().await?),
        SurveyCommand::Respond { event, answers } => {
            let questions = ctx.api.standard_survey().await?;
            let response = SurveyResponseRequest {
                answers: answers.into_iter().collect::<BTreeMap<_, _>>(),
            };
            let message = ctx
                .api
                .respond_to_survey(event, &response, &questions)
                .await?;
            print_message(message, "Thank you for your feedback")
        }
    }
}
