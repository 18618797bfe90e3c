use anyhow::{Context as _, Result};
use clap::Subcommand;
use domain::dto::{CreateJudgeRequest, EvaluationRequest};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{Context, parse_pair, print_json, print_message};

#[derive(Subcommand)]
pub enum JudgeCommand {
    /// Competitions assigned to you and what awaits evaluation
    Dashboard,
    /// Score a submission against its competition's criteria
    Evaluate {
        submission: Uuid,

        /// Event the competition belongs to
        #[arg(long)]
        event: Uuid,

        /// CRITERION=SCORE, one per judging criterion
        #[arg(long = "score", value_parser = parse_score)]
        scores: Vec<(String, Decimal)>,

        #[arg(long, default_value = "")]
        comments: String,
    },
}

#[derive(Subcommand)]
pub enum JudgesCommand {
    /// Judges assigned to a competition (addressed by its event id)
    List { competition: Uuid },
    Assign { competition: Uuid, judge: Uuid },
    Remove { competition: Uuid, judge: Uuid },
    /// Create a judge account
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
}

pub async fn run_judge(ctx: &Context, command: JudgeCommand) -> Result<()> {
    match command {
        JudgeCommand::Dashboard => print_json(&ctx.api.judge_dashboard().await?),
        JudgeCommand::Evaluate {
            submission,
            event,
            scores,
            comments,
        } => {
            let event = ctx.api.get_event(event).await?;
            let competition = event
                .competition
                .with_context(|| format!("\"{}\" is not a competition", event.title))?;

            let evaluation = EvaluationRequest {
                scores: scores.into_iter().collect(),
                comments,
            };
            let message = ctx
                .api
                .submit_evaluation(submission, &evaluation, &competition.judging_criteria)
                .await?;
            print_message(message, "Evaluation submitted")
        }
    }
}

pub async fn run_judges(ctx: &Context, command: JudgesCommand) -> Result<()> {
    match command {
        JudgesCommand::List { competition } => {
            print_json(&ctx.api.competition_judges(competition).await?)
        }
        JudgesCommand::Assign { competition, judge } => {
            let message = ctx.api.assign_judge(competition, judge).await?;
            print_message(message, "Judge assigned")
        }
        JudgesCommand::Remove { competition, judge } => {
            let message = ctx.api.remove_judge(competition, judge).await?;
            print_message(message, "Judge removed")
        }
        JudgesCommand::Create {
            email,
            password,
            first_name,
            last_name,
        } => {
            let request = CreateJudgeRequest {
                email,
                password,
                first_name,
                last_name,
            };
            print_json(&ctx.api.create_judge(&request).await?)
        }
    }
}

fn parse_score(raw: &str) -> std::result::Result<(String, Decimal), String> {
    let (name, value) = parse_pair(raw)?;
    let score = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", value))?;
    Ok((name, score))
}
