use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use client::ClientError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod config;
mod handlers;

use config::Config;
use handlers::Context;
use handlers::analytics::{AnalyticsCommand, SurveyCommand};
use handlers::events::EventsCommand;
use handlers::judging::{JudgeCommand, JudgesCommand};
use handlers::reports::ReportsCommand;
use handlers::submissions::SubmissionsCommand;
use handlers::teams::TeamsCommand;
use handlers::users::UsersCommand;

#[derive(Parser)]
#[command(name = "eventhub")]
#[command(about = "EventHub events and competitions client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the EventHub API [env: EVENTHUB_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Where the session token is kept [env: EVENTHUB_SESSION_FILE]
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer token and resolve its user
    Login {
        #[arg(long)]
        token: String,

        #[arg(long)]
        user_id: Uuid,
    },
    Logout,
    Whoami,
    #[command(subcommand)]
    Events(EventsCommand),
    #[command(subcommand)]
    Teams(TeamsCommand),
    /// Submit your work for an event's competition
    Submit {
        event: Uuid,

        #[arg(long)]
        url: String,

        #[arg(long)]
        description: String,
    },
    #[command(subcommand)]
    Submissions(SubmissionsCommand),
    /// Ranked results of a competition (addressed by its event id)
    Leaderboard { competition: Uuid },
    #[command(subcommand)]
    Judge(JudgeCommand),
    #[command(subcommand)]
    Judges(JudgesCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Analytics(AnalyticsCommand),
    #[command(subcommand)]
    Survey(SurveyCommand),
    #[command(subcommand)]
    Reports(ReportsCommand),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("eventhub={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        tracing::debug!("{:?}", e);
        let message = match e.downcast_ref::<ClientError>() {
            Some(client_error) => client_error.user_message(),
            None => format!("{:#}", e),
        };
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_overrides(cli.api_url, cli.session_file);
    tracing::debug!("Using API at {}", config.api_url);

    let ctx = Context::new(&config)?;

    match cli.command {
        Commands::Login { token, user_id } => handlers::auth::login(&ctx, token, user_id).await,
        Commands::Logout => handlers::auth::logout(&ctx),
        Commands::Whoami => handlers::auth::whoami(&ctx),
        Commands::Events(command) => handlers::events::run(&ctx, command).await,
        Commands::Teams(command) => handlers::teams::run(&ctx, command).await,
        Commands::Submit {
            event,
            url,
            description,
        } => handlers::submissions::submit(&ctx, event, &url, &description).await,
        Commands::Submissions(command) => handlers::submissions::run(&ctx, command).await,
        Commands::Leaderboard { competition } => {
            handlers::submissions::leaderboard(&ctx, competition).await
        }
        Commands::Judge(command) => handlers::judging::run_judge(&ctx, command).await,
        Commands::Judges(command) => handlers::judging::run_judges(&ctx, command).await,
        Commands::Users(command) => handlers::users::run(&ctx, command).await,
        Commands::Analytics(command) => handlers::analytics::run(&ctx, command).await,
        Commands::Survey(command) => handlers::analytics::run_survey(&ctx, command).await,
        Commands::Reports(command) => handlers::reports::run(&ctx, command).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let event = Uuid::new_v4();
        let id = event.to_string();
        let cli = Cli::try_parse_from([
            "eventhub",
            "submit",
            id.as_str(),
            "--url",
            "https://example.org/demo",
            "--description",
            "Working prototype",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Submit { event: parsed, .. } => assert_eq!(parsed, event),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_parse_promote_with_criteria() {
        let id = Uuid::new_v4().to_string();
        let cli = Cli::try_parse_from([
            "eventhub",
            "events",
            "promote",
            id.as_str(),
            "--team-based",
            "--min-team-size",
            "2",
            "--max-team-size",
            "4",
            "--criterion",
            "Innovation=40",
            "--criterion",
            "Execution=60",
        ])
        .unwrap();

        match cli.command {
            Commands::Events(EventsCommand::Promote { criteria, .. }) => {
                assert_eq!(criteria.len(), 2)
            }
            _ => panic!("expected events promote"),
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = Cli::try_parse_from([
            "eventhub",
            "events",
            "create",
            "--title",
            "Demo",
            "--start",
            "2025-06-01T09:00:00Z",
            "--end",
            "2025-06-01T17:00:00Z",
            "--status",
            "ARCHIVED",
        ]);
        assert!(result.is_err());
    }
}
