pub mod analytics;
pub mod auth;
pub mod events;
pub mod judging;
pub mod reports;
pub mod submissions;
pub mod teams;
pub mod users;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use client::{ApiClient, FileSessionStore, ParticipationLoader, Session};
use serde::Serialize;

use crate::config::Config;

/// Shared handles for one command invocation.
pub struct Context {
    pub api: Arc<ApiClient>,
    pub session: Arc<Session>,
    pub loader: ParticipationLoader<ApiClient>,
}

impl Context {
    pub fn new(config: &Config) -> Result<Self> {
        let store = FileSessionStore::new(&config.session_file);
        let session = Arc::new(Session::init(store).with_context(|| {
            format!(
                "Failed to read session file {}",
                config.session_file.display()
            )
        })?);

        let api = Arc::new(
            ApiClient::new(&config.client_config(), session.clone())
                .context("Failed to build HTTP client")?,
        );
        let loader = ParticipationLoader::new(api.clone(), session.clone());

        Ok(Self {
            api,
            session,
            loader,
        })
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the server's acknowledgement, or `fallback` when it sent none.
pub fn print_message(message: Option<String>, fallback: &str) -> Result<()> {
    print_json(&serde_json::json!({
        "message": message.unwrap_or_else(|| fallback.to_string())
    }))
}

/// Parses `key=value` pairs given on the command line.
pub fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
