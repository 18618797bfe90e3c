use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use client::{ClientConfig, DEFAULT_BASE_URL};

pub const DEFAULT_SESSION_FILE: &str = ".eventhub-session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match lookup("EVENTHUB_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse()
                .context("EVENTHUB_TIMEOUT_SECS must be a number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: lookup("EVENTHUB_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            session_file: lookup("EVENTHUB_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, session_file: Option<PathBuf>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(session_file) = session_file {
            self.session_file = session_file;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout)
    }
}
