mod analytics;
mod competitions;
mod events;
mod reports;
mod submissions;
mod surveys;
mod teams;
mod users;

use std::sync::Arc;

use domain::dto::QueryParams;
use domain::models::{ApiEnvelope, Page};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, GENERIC_FAILURE, Result};
use crate::session::Session;

pub use reports::Report;

/// Typed wrapper over the EventHub REST API.
///
/// Every call goes through [`ApiClient::execute`], which attaches the bearer token
/// and tears the session down on a 401.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn get_with(&self, path: &str, params: &impl QueryParams) -> RequestBuilder {
        self.request(Method::GET, path).query(&params.query_pairs())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        debug!("{} {}", response.status().as_u16(), response.url().path());
        self.check_session(response.status())?;
        Ok(response)
    }

    /// A 401 ends the session, even when the stored copy cannot be removed.
    fn check_session(&self, status: StatusCode) -> Result<()> {
        if status != StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        warn!("API rejected the session token, signing out");
        if let Err(e) = self.session.teardown() {
            warn!("Failed to clear the stored session: {}", e);
        }
        Err(ClientError::Unauthorized)
    }

    async fn envelope<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<ApiEnvelope<T>> {
        let response = self.execute(builder).await?;
        let status = response.status();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }

    /// Unwraps `data`; a successful envelope without it is an error.
    async fn data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        self.envelope(builder)
            .await?
            .data
            .ok_or(ClientError::EmptyResponse)
    }

    async fn list<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>> {
        Ok(self
            .envelope::<Vec<T>>(builder)
            .await?
            .data
            .unwrap_or_default())
    }

    async fn page<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Page<T>> {
        let envelope = self.envelope::<Vec<T>>(builder).await?;
        Ok(Page::new(
            envelope.data.unwrap_or_default(),
            envelope.pagination,
        ))
    }

    /// For calls whose payload nobody reads. Returns the server message, if any.
    async fn acknowledge(&self, builder: RequestBuilder) -> Result<Option<String>> {
        let response = self.execute(builder).await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() && body.trim().is_empty() {
            return Ok(None);
        }
        Ok(decode_envelope::<serde_json::Value>(status, &body)?.message)
    }

    async fn bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let response = self.execute(builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status, &body));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ApiEnvelope<T>> {
    if !status.is_success() {
        return Err(error_from_body(status, body));
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            message: non_empty(envelope.message).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        });
    }

    Ok(envelope)
}

pub(crate) fn error_from_body(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| non_empty(b.message))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());

    ClientError::ApiError {
        status: status.as_u16(),
        message,
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
