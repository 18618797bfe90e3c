use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Session expired or invalid, please log in again")]
    Unauthorized,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Response carried no data")]
    EmptyResponse,

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Domain error: {0}")]
    DomainError(#[from] domain::DomainError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text for a dismissible notification: the server's message when there is one.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::Unauthorized | Self::NotSignedIn => self.to_string(),
            Self::ValidationError(errors) => domain::error::field_messages(errors).join("; "),
            Self::DomainError(error) => error.field_messages().join("; "),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
