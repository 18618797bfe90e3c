pub mod api;
pub mod config;
pub mod error;
pub mod participation;
pub mod session;
pub mod traits;

pub use api::{ApiClient, Report};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, GENERIC_FAILURE, Result};
pub use participation::{CacheKey, ParticipationCache, ParticipationLoader, ParticipationView};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore, SessionUser, StoredSession};
pub use traits::{ParticipationCommands, ParticipationSource};
