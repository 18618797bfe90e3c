use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use domain::models::{RoleName, User};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: RoleName,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.name,
        }
    }
}

/// What survives between runs: the bearer token and, once known, who it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>>;
    fn save(&self, session: &StoredSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Process-wide session. `init` restores the persisted token, `teardown` drops it
/// from memory and storage (logout, or any 401 from the API).
pub struct Session {
    store: Box<dyn SessionStore>,
    state: RwLock<Option<StoredSession>>,
}

impl Session {
    pub fn init(store: impl SessionStore + 'static) -> Result<Self> {
        let state = store.load()?;
        debug!("Session initialised (signed in: {})", state.is_some());

        Ok(Self {
            store: Box::new(store),
            state: RwLock::new(state),
        })
    }

    pub fn anonymous() -> Self {
        Self {
            store: Box::new(MemorySessionStore::new()),
            state: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.token.clone())
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.read().as_ref().and_then(|session| session.user.clone())
    }

    /// Id of the signed-in user, if the profile has been resolved.
    pub fn viewer(&self) -> Option<Uuid> {
        self.read()
            .as_ref()
            .and_then(|session| session.user.as_ref().map(|user| user.id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn sign_in(&self, token: impl Into<String>, user: Option<SessionUser>) -> Result<()> {
        let session = StoredSession {
            token: token.into(),
            user,
        };
        self.store.save(&session)?;
        *self.write() = Some(session);
        info!("Signed in");
        Ok(())
    }

    pub fn set_user(&self, user: SessionUser) -> Result<()> {
        let mut state = self.write();
        if let Some(session) = state.as_mut() {
            session.user = Some(user);
            self.store.save(session)?;
        }
        Ok(())
    }

    pub fn teardown(&self) -> Result<()> {
        *self.write() = None;
        self.store.clear()?;
        info!("Session cleared");
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<StoredSession>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<StoredSession>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
