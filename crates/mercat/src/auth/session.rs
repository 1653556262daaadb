//! The session store: single source of truth for authentication state.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::error::Error;

use super::storage::{MemoryStorage, PersistedSession, SessionStorage};
use super::token::AuthToken;

/// Client-held authentication state: a bearer token and a user role.
///
/// The session is constructed once at application wiring time and handed to
/// the request client and route guard; there is no ambient singleton.
/// Sessions are cheap to clone (they share an internal `Arc`) and behave as
/// a single-writer, many-reader cell: `login`/`logout` mutate, everything
/// else reads the current state.
///
/// Durable storage keeps the token across restarts: [`Session::login`]
/// persists, [`Session::logout`] clears, and [`Session::initialize`] restores
/// at startup.
///
/// # Example
///
/// ```no_run
/// use mercat::{FileStorage, Session};
///
/// let session = Session::new(Box::new(FileStorage::new("/tmp/session.json")));
/// session.initialize();
/// if session.is_authenticated() {
///     println!("already logged in");
/// }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: RwLock<SessionState>,
    storage: Box<dyn SessionStorage>,
}

#[derive(Default)]
struct SessionState {
    token: Option<AuthToken>,
    role: Option<String>,
}

impl Session {
    /// Create an empty session backed by the given durable storage.
    ///
    /// The session starts unauthenticated; call [`Session::initialize`] to
    /// restore a previously persisted login.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(SessionState::default()),
                storage,
            }),
        }
    }

    /// Create a session with in-memory storage that forgets on drop.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Restore a persisted login, if one exists.
    ///
    /// One synchronous storage read, intended to run once at startup. A
    /// missing, corrupt, or unreadable store leaves the session empty; that
    /// is logged but never fatal.
    pub fn initialize(&self) {
        match self.inner.storage.load() {
            Ok(Some(persisted)) => {
                let mut state = self.write_state();
                state.token = Some(AuthToken::new(persisted.token));
                state.role = persisted.role;
                debug!("restored persisted session");
            }
            Ok(None) => {
                debug!("no persisted session");
            }
            Err(e) => {
                warn!(error = %e, "failed to load persisted session, starting empty");
            }
        }
    }

    /// Establish a session from a token obtained via a successful login.
    ///
    /// Sets token and role together and persists them. The token is trusted
    /// as-is; no format validation is performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session could not be persisted. The in-memory
    /// state is updated regardless, so the current process stays logged in.
    pub fn login(&self, token: AuthToken, role: Option<String>) -> Result<(), Error> {
        {
            let mut state = self.write_state();
            state.token = Some(token.clone());
            state.role = role.clone();
        }

        self.inner.storage.save(&PersistedSession {
            token: token.as_str().to_string(),
            role,
        })?;

        info!("session established");
        Ok(())
    }

    /// Clear the session and remove it from durable storage.
    ///
    /// Idempotent: logging out of an empty session is a no-op. An
    /// authenticated request already in flight is not cancelled.
    pub fn logout(&self) -> Result<(), Error> {
        {
            let mut state = self.write_state();
            state.token = None;
            state.role = None;
        }

        self.inner.storage.clear()?;

        info!("session cleared");
        Ok(())
    }

    /// Returns the current token, if authenticated.
    pub fn token(&self) -> Option<AuthToken> {
        self.read_state().token.clone()
    }

    /// Returns the current role, if known.
    pub fn role(&self) -> Option<String> {
        self.read_state().role.clone()
    }

    /// Whether a token is currently present.
    pub fn is_authenticated(&self) -> bool {
        self.read_state().token.is_some()
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner.state.read().expect("session lock poisoned")
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.inner.state.write().expect("session lock poisoned")
    }
}

// Custom Debug impl that hides the token
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("role", &state.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryStorage;

    #[test]
    fn starts_empty() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn login_sets_token_and_role_together() {
        let session = Session::in_memory();
        session
            .login(AuthToken::new("T1"), Some("admin".to_string()))
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token().unwrap().as_str(), "T1");
        assert_eq!(session.role().as_deref(), Some("admin"));
    }

    #[test]
    fn logout_clears_state_and_storage() {
        let storage = Box::new(MemoryStorage::new());
        let session = Session::new(storage);
        session.login(AuthToken::new("T1"), None).unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }

    #[test]
    fn logout_removes_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::new(Box::new(crate::FileStorage::new(&path)));
        session.login(AuthToken::new("T1"), None).unwrap();
        session.logout().unwrap();

        // A restart after logout must not restore anything
        let restarted = Session::new(Box::new(crate::FileStorage::new(&path)));
        restarted.initialize();
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn logout_twice_is_same_as_once() {
        let session = Session::in_memory();
        session.login(AuthToken::new("T1"), None).unwrap();
        session.logout().unwrap();
        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn initialize_restores_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::new(Box::new(crate::FileStorage::new(&path)));
        session
            .login(AuthToken::new("abc"), Some("user".to_string()))
            .unwrap();

        // Simulate a restart: a fresh session over the same storage
        let restarted = Session::new(Box::new(crate::FileStorage::new(&path)));
        assert!(!restarted.is_authenticated());
        restarted.initialize();

        assert_eq!(restarted.token().unwrap().as_str(), "abc");
        assert_eq!(restarted.role().as_deref(), Some("user"));
    }

    #[test]
    fn initialize_tolerates_corrupt_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let session = Session::new(Box::new(crate::FileStorage::new(&path)));
        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_never_prints_token() {
        let session = Session::in_memory();
        session
            .login(AuthToken::new("super-secret"), Some("admin".to_string()))
            .unwrap();
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("admin"));
    }
}
