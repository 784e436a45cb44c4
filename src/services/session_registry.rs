use crate::error::ApiError;
use crate::services::PickerSession;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Picker session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an ID with 48 bits of entropy (12 hex chars)
    pub fn generate() -> Self {
        use rand::Rng;
        let high = rand::thread_rng().gen::<u32>();
        let low = rand::thread_rng().gen::<u16>();
        Self(format!("{high:08X}{low:04X}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for picker session storage
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Store a new session under a fresh ID
    async fn insert(&self, session: PickerSession) -> Result<SessionId, ApiError>;

    /// Find a session by ID (a snapshot; use `update` to change it)
    async fn find(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError>;

    /// Run `f` on a stored session while holding it exclusively
    async fn update<F, T>(&self, id: &SessionId, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut PickerSession) -> T + Send,
        T: Send;

    /// Drop a session, returning it if it existed
    async fn remove(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError>;
}

/// Default maximum number of sessions kept in memory
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct SessionStore {
    sessions: HashMap<SessionId, PickerSession>,
    /// Session IDs by insertion time (oldest first)
    insertion_order: VecDeque<SessionId>,
}

/// In-memory session storage.
///
/// Holds at most `max_sessions` sessions, open or finished. Inserting into a
/// full store evicts the oldest session.
pub struct InMemorySessions {
    store: Arc<RwLock<SessionStore>>,
    max_sessions: usize,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }

    /// Store holding at most `max_sessions` sessions (at least one).
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionStore {
                sessions: HashMap::new(),
                insertion_order: VecDeque::new(),
            })),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.sessions.is_empty()
    }
}

impl Default for InMemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessions {
    async fn insert(&self, session: PickerSession) -> Result<SessionId, ApiError> {
        let mut store = self.store.write().await;

        while store.sessions.len() >= self.max_sessions {
            let Some(oldest) = store.insertion_order.pop_front() else {
                break;
            };
            if let Some(evicted) = store.sessions.remove(&oldest) {
                tracing::debug!(
                    session_id = %oldest,
                    finished = evicted.is_finished(),
                    "Evicted oldest picker session"
                );
            }
        }

        let mut id = SessionId::generate();
        while store.sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        store.sessions.insert(id.clone(), session);
        store.insertion_order.push_back(id.clone());
        Ok(id)
    }

    async fn find(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError> {
        let store = self.store.read().await;
        Ok(store.sessions.get(id).cloned())
    }

    async fn update<F, T>(&self, id: &SessionId, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut PickerSession) -> T + Send,
        T: Send,
    {
        let mut store = self.store.write().await;
        let session = store.sessions.get_mut(id).ok_or(ApiError::SessionNotFound)?;
        Ok(f(session))
    }

    async fn remove(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError> {
        let mut store = self.store.write().await;
        let removed = store.sessions.remove(id);
        if removed.is_some() {
            store.insertion_order.retain(|k| k != id);
        }
        Ok(removed)
    }
}
