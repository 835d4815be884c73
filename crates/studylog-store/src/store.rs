use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use studylog_types::{Goal, GoalPatch, StudySession};

use crate::backend::{DetachedBackend, FileBackend, MemoryBackend, StorageBackend};
use crate::error::Result;

/// Storage key for the session collection, newest-first.
pub const SESSIONS_KEY: &str = "study-sessions";

/// Storage key for the goal collection, insertion order.
pub const GOALS_KEY: &str = "study-goals";

// NOTE: Mutation semantics
//
// Every mutation is a full read-modify-write of the affected collection:
// read the current sequence, apply the change, write the whole sequence
// back. There is no incremental persistence and no cross-context locking,
// so two contexts mutating the same collection resolve last-writer-wins.
//
// The store does not validate records; callers check invariants through
// studylog_types before mutating.

/// Durable CRUD for the two studylog collections.
///
/// All reads and writes go through an injected [`StorageBackend`]; an
/// absent key reads as an empty collection, while any stored content that
/// fails to parse is surfaced as [`crate::Error::Parse`].
pub struct StudyStore {
    backend: Box<dyn StorageBackend>,
}

impl StudyStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Open a disk-backed store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileBackend::new(dir)))
    }

    /// Open a store that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Open a store for contexts without persistent storage: reads are
    /// empty, writes are dropped.
    pub fn detached() -> Self {
        Self::new(Box::new(DetachedBackend))
    }

    /// All sessions in stored order, newest-first by construction.
    pub fn list_sessions(&self) -> Result<Vec<StudySession>> {
        self.load(SESSIONS_KEY)
    }

    /// Prepend `session` to the stored sequence.
    pub fn add_session(&self, session: StudySession) -> Result<()> {
        let mut sessions = self.list_sessions()?;
        sessions.insert(0, session);
        self.save(SESSIONS_KEY, &sessions)
    }

    /// Remove the session with matching id; no-op when absent.
    pub fn delete_session(&self, id: &str) -> Result<()> {
        let mut sessions = self.list_sessions()?;
        sessions.retain(|session| session.id != id);
        self.save(SESSIONS_KEY, &sessions)
    }

    /// All goals in insertion order.
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        self.load(GOALS_KEY)
    }

    /// Append `goal` to the stored sequence.
    pub fn add_goal(&self, goal: Goal) -> Result<()> {
        let mut goals = self.list_goals()?;
        goals.push(goal);
        self.save(GOALS_KEY, &goals)
    }

    /// Merge `patch` onto the goal with matching id; no-op when absent.
    pub fn update_goal(&self, id: &str, patch: &GoalPatch) -> Result<()> {
        let mut goals = self.list_goals()?;
        if let Some(goal) = goals.iter_mut().find(|goal| goal.id == id) {
            patch.apply(goal);
        }
        self.save(GOALS_KEY, &goals)
    }

    /// Remove the goal with matching id; no-op when absent.
    pub fn delete_goal(&self, id: &str) -> Result<()> {
        let mut goals = self.list_goals()?;
        goals.retain(|goal| goal.id != id);
        self.save(GOALS_KEY, &goals)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.read(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.write(key, &raw)?;
        tracing::debug!(key, count = records.len(), "persisted collection");
        Ok(())
    }
}
