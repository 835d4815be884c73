// JSON key-value store for studylog collections
// One serialized document per collection, full read-modify-write on mutation

mod backend;
mod error;
mod paths;
mod seed;
mod store;

// Public API
pub use backend::{DetachedBackend, FileBackend, MemoryBackend, StorageBackend};
pub use error::{Error, Result};
pub use paths::{expand_tilde, resolve_data_dir};
pub use store::{GOALS_KEY, SESSIONS_KEY, StudyStore};
