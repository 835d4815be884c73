//! Pure derivations over studylog collections.
//!
//! Every function here works on an in-memory snapshot supplied by the
//! caller; nothing in this crate touches storage. Consumers read records
//! through `studylog-store`, derive a view with these functions and render
//! the result.

pub mod goals;
pub mod query;
pub mod stats;

pub use goals::{PROGRESS_STEP, clamped_progress, is_complete};
pub use query::{SessionQuery, SessionSort, filter_sessions, recent_sessions, sort_sessions};
pub use stats::{SubjectTotal, duration_by_subject, format_duration, total_duration};
