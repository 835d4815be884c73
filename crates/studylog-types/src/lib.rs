pub mod error;
pub mod goal;
pub mod session;
mod util;

pub use error::ValidationError;
pub use goal::{Goal, GoalPatch};
pub use session::{Difficulty, StudySession};
pub use util::new_id;
