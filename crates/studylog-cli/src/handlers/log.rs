use anyhow::Result;
use chrono::Utc;

use studylog_engine::format_duration;
use studylog_types::{Difficulty, StudySession};

use crate::context::ExecutionContext;
use crate::handlers::parse_timestamp;

pub fn handle(
    ctx: &ExecutionContext,
    subject: String,
    duration: u32,
    date: Option<String>,
    notes: Option<String>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    let date = match date {
        Some(raw) => parse_timestamp(&raw)?,
        None => Utc::now(),
    };

    let mut session = StudySession::new(subject, duration, date);
    if let Some(notes) = notes {
        session = session.with_notes(notes);
    }
    if let Some(difficulty) = difficulty {
        session = session.with_difficulty(difficulty);
    }

    // Consumer-side validation; the store trusts its caller.
    session.validate()?;
    ctx.store().add_session(session.clone())?;

    println!(
        "Logged {} for {} (id {})",
        session.subject,
        format_duration(u64::from(session.duration)),
        session.id
    );
    Ok(())
}
