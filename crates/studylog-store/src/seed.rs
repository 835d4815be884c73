use chrono::{DateTime, Duration, Months, Utc};

use studylog_types::{Difficulty, Goal, StudySession};

use crate::error::Result;
use crate::store::{GOALS_KEY, SESSIONS_KEY, StudyStore};

impl StudyStore {
    /// Populate each collection with fixed sample records, once.
    ///
    /// Each collection is checked independently: an empty collection gets
    /// the sample content, a non-empty one is left alone. Repeated calls
    /// are no-ops after the first success. Invoked once by the composition
    /// root at application startup.
    pub fn seed_if_empty(&self) -> Result<()> {
        let now = Utc::now();

        if self.list_sessions()?.is_empty() {
            tracing::debug!("seeding sample sessions");
            self.save(SESSIONS_KEY, &sample_sessions(now))?;
        }

        if self.list_goals()?.is_empty() {
            tracing::debug!("seeding sample goals");
            self.save(GOALS_KEY, &sample_goals(now))?;
        }

        Ok(())
    }
}

fn sample_sessions(now: DateTime<Utc>) -> Vec<StudySession> {
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    vec![
        StudySession {
            id: "1".to_string(),
            subject: "Mathematics".to_string(),
            duration: 90,
            date: now,
            notes: Some("Studied calculus derivatives and integrals".to_string()),
            difficulty: Some(Difficulty::Medium),
        },
        StudySession {
            id: "2".to_string(),
            subject: "Science".to_string(),
            duration: 60,
            date: yesterday,
            notes: Some("Reviewed physics formulas for upcoming test".to_string()),
            difficulty: Some(Difficulty::Hard),
        },
        StudySession {
            id: "3".to_string(),
            subject: "Literature".to_string(),
            duration: 45,
            date: two_days_ago,
            notes: Some("Read Shakespeare's Hamlet".to_string()),
            difficulty: Some(Difficulty::Medium),
        },
        StudySession {
            id: "4".to_string(),
            subject: "Programming".to_string(),
            duration: 120,
            date: two_days_ago,
            notes: Some("Practiced data structures and algorithms".to_string()),
            difficulty: Some(Difficulty::Easy),
        },
    ]
}

fn sample_goals(now: DateTime<Utc>) -> Vec<Goal> {
    let next_month = now.checked_add_months(Months::new(1)).unwrap_or(now);

    vec![
        Goal {
            id: "1".to_string(),
            title: "Master Calculus".to_string(),
            description: Some(
                "Complete all practice problems and score 90% on final exam".to_string(),
            ),
            target: "Score 90% on final exam".to_string(),
            deadline: Some(next_month),
            progress: 30,
            created_at: now,
        },
        Goal {
            id: "2".to_string(),
            title: "Finish Programming Project".to_string(),
            description: Some("Complete the full-stack web application".to_string()),
            target: "Functional web app with all features".to_string(),
            deadline: Some(next_month),
            progress: 60,
            created_at: now,
        },
        Goal {
            id: "3".to_string(),
            title: "Read 5 Literature Books".to_string(),
            description: None,
            target: "5 books".to_string(),
            deadline: None,
            progress: 40,
            created_at: now,
        },
    ]
}
