use serde::{Deserialize, Serialize};

use studylog_types::StudySession;

/// Sort order for session listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionSort {
    /// Most recent first (default)
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Longest first
    DurationDesc,
    /// Shortest first
    DurationAsc,
    /// Subject A-Z, case-sensitive
    SubjectAsc,
}

impl SessionSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionSort::DateDesc => "date-desc",
            SessionSort::DateAsc => "date-asc",
            SessionSort::DurationDesc => "duration-desc",
            SessionSort::DurationAsc => "duration-asc",
            SessionSort::SubjectAsc => "subject-asc",
        }
    }
}

impl std::fmt::Display for SessionSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SessionSort::DateDesc),
            "date-asc" => Ok(SessionSort::DateAsc),
            "duration-desc" => Ok(SessionSort::DurationDesc),
            "duration-asc" => Ok(SessionSort::DurationAsc),
            "subject-asc" => Ok(SessionSort::SubjectAsc),
            other => Err(format!(
                "unknown sort key '{}': expected one of date-desc, date-asc, \
                 duration-desc, duration-asc, subject-asc",
                other
            )),
        }
    }
}

/// Filter for session listings.
///
/// Both criteria are optional and compose with logical AND: an exact
/// subject match and a case-insensitive substring search over subject or
/// notes.
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    subject: Option<String>,
    search: Option<String>,
}

impl SessionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only sessions whose subject matches exactly.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Keep only sessions whose subject or notes contain `term`,
    /// case-insensitively. Sessions without notes never match on notes.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn matches(&self, session: &StudySession) -> bool {
        if let Some(subject) = &self.subject
            && session.subject != *subject
        {
            return false;
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_subject = session.subject.to_lowercase().contains(&term);
            let in_notes = session
                .notes
                .as_ref()
                .is_some_and(|notes| notes.to_lowercase().contains(&term));
            if !in_subject && !in_notes {
                return false;
            }
        }

        true
    }
}

/// Apply `query` to a snapshot, returning the matching sessions in their
/// original order. The input is never mutated.
pub fn filter_sessions(sessions: &[StudySession], query: &SessionQuery) -> Vec<StudySession> {
    sessions
        .iter()
        .filter(|session| query.matches(session))
        .cloned()
        .collect()
}

/// Stable sort of a snapshot by the given key. The input is never mutated.
pub fn sort_sessions(sessions: &[StudySession], sort: SessionSort) -> Vec<StudySession> {
    let mut sorted = sessions.to_vec();
    match sort {
        SessionSort::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SessionSort::DateAsc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SessionSort::DurationDesc => sorted.sort_by(|a, b| b.duration.cmp(&a.duration)),
        SessionSort::DurationAsc => sorted.sort_by(|a, b| a.duration.cmp(&b.duration)),
        SessionSort::SubjectAsc => sorted.sort_by(|a, b| a.subject.cmp(&b.subject)),
    }
    sorted
}

/// First `n` sessions of a snapshot already in newest-first order.
///
/// Pure truncation; the input is not re-sorted.
pub fn recent_sessions(sessions: &[StudySession], n: usize) -> &[StudySession] {
    &sessions[..n.min(sessions.len())]
}
