use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::util::new_id;

/// Self-assessed difficulty of a study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}': expected easy, medium or hard",
                other
            )),
        }
    }
}

/// One logged study activity.
///
/// Sessions are immutable once created: there is no update operation,
/// only deletion. `subject` is a free-form, case-sensitive grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,

    /// Non-empty subject label, used as-is for grouping.
    pub subject: String,

    /// Minutes spent, always positive.
    pub duration: u32,

    /// When the session occurred.
    pub date: DateTime<Utc>,

    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional difficulty self-assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl StudySession {
    /// Create a session with a fresh id and no optional fields set.
    pub fn new(subject: impl Into<String>, duration: u32, date: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            subject: subject.into(),
            duration,
            date,
            notes: None,
            difficulty: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check the record invariants: non-empty subject, positive duration.
    ///
    /// Callers validate before handing the record to the store; the store
    /// itself trusts its input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        if self.duration == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let session = StudySession::new("Mathematics", 90, sample_date());
        let json = serde_json::to_string(&session).unwrap();

        assert!(!json.contains("notes"));
        assert!(!json.contains("difficulty"));
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let session = StudySession::new("Science", 60, sample_date())
            .with_difficulty(Difficulty::Hard)
            .with_notes("Reviewed physics formulas");
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains(r#""difficulty":"hard""#));
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let session = StudySession::new("Literature", 45, sample_date())
            .with_notes("Read Hamlet")
            .with_difficulty(Difficulty::Medium);

        let json = serde_json::to_string(&session).unwrap();
        let back: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{"id":"1","subject":"Math","duration":30,"date":"2026-03-14T09:30:00Z"}"#;
        let session: StudySession = serde_json::from_str(json).unwrap();

        assert_eq!(session.notes, None);
        assert_eq!(session.difficulty, None);
    }

    #[test]
    fn validate_rejects_empty_subject() {
        let mut session = StudySession::new("Math", 30, sample_date());
        session.subject = String::new();
        assert_eq!(session.validate(), Err(ValidationError::EmptySubject));
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let session = StudySession::new("Math", 0, sample_date());
        assert_eq!(session.validate(), Err(ValidationError::ZeroDuration));
    }

    #[test]
    fn difficulty_parses_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
