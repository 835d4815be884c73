use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use studylog_types::StudySession;

/// Minutes studied for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTotal {
    pub subject: String,
    pub minutes: u64,
}

/// Sum of session durations in minutes. Empty input sums to 0.
pub fn total_duration(sessions: &[StudySession]) -> u64 {
    sessions.iter().map(|s| u64::from(s.duration)).sum()
}

/// Group durations by exact subject match, case-sensitive.
///
/// Groups appear in first-occurrence order of the input sequence, so a
/// newest-first snapshot yields the most recently studied subject first.
pub fn duration_by_subject(sessions: &[StudySession]) -> Vec<SubjectTotal> {
    let mut totals: Vec<SubjectTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for session in sessions {
        if let Some(i) = index.get(session.subject.as_str()).copied() {
            totals[i].minutes += u64::from(session.duration);
        } else {
            index.insert(session.subject.as_str(), totals.len());
            totals.push(SubjectTotal {
                subject: session.subject.clone(),
                minutes: u64::from(session.duration),
            });
        }
    }

    totals
}

/// Render minutes as `"{hours}h {minutes}m"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(subject: &str, duration: u32) -> StudySession {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        StudySession::new(subject, duration, date)
    }

    #[test]
    fn total_duration_of_empty_input_is_zero() {
        assert_eq!(total_duration(&[]), 0);
    }

    #[test]
    fn groups_sum_by_exact_subject() {
        let sessions = vec![
            session("Math", 30),
            session("Math", 20),
            session("Art", 10),
        ];

        let totals = duration_by_subject(&sessions);
        assert_eq!(
            totals,
            vec![
                SubjectTotal {
                    subject: "Math".to_string(),
                    minutes: 50
                },
                SubjectTotal {
                    subject: "Art".to_string(),
                    minutes: 10
                },
            ]
        );
        assert_eq!(total_duration(&sessions), 60);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let sessions = vec![session("math", 30), session("Math", 20)];

        let totals = duration_by_subject(&sessions);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].subject, "math");
        assert_eq!(totals[1].subject, "Math");
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let sessions = vec![
            session("Art", 10),
            session("Math", 30),
            session("Art", 5),
            session("Science", 15),
        ];

        let totals = duration_by_subject(&sessions);
        let subjects: Vec<&str> = totals.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Art", "Math", "Science"]);
    }

    #[test]
    fn format_duration_splits_hours_and_minutes() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(125), "2h 5m");
    }
}
