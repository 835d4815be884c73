use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::util::new_id;

/// A user-defined target with a completion percentage.
///
/// Goals live independently of study sessions; the two are correlated only
/// by whatever subject/title text the user chooses. A goal at 100% is
/// considered complete but is never archived or transitioned automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Opaque unique identifier, immutable.
    pub id: String,

    /// Non-empty goal title.
    pub title: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Non-empty success criterion, free-form and not machine-checked.
    pub target: String,

    /// Optional deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Completion percentage in [0, 100].
    pub progress: u8,

    /// Set at creation, immutable.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal with a fresh id, zero progress and `created_at` now.
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: None,
            target: target.into(),
            deadline: None,
            progress: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Check the record invariants: non-empty title and target, progress
    /// within [0, 100].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.target.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }
        if self.progress > 100 {
            return Err(ValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}

/// Field-wise partial update for a stored goal.
///
/// Every field present replaces the prior value; absent fields are left
/// untouched. `id` and `created_at` are immutable and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl GoalPatch {
    /// Patch that updates only the progress field.
    pub fn progress(value: u8) -> Self {
        Self {
            progress: Some(value),
            ..Self::default()
        }
    }

    /// True when no field is set, in which case applying is a no-op.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrite each named field on `goal`; shallow merge only.
    pub fn apply(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(description) = &self.description {
            goal.description = Some(description.clone());
        }
        if let Some(target) = &self.target {
            goal.target = target.clone();
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = Some(deadline);
        }
        if let Some(progress) = self.progress {
            goal.progress = progress;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_goal_starts_at_zero_progress() {
        let goal = Goal::new("Master Calculus", "Score 90% on final exam");
        assert_eq!(goal.progress, 0);
        assert!(goal.description.is_none());
        assert!(goal.deadline.is_none());
    }

    #[test]
    fn created_at_serializes_as_camel_case() {
        let goal = Goal::new("Read", "5 books");
        let json = serde_json::to_string(&goal).unwrap();

        assert!(json.contains("createdAt"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let goal = Goal::new("Read", "5 books");
        let json = serde_json::to_string(&goal).unwrap();

        assert!(!json.contains("description"));
        assert!(!json.contains("deadline"));
    }

    #[test]
    fn patch_overwrites_only_named_fields() {
        let mut goal = Goal::new("Read", "5 books").with_description("Literature list");
        let before = goal.clone();

        GoalPatch::progress(40).apply(&mut goal);

        assert_eq!(goal.progress, 40);
        assert_eq!(goal.title, before.title);
        assert_eq!(goal.description, before.description);
        assert_eq!(goal.target, before.target);
        assert_eq!(goal.created_at, before.created_at);
    }

    #[test]
    fn patch_can_replace_multiple_fields() {
        let mut goal = Goal::new("Read", "5 books");
        let deadline = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();

        let patch = GoalPatch {
            title: Some("Read more".to_string()),
            deadline: Some(deadline),
            ..GoalPatch::default()
        };
        patch.apply(&mut goal);

        assert_eq!(goal.title, "Read more");
        assert_eq!(goal.deadline, Some(deadline));
        assert_eq!(goal.target, "5 books");
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(GoalPatch::default().is_empty());
        assert!(!GoalPatch::progress(10).is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range_progress() {
        let mut goal = Goal::new("Read", "5 books");
        goal.progress = 101;
        assert_eq!(
            goal.validate(),
            Err(ValidationError::ProgressOutOfRange(101))
        );
    }

    #[test]
    fn validate_rejects_empty_title_and_target() {
        let mut goal = Goal::new("", "5 books");
        assert_eq!(goal.validate(), Err(ValidationError::EmptyTitle));

        goal.title = "Read".to_string();
        goal.target = String::new();
        assert_eq!(goal.validate(), Err(ValidationError::EmptyTarget));
    }
}
