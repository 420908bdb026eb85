use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::StudentId;

/// Validation failures for student data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("student name must not be empty")]
    EmptyName,
}

/// A student profile as held by the backend.
///
/// The client keeps a read-only cached copy for roster cards and selection
/// widgets; the backend is the system of record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub prior_mastery: f64,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub pacing_pref: Option<String>,
    #[serde(default)]
    pub accessibility_needs: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Form payload for creating a student.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StudentDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing_pref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_needs: Option<String>,
}

impl StudentDraft {
    /// Checks the presence requirements the form enforces locally.
    ///
    /// # Errors
    ///
    /// Returns `StudentError::EmptyName` when the name is blank.
    pub fn validate(&self) -> Result<(), StudentError> {
        if self.name.trim().is_empty() {
            return Err(StudentError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_name_is_valid() {
        let draft = StudentDraft {
            name: "Ada".to_string(),
            ..StudentDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = StudentDraft {
            name: "   ".to_string(),
            ..StudentDraft::default()
        };
        assert_eq!(draft.validate(), Err(StudentError::EmptyName));
    }
}
