use std::sync::Arc;

use api::TutorBackend;
use tutor_core::model::{ProgressRecord, StudentId};

use crate::error::ProgressError;

/// Per-student progress summaries. Fetched per view action, never retained.
#[derive(Clone)]
pub struct ProgressService {
    backend: Arc<dyn TutorBackend>,
}

impl ProgressService {
    #[must_use]
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Fetch all progress records for one student.
    ///
    /// An empty result is a valid "no data yet" state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Api` if the request fails.
    pub async fn for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<ProgressRecord>, ProgressError> {
        let records = self.backend.student_progress(student_id).await?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryBackend;

    #[tokio::test]
    async fn empty_progress_is_ok_not_error() {
        let backend = InMemoryBackend::new();
        let student = backend.seed_student("Ada");
        let service = ProgressService::new(Arc::new(backend));
        let records = service.for_student(student).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn canned_progress_comes_back() {
        let backend = InMemoryBackend::new();
        let student = backend.seed_student("Ada");
        backend.set_progress(vec![ProgressRecord {
            topic: "fractions".to_string(),
            mastery_score: 72.0,
            strengths: vec!["equivalents".to_string()],
            ..ProgressRecord::default()
        }]);
        let service = ProgressService::new(Arc::new(backend));
        let records = service.for_student(student).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].topic, "fractions");
    }
}
