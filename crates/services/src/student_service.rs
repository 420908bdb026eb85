use std::sync::Arc;

use api::TutorBackend;
use tutor_core::model::{Student, StudentDraft};

use crate::error::StudentServiceError;

/// Roster access and student creation.
#[derive(Clone)]
pub struct StudentService {
    backend: Arc<dyn TutorBackend>,
}

impl StudentService {
    #[must_use]
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Fetch all students. The result is not cached; every view load refetches.
    ///
    /// # Errors
    ///
    /// Returns `StudentServiceError::Api` if the request fails.
    pub async fn roster(&self) -> Result<Vec<Student>, StudentServiceError> {
        let students = self.backend.list_students().await?;
        Ok(students)
    }

    /// Validate a draft locally, then submit it.
    ///
    /// A blank name never reaches the network.
    ///
    /// # Errors
    ///
    /// Returns `StudentServiceError::Validation` when the draft fails local
    /// checks, or `StudentServiceError::Api` if the request fails.
    pub async fn add_student(&self, draft: &StudentDraft) -> Result<(), StudentServiceError> {
        draft.validate()?;
        self.backend.create_student(draft).await?;
        Ok(())
    }
}
