use std::sync::Arc;

use api::{LessonPlanRequest, TutorBackend};
use tutor_core::model::{LessonPlan, StudentId};

use crate::error::LessonError;

/// Raw lesson form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonPlanInput {
    pub student_id: Option<StudentId>,
    pub topic: String,
    /// Comma-separated outline as typed into the form.
    pub outline: String,
    pub session_length: u32,
}

impl LessonPlanInput {
    /// Validate presence and split the outline into trimmed units.
    ///
    /// # Errors
    ///
    /// Returns the first missing-field error; nothing is sent until the form
    /// is complete.
    fn into_request(self) -> Result<LessonPlanRequest, LessonError> {
        let student_id = self.student_id.ok_or(LessonError::MissingStudent)?;
        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            return Err(LessonError::EmptyTopic);
        }
        let unit_outline: Vec<String> = self
            .outline
            .split(',')
            .map(|unit| unit.trim().to_string())
            .filter(|unit| !unit.is_empty())
            .collect();
        if unit_outline.is_empty() {
            return Err(LessonError::EmptyOutline);
        }
        Ok(LessonPlanRequest {
            student_id,
            topic,
            unit_outline,
            session_length: self.session_length,
        })
    }
}

/// Lesson plan generation. Stateless beyond the single round trip.
#[derive(Clone)]
pub struct LessonService {
    backend: Arc<dyn TutorBackend>,
}

impl LessonService {
    #[must_use]
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Validate the form input, then generate a plan.
    ///
    /// # Errors
    ///
    /// Returns a validation variant before any request when a required field
    /// is missing, or `LessonError::Api` if the request fails.
    pub async fn generate(&self, input: LessonPlanInput) -> Result<LessonPlan, LessonError> {
        let request = input.into_request()?;
        let plan = self.backend.generate_lesson_plan(&request).await?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryBackend;

    fn input(student_id: Option<StudentId>) -> LessonPlanInput {
        LessonPlanInput {
            student_id,
            topic: "fractions".to_string(),
            outline: "intro, practice , review,".to_string(),
            session_length: 45,
        }
    }

    #[tokio::test]
    async fn outline_is_split_and_trimmed() {
        let backend = InMemoryBackend::new();
        let student = backend.seed_student("Ada");
        let service = LessonService::new(Arc::new(backend));
        let plan = service.generate(input(Some(student))).await.unwrap();
        // The fake mirrors the outline back as activities.
        let titles: Vec<&str> = plan.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["intro", "practice", "review"]);
    }

    #[tokio::test]
    async fn missing_student_is_rejected_before_any_request() {
        let backend = InMemoryBackend::new();
        backend.set_failing(true);
        let service = LessonService::new(Arc::new(backend));
        let err = service.generate(input(None)).await.unwrap_err();
        assert!(matches!(err, LessonError::MissingStudent));
    }

    #[tokio::test]
    async fn blank_outline_is_rejected() {
        let backend = InMemoryBackend::new();
        let student = backend.seed_student("Ada");
        let service = LessonService::new(Arc::new(backend));
        let err = service
            .generate(LessonPlanInput {
                outline: " , ,".to_string(),
                ..input(Some(student))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LessonError::EmptyOutline));
    }
}
