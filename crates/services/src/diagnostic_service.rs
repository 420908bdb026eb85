use std::sync::Arc;

use api::{DiagnosticRequest, TutorBackend};
use tutor_core::model::DiagnosticAssessment;

use crate::error::DiagnosticError;

/// Diagnostic assessment generation.
///
/// Answer checking never goes through here: it is a pure comparison on
/// `DiagnosticQuestion` in the core crate.
#[derive(Clone)]
pub struct DiagnosticService {
    backend: Arc<dyn TutorBackend>,
}

impl DiagnosticService {
    #[must_use]
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Generate a multiple-choice assessment for a topic.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticError::EmptyTopic` before any request when the
    /// topic is blank, or `DiagnosticError::Api` if the request fails.
    pub async fn generate(
        &self,
        topic: &str,
        num_questions: u32,
    ) -> Result<DiagnosticAssessment, DiagnosticError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(DiagnosticError::EmptyTopic);
        }
        let request = DiagnosticRequest {
            topic: topic.to_string(),
            num_questions,
        };
        let assessment = self.backend.generate_diagnostic(&request).await?;
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryBackend;

    #[tokio::test]
    async fn generates_requested_number_of_questions() {
        let service = DiagnosticService::new(Arc::new(InMemoryBackend::new()));
        let assessment = service.generate("geometry", 4).await.unwrap();
        assert_eq!(assessment.questions.len(), 4);
    }

    #[tokio::test]
    async fn blank_topic_is_rejected() {
        let service = DiagnosticService::new(Arc::new(InMemoryBackend::new()));
        assert!(matches!(
            service.generate("  ", 5).await.unwrap_err(),
            DiagnosticError::EmptyTopic
        ));
    }
}
