use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use api::{HintRequest, ProblemRequest, SolutionRequest, TutorBackend};
use tutor_core::model::{
    Difficulty, HintLevel, HintReveal, HintSet, Problem, ProblemBatch, ProblemId, Solution,
};

use crate::error::PracticeError;

#[derive(Default)]
struct PracticeState {
    batch: Option<ProblemBatch>,
    hints: HashMap<ProblemId, HintSet>,
}

/// Problem generation, the per-batch hint cache, and solution lookups.
///
/// This is the only stateful piece of the client. The hint cache is keyed by
/// client-assigned `ProblemId` and scoped to the current batch: replacing the
/// batch clears it. The cache guarantees at most one hints request per
/// problem per batch; the async mutex is held across the fetch so concurrent
/// reveals of the same problem still collapse into a single request.
pub struct PracticeService {
    backend: Arc<dyn TutorBackend>,
    state: Mutex<PracticeState>,
}

impl PracticeService {
    #[must_use]
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(PracticeState::default()),
        }
    }

    /// Generate a new problem batch, replacing the current one.
    ///
    /// On failure the previous batch and its hint cache are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EmptyTopic` before any request when the topic
    /// is blank, or `PracticeError::Api` if the request fails.
    pub async fn generate_batch(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: u32,
    ) -> Result<ProblemBatch, PracticeError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PracticeError::EmptyTopic);
        }

        let request = ProblemRequest {
            topic: topic.to_string(),
            difficulty,
            count,
        };
        let generated = self.backend.generate_problems(&request).await?;

        let problems = generated
            .into_iter()
            .map(|p| Problem::assign_id(p.prompt, p.difficulty))
            .collect();
        let batch = ProblemBatch::new(topic.to_string(), difficulty, problems);

        let mut state = self.state.lock().await;
        state.batch = Some(batch.clone());
        state.hints.clear();
        tracing::debug!(topic, %difficulty, count, "replaced problem batch, hint cache cleared");
        Ok(batch)
    }

    /// Snapshot of the current batch, if one has been generated.
    pub async fn current_batch(&self) -> Option<ProblemBatch> {
        self.state.lock().await.batch.clone()
    }

    /// Reveal one hint level for a problem.
    ///
    /// The first reveal for a problem fetches all of its hints in one
    /// request and caches them; later reveals for any level are served from
    /// the cache. A level the backend did not provide comes back as
    /// `HintReveal::Unavailable` rather than being dropped silently.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::UnknownProblem` when the id is not in the
    /// current batch, or `PracticeError::Api` if the fetch fails. A failed
    /// fetch caches nothing, so the next reveal retries.
    pub async fn reveal_hint(
        &self,
        problem_id: ProblemId,
        level: HintLevel,
    ) -> Result<HintReveal, PracticeError> {
        let mut state = self.state.lock().await;
        let (prompt, difficulty, topic) = {
            let batch = state.batch.as_ref().ok_or(PracticeError::UnknownProblem)?;
            let problem = batch
                .problem(problem_id)
                .ok_or(PracticeError::UnknownProblem)?;
            (
                problem.prompt.clone(),
                problem.difficulty_or(batch.requested_difficulty),
                batch.topic.clone(),
            )
        };

        if let Some(set) = state.hints.get(&problem_id) {
            return Ok(set.reveal(level));
        }

        let request = HintRequest {
            problem: prompt,
            difficulty,
            topic,
        };
        tracing::debug!(%problem_id, "hint cache miss, fetching all levels");
        let hints = self.backend.generate_hints(&request).await?;
        let set = state
            .hints
            .entry(problem_id)
            .or_insert_with(|| HintSet::new(hints));
        Ok(set.reveal(level))
    }

    /// Fetch a worked solution for a problem in the current batch.
    ///
    /// Solutions are not cached; this mirrors the one-round-trip pattern of
    /// the other display actions.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::UnknownProblem` when the id is not in the
    /// current batch, or `PracticeError::Api` if the request fails.
    pub async fn solution(&self, problem_id: ProblemId) -> Result<Solution, PracticeError> {
        let request = {
            let state = self.state.lock().await;
            let batch = state.batch.as_ref().ok_or(PracticeError::UnknownProblem)?;
            let problem = batch
                .problem(problem_id)
                .ok_or(PracticeError::UnknownProblem)?;
            SolutionRequest {
                problem: problem.prompt.clone(),
                topic: batch.topic.clone(),
            }
        };
        let solution = self.backend.generate_solution(&request).await?;
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryBackend;

    fn service_with_backend() -> (Arc<InMemoryBackend>, PracticeService) {
        let backend = Arc::new(InMemoryBackend::new());
        let service = PracticeService::new(Arc::clone(&backend) as Arc<dyn TutorBackend>);
        (backend, service)
    }

    #[tokio::test]
    async fn empty_topic_never_reaches_the_backend() {
        let (backend, service) = service_with_backend();
        let err = service
            .generate_batch("   ", Difficulty::Medium, 3)
            .await
            .unwrap_err();
        assert!(matches!(err, PracticeError::EmptyTopic));
        assert_eq!(backend.problem_request_count(), 0);
    }

    #[tokio::test]
    async fn generating_assigns_stable_ids() {
        let (_, service) = service_with_backend();
        let batch = service
            .generate_batch("fractions", Difficulty::Easy, 2)
            .await
            .unwrap();
        assert_eq!(batch.problems.len(), 2);
        assert_ne!(batch.problems[0].id, batch.problems[1].id);

        let snapshot = service.current_batch().await.unwrap();
        assert_eq!(snapshot, batch);
    }

    #[tokio::test]
    async fn reveal_for_unknown_problem_is_rejected() {
        let (_, service) = service_with_backend();
        service
            .generate_batch("fractions", Difficulty::Easy, 1)
            .await
            .unwrap();
        let err = service
            .reveal_hint(ProblemId::generate(), HintLevel::First)
            .await
            .unwrap_err();
        assert!(matches!(err, PracticeError::UnknownProblem));
    }

    #[tokio::test]
    async fn failed_hint_fetch_is_not_cached() {
        let (backend, service) = service_with_backend();
        let batch = service
            .generate_batch("fractions", Difficulty::Easy, 1)
            .await
            .unwrap();
        let id = batch.problems[0].id;

        backend.set_failing(true);
        assert!(service.reveal_hint(id, HintLevel::First).await.is_err());

        backend.set_failing(false);
        let reveal = service.reveal_hint(id, HintLevel::First).await.unwrap();
        assert!(matches!(reveal, HintReveal::Hint { .. }));
        // The failed attempt never reached the request log.
        assert_eq!(backend.hint_request_count(), 1);
    }
}
