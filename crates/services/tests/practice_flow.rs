use std::sync::Arc;

use api::{InMemoryBackend, TutorBackend};
use services::PracticeService;
use tutor_core::model::{Difficulty, HintLevel, HintReveal};

fn setup() -> (Arc<InMemoryBackend>, PracticeService) {
    let backend = Arc::new(InMemoryBackend::new());
    let service = PracticeService::new(Arc::clone(&backend) as Arc<dyn TutorBackend>);
    (backend, service)
}

#[tokio::test]
async fn hints_are_fetched_once_per_problem_per_batch() {
    let (backend, service) = setup();
    let batch = service
        .generate_batch("fractions", Difficulty::Medium, 2)
        .await
        .expect("generate batch");
    let first = batch.problems[0].id;

    // Any number of reveals at any level: exactly one backend round trip.
    for level in [
        HintLevel::First,
        HintLevel::Third,
        HintLevel::Second,
        HintLevel::First,
    ] {
        let reveal = service.reveal_hint(first, level).await.expect("reveal");
        assert!(matches!(reveal, HintReveal::Hint { .. }));
    }
    assert_eq!(backend.hint_request_count(), 1);

    // A different problem in the same batch gets its own single fetch.
    let second = batch.problems[1].id;
    service
        .reveal_hint(second, HintLevel::First)
        .await
        .expect("reveal second problem");
    service
        .reveal_hint(second, HintLevel::Second)
        .await
        .expect("reveal second problem again");
    assert_eq!(backend.hint_request_count(), 2);

    let hinted = backend.hinted_problems();
    assert_eq!(hinted[0], batch.problems[0].prompt);
    assert_eq!(hinted[1], batch.problems[1].prompt);
}

#[tokio::test]
async fn regenerating_a_batch_resets_the_hint_cache() {
    let (backend, service) = setup();
    let batch = service
        .generate_batch("fractions", Difficulty::Medium, 1)
        .await
        .expect("generate batch");
    service
        .reveal_hint(batch.problems[0].id, HintLevel::First)
        .await
        .expect("reveal");
    assert_eq!(backend.hint_request_count(), 1);

    // Old ids are invalid after regeneration; new ids fetch fresh hints.
    let next = service
        .generate_batch("fractions", Difficulty::Medium, 1)
        .await
        .expect("regenerate batch");
    assert!(service
        .reveal_hint(batch.problems[0].id, HintLevel::First)
        .await
        .is_err());
    service
        .reveal_hint(next.problems[0].id, HintLevel::First)
        .await
        .expect("reveal in new batch");
    assert_eq!(backend.hint_request_count(), 2);
}

#[tokio::test]
async fn missing_hint_levels_are_reported_not_dropped() {
    let (backend, service) = setup();
    backend.set_hints(vec!["only one hint".to_string()]);
    let batch = service
        .generate_batch("fractions", Difficulty::Medium, 1)
        .await
        .expect("generate batch");
    let id = batch.problems[0].id;

    let available = service.reveal_hint(id, HintLevel::First).await.unwrap();
    assert_eq!(
        available,
        HintReveal::Hint {
            level: HintLevel::First,
            text: "only one hint".to_string()
        }
    );

    let missing = service.reveal_hint(id, HintLevel::Third).await.unwrap();
    assert_eq!(
        missing,
        HintReveal::Unavailable {
            level: HintLevel::Third,
            available: 1
        }
    );
    // The short set still counts as fetched; no re-request for level 3.
    assert_eq!(backend.hint_request_count(), 1);
}

#[tokio::test]
async fn failed_generation_leaves_the_previous_batch_intact() {
    let (backend, service) = setup();
    let batch = service
        .generate_batch("fractions", Difficulty::Medium, 2)
        .await
        .expect("generate batch");
    service
        .reveal_hint(batch.problems[0].id, HintLevel::First)
        .await
        .expect("reveal");

    backend.set_failing(true);
    assert!(service
        .generate_batch("geometry", Difficulty::Hard, 3)
        .await
        .is_err());
    backend.set_failing(false);

    // Stale but not corrupted: the old batch and its cache still answer.
    let snapshot = service.current_batch().await.expect("batch still present");
    assert_eq!(snapshot, batch);
    service
        .reveal_hint(batch.problems[0].id, HintLevel::Second)
        .await
        .expect("cached reveal still works");
    assert_eq!(backend.hint_request_count(), 1);
}

#[tokio::test]
async fn solutions_are_fetched_per_request_without_caching() {
    let (_, service) = setup();
    let batch = service
        .generate_batch("fractions", Difficulty::Medium, 1)
        .await
        .expect("generate batch");
    let solution = service.solution(batch.problems[0].id).await.expect("solution");
    assert!(!solution.steps.is_empty());
    assert!(!solution.answer.is_empty());
}
