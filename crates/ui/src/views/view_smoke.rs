use std::sync::Arc;

use api::InMemoryBackend;
use tutor_core::model::ProgressRecord;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_backend};

#[tokio::test(flavor = "current_thread")]
async fn students_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Students);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No students yet"),
        "missing empty state in {html}"
    );
    assert!(html.contains("Add Student"), "missing add button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn students_view_smoke_renders_roster_cards() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.seed_student("Ada Lovelace");
    backend.seed_student("Blaise Pascal");

    let mut harness = setup_view_harness_with_backend(ViewKind::Students, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Ada Lovelace"), "missing first card in {html}");
    assert!(
        html.contains("Blaise Pascal"),
        "missing second card in {html}"
    );
    assert!(html.contains("Mastery"), "missing mastery badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn students_view_smoke_renders_error_state() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.set_failing(true);

    let mut harness = setup_view_harness_with_backend(ViewKind::Students, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_generation_form() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Practice Problems"),
        "missing title in {html}"
    );
    assert!(
        html.contains("Generate Problems"),
        "missing generate button in {html}"
    );
    assert!(
        html.contains("Enter a topic to generate practice problems."),
        "missing idle hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_lists_seeded_students() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.seed_student("Ada Lovelace");
    backend.set_progress(vec![ProgressRecord {
        topic: "fractions".to_string(),
        mastery_score: 72.0,
        strengths: vec!["simplifying".to_string()],
        target_areas: vec!["mixed numbers".to_string()],
        recommendations: vec!["daily drills".to_string()],
    }]);

    let mut harness = setup_view_harness_with_backend(ViewKind::Progress, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Ada Lovelace"),
        "missing student option in {html}"
    );
    assert!(
        html.contains("View Progress"),
        "missing load button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_form_with_roster() {
    let backend = Arc::new(InMemoryBackend::new());
    backend.seed_student("Ada Lovelace");

    let mut harness = setup_view_harness_with_backend(ViewKind::Lessons, backend);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Ada Lovelace"),
        "missing student option in {html}"
    );
    assert!(
        html.contains("Generate Lesson Plan"),
        "missing generate button in {html}"
    );
    assert!(
        html.contains("Unit Outline"),
        "missing outline field in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn diagnostic_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Diagnostic);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Diagnostic Assessment"),
        "missing title in {html}"
    );
    assert!(
        html.contains("Generate Diagnostic"),
        "missing generate button in {html}"
    );
    assert!(
        html.contains("Enter a topic to generate a placement quiz."),
        "missing idle hint in {html}"
    );
}
