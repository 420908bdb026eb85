use std::collections::HashMap;

use dioxus::prelude::*;

use services::{DiagnosticError, DiagnosticService};
use tutor_core::model::DiagnosticQuestion;

use crate::context::AppContext;
use crate::views::alert::{Alert, AlertBanner, AlertKind, push_alert};
use crate::views::{ViewError, ViewState};
use crate::vm::{FeedbackVm, map_feedback, map_questions};

#[derive(Clone, Debug, PartialEq)]
struct DiagnosticData {
    topic: String,
    // Kept alongside the display shapes: answer checking reads the embedded
    // correct answer, no request involved.
    questions: Vec<DiagnosticQuestion>,
}

#[component]
pub fn DiagnosticView() -> Element {
    let alert = use_signal(|| None::<Alert>);
    let mut topic = use_signal(String::new);
    let mut num_questions = use_signal(|| "5".to_string());
    let mut busy = use_signal(|| false);
    let mut panel = use_signal(|| ViewState::<DiagnosticData>::Idle);
    let mut feedback = use_signal(HashMap::<usize, FeedbackVm>::new);

    let ctx = use_context::<AppContext>();
    let diagnostics = ctx.diagnostics();

    let generate = move |_| {
        if busy() {
            return;
        }
        // Captured before the request so edits made while it is in flight
        // cannot change what the heading reports.
        let requested_topic = topic().trim().to_string();
        if requested_topic.is_empty() {
            push_alert(alert, AlertKind::Warning, "Please enter a topic");
            return;
        }
        let requested = num_questions().parse::<u32>().unwrap_or(5).clamp(1, 10);
        let diagnostics = diagnostics.clone();
        spawn(async move {
            busy.set(true);
            panel.set(ViewState::Loading);
            match build_assessment(&diagnostics, requested_topic, requested).await {
                Ok(data) => {
                    feedback.set(HashMap::new());
                    panel.set(ViewState::Ready(data));
                }
                Err(_) => panel.set(ViewState::Error(ViewError::Unknown)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page diagnostic-page",
            AlertBanner { slot: alert }
            header { class: "view-header",
                h2 { class: "view-title", "Diagnostic Assessment" }
            }
            div { class: "view-divider" }
            div { class: "form-row",
                label { class: "form-field",
                    span { "Topic" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. geometry",
                        value: "{topic()}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                label { class: "form-field",
                    span { "Questions" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "10",
                        value: "{num_questions()}",
                        oninput: move |evt| num_questions.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: generate,
                    if busy() { "Generating..." } else { "Generate Diagnostic" }
                }
            }
            match panel() {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Enter a topic to generate a placement quiz." }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Generating diagnostic assessment..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-error", "Error generating diagnostic. {err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.questions.is_empty() {
                        p { class: "empty-state", "No questions generated. Please try again." }
                    } else {
                        div { class: "diagnostic-panel",
                            h3 { class: "diagnostic-title", "Diagnostic Assessment: {data.topic}" }
                            for (index, vm) in map_questions(&data.questions).into_iter().enumerate() {
                                div { class: "diagnostic-question",
                                    h5 { "{vm.heading}" }
                                    p { "{vm.question}" }
                                    div { class: "option-row",
                                        for option in vm.options.iter().cloned() {
                                            QuestionOption {
                                                option: option.clone(),
                                                question: data.questions[index].clone(),
                                                index,
                                                feedback,
                                            }
                                        }
                                    }
                                    if let Some(verdict) = feedback().get(&index) {
                                        p {
                                            class: if verdict.correct { "feedback feedback--correct" } else { "feedback feedback--incorrect" },
                                            "{verdict.message}"
                                        }
                                    }
                                    small { class: "question-meta", "{vm.meta_label}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Fetch an assessment and pair it with the topic it was requested for.
async fn build_assessment(
    diagnostics: &DiagnosticService,
    topic: String,
    num_questions: u32,
) -> Result<DiagnosticData, DiagnosticError> {
    let assessment = diagnostics.generate(&topic, num_questions).await?;
    Ok(DiagnosticData {
        topic,
        questions: assessment.questions,
    })
}

#[component]
fn QuestionOption(
    option: String,
    question: DiagnosticQuestion,
    index: usize,
    feedback: Signal<HashMap<usize, FeedbackVm>>,
) -> Element {
    let mut feedback = feedback;
    let selected = option.clone();
    rsx! {
        button {
            class: "btn btn-option",
            r#type: "button",
            onclick: move |_| {
                let verdict = map_feedback(&question.check(&selected));
                feedback.with_mut(|map| {
                    map.insert(index, verdict);
                });
            },
            "{option}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use api::InMemoryBackend;

    #[tokio::test]
    async fn assessment_data_carries_the_requested_topic() {
        let service = DiagnosticService::new(Arc::new(InMemoryBackend::new()));
        let data = build_assessment(&service, "geometry".to_string(), 2)
            .await
            .unwrap();
        assert_eq!(data.topic, "geometry");
        assert_eq!(data.questions.len(), 2);
    }

    #[tokio::test]
    async fn failed_generation_surfaces_the_error() {
        let backend = Arc::new(InMemoryBackend::new());
        backend.set_failing(true);
        let service = DiagnosticService::new(backend);
        assert!(
            build_assessment(&service, "geometry".to_string(), 2)
                .await
                .is_err()
        );
    }
}
