use dioxus::prelude::*;

use tutor_core::model::StudentId;

use crate::context::AppContext;
use crate::views::alert::{Alert, AlertBanner, AlertKind, push_alert};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressCardVm, map_progress_cards, map_student_options};

#[component]
pub fn ProgressView() -> Element {
    let alert = use_signal(|| None::<Alert>);
    let mut selected = use_signal(|| None::<StudentId>);
    let mut busy = use_signal(|| false);
    let mut panel = use_signal(|| ViewState::<Vec<ProgressCardVm>>::Idle);

    let ctx = use_context::<AppContext>();
    let students = ctx.students();
    let progress = ctx.progress();

    let roster = use_resource(move || {
        let students = students.clone();
        async move {
            let list = students.roster().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_student_options(&list))
        }
    });
    let roster_state = view_state_from_resource(&roster);

    let load = move |_| {
        if busy() {
            return;
        }
        let Some(student_id) = selected() else {
            push_alert(alert, AlertKind::Warning, "Please select a student");
            return;
        };
        let progress = progress.clone();
        spawn(async move {
            busy.set(true);
            panel.set(ViewState::Loading);
            match progress.for_student(student_id).await {
                Ok(records) => panel.set(ViewState::Ready(map_progress_cards(&records))),
                Err(_) => panel.set(ViewState::Error(ViewError::Unknown)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page progress-page",
            AlertBanner { slot: alert }
            header { class: "view-header",
                h2 { class: "view-title", "Progress" }
            }
            div { class: "view-divider" }
            div { class: "form-row",
                label { class: "form-field",
                    span { "Student" }
                    select {
                        onchange: move |evt| {
                            selected.set(evt.value().parse::<StudentId>().ok());
                        },
                        option { value: "", "Select a student" }
                        if let ViewState::Ready(options) = &roster_state {
                            for opt in options.iter() {
                                option { value: "{opt.id}", "{opt.name}" }
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: load,
                    "View Progress"
                }
            }
            match panel() {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Pick a student to see their progress." }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading progress..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-error", "Error loading progress. {err.message()}" }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty-state", "No progress data available yet." }
                    } else {
                        div { class: "progress-list",
                            for card in cards.iter().cloned() {
                                ProgressCard { card }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProgressCard(card: ProgressCardVm) -> Element {
    rsx! {
        div { class: "progress-card",
            div { class: "progress-score",
                div { class: "progress-score-value", "{card.score_label}" }
                div { class: "progress-score-caption", "Mastery Score" }
            }
            div { class: "progress-detail",
                h4 { "{card.topic}" }
                div { class: "progress-section",
                    strong { "✓ Strengths:" }
                    ul {
                        for item in card.strengths.iter() {
                            li { "{item}" }
                        }
                    }
                }
                div { class: "progress-section",
                    strong { "⚠ Areas to Improve:" }
                    ul {
                        for item in card.target_areas.iter() {
                            li { "{item}" }
                        }
                    }
                }
                div { class: "progress-section",
                    strong { "→ Recommendations:" }
                    ul {
                        for item in card.recommendations.iter() {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
