use std::collections::HashMap;

use dioxus::prelude::*;

use tutor_core::model::{Difficulty, HintLevel, ProblemId};

use crate::context::AppContext;
use crate::views::alert::{Alert, AlertBanner, AlertKind, push_alert};
use crate::views::{ViewError, ViewState};
use crate::vm::{
    ProblemCardVm, RevealedHintVm, SolutionVm, append_hint_reveal, map_problem_cards, map_solution,
};

#[component]
pub fn PracticeView() -> Element {
    let alert = use_signal(|| None::<Alert>);
    let mut topic = use_signal(String::new);
    let mut difficulty = use_signal(|| Difficulty::Medium);
    let mut count = use_signal(|| "3".to_string());
    let mut busy = use_signal(|| false);
    let mut panel = use_signal(|| ViewState::<Vec<ProblemCardVm>>::Idle);
    let hints = use_signal(HashMap::<ProblemId, Vec<RevealedHintVm>>::new);
    let solutions = use_signal(HashMap::<ProblemId, ViewState<SolutionVm>>::new);

    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();

    let generate = {
        let practice = practice.clone();
        move |_| {
            if busy() {
                return;
            }
            if topic().trim().is_empty() {
                push_alert(alert, AlertKind::Warning, "Please enter a topic");
                return;
            }
            let requested_count = count().parse::<u32>().unwrap_or(3).clamp(1, 10);
            let practice = practice.clone();
            let mut hints = hints;
            let mut solutions = solutions;
            spawn(async move {
                busy.set(true);
                panel.set(ViewState::Loading);
                match practice
                    .generate_batch(&topic(), difficulty(), requested_count)
                    .await
                {
                    Ok(batch) => {
                        hints.set(HashMap::new());
                        solutions.set(HashMap::new());
                        panel.set(ViewState::Ready(map_problem_cards(&batch)));
                    }
                    Err(_) => panel.set(ViewState::Error(ViewError::Unknown)),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div { class: "page practice-page",
            AlertBanner { slot: alert }
            header { class: "view-header",
                h2 { class: "view-title", "Practice Problems" }
                p { class: "view-subtitle", "Generate adaptive problems with tiered hints." }
            }
            div { class: "view-divider" }
            div { class: "form-row",
                label { class: "form-field",
                    span { "Topic" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. fractions",
                        value: "{topic()}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                label { class: "form-field",
                    span { "Difficulty" }
                    select {
                        value: "{difficulty()}",
                        onchange: move |evt| {
                            if let Ok(parsed) = evt.value().parse::<Difficulty>() {
                                difficulty.set(parsed);
                            }
                        },
                        for tier in Difficulty::ALL {
                            option { value: "{tier}", "{tier.label()}" }
                        }
                    }
                }
                label { class: "form-field",
                    span { "Count" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "10",
                        value: "{count()}",
                        oninput: move |evt| count.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: generate,
                    if busy() { "Generating..." } else { "Generate Problems" }
                }
            }
            match panel() {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Enter a topic to generate practice problems." }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Generating problems..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-error", "Error generating problems. {err.message()}" }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty-state", "No problems generated. Please try again." }
                    } else {
                        div { class: "problem-list",
                            for card in cards.iter().cloned() {
                                ProblemCard { card, alert, hints, solutions }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProblemCard(
    card: ProblemCardVm,
    alert: Signal<Option<Alert>>,
    hints: Signal<HashMap<ProblemId, Vec<RevealedHintVm>>>,
    solutions: Signal<HashMap<ProblemId, ViewState<SolutionVm>>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let problem_id = card.id;
    let revealed = hints().get(&problem_id).cloned().unwrap_or_default();
    let solution_state = solutions()
        .get(&problem_id)
        .cloned()
        .unwrap_or(ViewState::Idle);

    let hint_buttons = HintLevel::ALL.into_iter().map(|level| {
        let practice = ctx.practice();
        let mut hints = hints;
        rsx! {
            button {
                class: "btn btn-hint",
                r#type: "button",
                onclick: move |_| {
                    let practice = practice.clone();
                    spawn(async move {
                        match practice.reveal_hint(problem_id, level).await {
                            Ok(reveal) => {
                                hints.with_mut(|map| append_hint_reveal(map, problem_id, &reveal));
                            }
                            Err(_) => {
                                push_alert(alert, AlertKind::Error, "Error generating hints");
                            }
                        }
                    });
                },
                "💡 {level}"
            }
        }
    });

    let solution_button = {
        let practice = ctx.practice();
        let mut solutions = solutions;
        rsx! {
            button {
                class: "btn btn-info",
                r#type: "button",
                onclick: move |_| {
                    let practice = practice.clone();
                    spawn(async move {
                        solutions.with_mut(|map| {
                            map.insert(problem_id, ViewState::Loading);
                        });
                        let state = match practice.solution(problem_id).await {
                            Ok(solution) => ViewState::Ready(map_solution(&solution)),
                            Err(_) => ViewState::Error(ViewError::Unknown),
                        };
                        solutions.with_mut(|map| {
                            map.insert(problem_id, state);
                        });
                    });
                },
                "✓ Show Solution"
            }
        }
    };

    rsx! {
        div { class: "problem-card",
            h4 { class: "problem-title", "{card.title}" }
            p { class: "problem-prompt", "{card.prompt}" }
            span { class: "badge badge--difficulty", "{card.difficulty_label}" }
            div { class: "problem-actions",
                {hint_buttons}
                {solution_button}
            }
            if !revealed.is_empty() {
                div { class: "hint-list",
                    for hint in revealed.iter() {
                        div {
                            class: if hint.missing { "hint-box hint-box--missing" } else { "hint-box" },
                            strong { "{hint.title} " }
                            "{hint.body}"
                        }
                    }
                }
            }
            match solution_state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "loading loading--inline", "Generating solution..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "panel-error", "Error generating solution" }
                },
                ViewState::Ready(solution) => rsx! {
                    div { class: "solution-box",
                        h5 { "Step-by-Step Solution:" }
                        for step in solution.steps.iter() {
                            div { class: "solution-step", "{step}" }
                        }
                        p { class: "solution-answer",
                            strong { "Answer: " }
                            "{solution.answer}"
                        }
                        p { class: "solution-explanation",
                            em { "{solution.explanation}" }
                        }
                    }
                },
            }
        }
    }
}
