use dioxus::prelude::*;

use services::LessonPlanInput;
use tutor_core::model::StudentId;

use crate::context::AppContext;
use crate::views::alert::{Alert, AlertBanner, AlertKind, push_alert};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonPlanVm, map_lesson_plan, map_student_options};

#[component]
pub fn LessonsView() -> Element {
    let alert = use_signal(|| None::<Alert>);
    let mut selected = use_signal(|| None::<StudentId>);
    let mut topic = use_signal(String::new);
    let mut outline = use_signal(String::new);
    let mut duration = use_signal(|| "45".to_string());
    let mut busy = use_signal(|| false);
    let mut panel = use_signal(|| ViewState::<LessonPlanVm>::Idle);

    let ctx = use_context::<AppContext>();
    let students = ctx.students();
    let lessons = ctx.lessons();

    let roster = use_resource(move || {
        let students = students.clone();
        async move {
            let list = students.roster().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_student_options(&list))
        }
    });
    let roster_state = view_state_from_resource(&roster);

    let generate = move |_| {
        if busy() {
            return;
        }
        if selected().is_none() || topic().trim().is_empty() || outline().trim().is_empty() {
            push_alert(alert, AlertKind::Warning, "Please fill in all fields");
            return;
        }
        let input = LessonPlanInput {
            student_id: selected(),
            topic: topic(),
            outline: outline(),
            session_length: duration().parse().unwrap_or(45),
        };
        let lessons = lessons.clone();
        spawn(async move {
            busy.set(true);
            panel.set(ViewState::Loading);
            let plan_topic = input.topic.trim().to_string();
            match lessons.generate(input).await {
                Ok(plan) => panel.set(ViewState::Ready(map_lesson_plan(&plan, &plan_topic))),
                Err(_) => panel.set(ViewState::Error(ViewError::Unknown)),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page lessons-page",
            AlertBanner { slot: alert }
            header { class: "view-header",
                h2 { class: "view-title", "Lesson Plans" }
            }
            div { class: "view-divider" }
            div { class: "form-grid",
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
                label { class: "form-field",
                    span { "Topic" }
                    input {
                        r#type: "text",
                        value: "{topic()}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                }
                label { class: "form-field form-field--wide",
                    span { "Unit Outline (comma-separated)" }
                    input {
                        r#type: "text",
                        placeholder: "intro, guided practice, review",
                        value: "{outline()}",
                        oninput: move |evt| outline.set(evt.value()),
                    }
                }
                label { class: "form-field",
                    span { "Session Length (minutes)" }
                    input {
                        r#type: "number",
                        min: "10",
                        value: "{duration()}",
                        oninput: move |evt| duration.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: generate,
                    if busy() { "Generating..." } else { "Generate Lesson Plan" }
                }
            }
            match panel() {
                ViewState::Idle => rsx! {
                    p { class: "view-hint", "Fill in the form to generate a lesson plan." }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Generating lesson plan..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-error", "Error generating lesson plan. {err.message()}" }
                },
                ViewState::Ready(plan) => rsx! {
                    LessonPlanCard { plan }
                },
            }
        }
    }
}

#[component]
fn LessonPlanCard(plan: LessonPlanVm) -> Element {
    rsx! {
        div { class: "lesson-plan",
            h3 { class: "lesson-plan-title", "{plan.title}" }
            h5 { "Learning Objectives:" }
            for objective in plan.objectives.iter() {
                div { class: "lesson-objective", "{objective}" }
            }
            h5 { "Activities:" }
            for activity in plan.activities.iter() {
                div { class: "activity-item",
                    div { class: "activity-main",
                        strong { "{activity.heading}" }
                        p { "{activity.description}" }
                    }
                    span { class: "badge badge--time", "{activity.time_label}" }
                }
            }
            h5 { "Materials Needed:" }
            ul {
                for material in plan.materials.iter() {
                    li { "{material}" }
                }
            }
        }
    }
}
