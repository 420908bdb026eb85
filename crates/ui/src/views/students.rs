use dioxus::prelude::*;

use tutor_core::model::StudentDraft;

use crate::context::AppContext;
use crate::views::alert::{Alert, AlertBanner, AlertKind, push_alert};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StudentCardVm, map_student_card};

#[derive(Clone, Debug, Default, PartialEq)]
struct StudentForm {
    name: String,
    age_group: String,
    grade_level: String,
    learning_style: String,
    pacing_pref: String,
    goals: String,
    accessibility_needs: String,
}

impl StudentForm {
    fn into_draft(self) -> StudentDraft {
        StudentDraft {
            name: self.name.trim().to_string(),
            age_group: non_empty(self.age_group),
            grade_level: non_empty(self.grade_level),
            learning_style: non_empty(self.learning_style),
            pacing_pref: non_empty(self.pacing_pref),
            goals: non_empty(self.goals),
            accessibility_needs: non_empty(self.accessibility_needs),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn StudentsView() -> Element {
    let ctx = use_context::<AppContext>();
    let students = ctx.students();
    let alert = use_signal(|| None::<Alert>);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(StudentForm::default);
    let mut saving = use_signal(|| false);

    let students_for_resource = students.clone();
    let resource = use_resource(move || {
        let students = students_for_resource.clone();
        async move {
            let roster = students.roster().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(roster.iter().map(map_student_card).collect::<Vec<_>>())
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page students-page",
            AlertBanner { slot: alert }
            header { class: "view-header",
                h2 { class: "view-title", "Students" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| show_form.set(true),
                    "Add Student"
                }
            }
            div { class: "view-divider" }
            match state {
                // The roster resource never idles by itself; treat both
                // pre-value states as loading.
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading students..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "panel-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty-state", "No students yet. Add your first student!" }
                    } else {
                        div { class: "card-grid",
                            for card in cards.iter().cloned() {
                                StudentCard { card }
                            }
                        }
                    }
                },
            }
            if show_form() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| show_form.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Add Student" }
                        StudentFormFields { form }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| show_form.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: saving(),
                                onclick: move |_| {
                                    if saving() {
                                        return;
                                    }
                                    if form().name.trim().is_empty() {
                                        push_alert(alert, AlertKind::Warning, "Please enter student name");
                                        return;
                                    }
                                    let students = students.clone();
                                    let mut resource = resource;
                                    spawn(async move {
                                        saving.set(true);
                                        let draft = form().into_draft();
                                        match students.add_student(&draft).await {
                                            Ok(()) => {
                                                push_alert(
                                                    alert,
                                                    AlertKind::Success,
                                                    "Student added successfully!",
                                                );
                                                form.set(StudentForm::default());
                                                show_form.set(false);
                                                resource.restart();
                                            }
                                            Err(_) => {
                                                push_alert(alert, AlertKind::Error, "Error saving student");
                                            }
                                        }
                                        saving.set(false);
                                    });
                                },
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentCard(card: StudentCardVm) -> Element {
    rsx! {
        div { class: "student-card",
            h4 { class: "student-card-name", "{card.name}" }
            p { class: "student-card-field",
                strong { "Grade: " }
                "{card.grade_label}"
            }
            p { class: "student-card-field",
                strong { "Learning Style: " }
                "{card.style_label}"
            }
            p { class: "student-card-field",
                strong { "Pacing: " }
                "{card.pacing_label}"
            }
            span { class: "badge badge--mastery", "{card.mastery_label}" }
        }
    }
}

#[component]
fn StudentFormFields(form: Signal<StudentForm>) -> Element {
    rsx! {
        div { class: "form-grid",
            label { class: "form-field",
                span { "Name" }
                input {
                    r#type: "text",
                    value: "{form().name}",
                    oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                }
            }
            label { class: "form-field",
                span { "Age Group" }
                input {
                    r#type: "text",
                    value: "{form().age_group}",
                    oninput: move |evt| form.with_mut(|f| f.age_group = evt.value()),
                }
            }
            label { class: "form-field",
                span { "Grade Level" }
                input {
                    r#type: "text",
                    value: "{form().grade_level}",
                    oninput: move |evt| form.with_mut(|f| f.grade_level = evt.value()),
                }
            }
            label { class: "form-field",
                span { "Learning Style" }
                select {
                    value: "{form().learning_style}",
                    onchange: move |evt| form.with_mut(|f| f.learning_style = evt.value()),
                    option { value: "", "Select..." }
                    option { value: "visual", "Visual" }
                    option { value: "auditory", "Auditory" }
                    option { value: "kinesthetic", "Kinesthetic" }
                    option { value: "reading", "Reading" }
                    option { value: "mixed", "Mixed" }
                }
            }
            label { class: "form-field",
                span { "Pacing" }
                select {
                    value: "{form().pacing_pref}",
                    onchange: move |evt| form.with_mut(|f| f.pacing_pref = evt.value()),
                    option { value: "", "Select..." }
                    option { value: "slow", "Slow" }
                    option { value: "medium", "Medium" }
                    option { value: "fast", "Fast" }
                }
            }
            label { class: "form-field form-field--wide",
                span { "Goals" }
                textarea {
                    value: "{form().goals}",
                    oninput: move |evt| form.with_mut(|f| f.goals = evt.value()),
                }
            }
            label { class: "form-field form-field--wide",
                span { "Accessibility Needs" }
                textarea {
                    value: "{form().accessibility_needs}",
                    oninput: move |evt| form.with_mut(|f| f.accessibility_needs = evt.value()),
                }
            }
        }
    }
}
