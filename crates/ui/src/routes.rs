use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DiagnosticView, LessonsView, PracticeView, ProgressView, StudentsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StudentsView)] Students {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/diagnostic", DiagnosticView)] Diagnostic {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Tutor Console" }
            ul {
                li { Link { to: Route::Students {}, "Students" } }
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Progress {}, "Progress" } }
                li { Link { to: Route::Lessons {}, "Lesson Plans" } }
                li { Link { to: Route::Diagnostic {}, "Diagnostic" } }
            }
        }
    }
}
