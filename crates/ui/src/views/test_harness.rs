use std::sync::Arc;

use api::InMemoryBackend;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, DiagnosticService, LessonService, PracticeService, ProgressService,
    StudentService,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{DiagnosticView, LessonsView, PracticeView, ProgressView, StudentsView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn students(&self) -> Arc<StudentService> {
        self.services.students()
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn diagnostics(&self) -> Arc<DiagnosticService> {
        self.services.diagnostics()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Students,
    Practice,
    Progress,
    Lessons,
    Diagnostic,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Students => rsx! { StudentsView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Diagnostic => rsx! { DiagnosticView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<InMemoryBackend>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let pending resources/futures settle, then flush the DOM.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_backend(view, Arc::new(InMemoryBackend::new()))
}

pub fn setup_view_harness_with_backend(
    view: ViewKind,
    backend: Arc<InMemoryBackend>,
) -> ViewHarness {
    let services = AppServices::with_backend(Arc::clone(&backend) as _);
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, backend }
}
