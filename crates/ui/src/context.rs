use std::sync::Arc;

use services::{
    DiagnosticService, LessonService, PracticeService, ProgressService, StudentService,
};

/// What the composition root (the `app` crate, or the test harness) provides
/// to the view layer.
pub trait UiApp: Send + Sync {
    fn students(&self) -> Arc<StudentService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn lessons(&self) -> Arc<LessonService>;
    fn diagnostics(&self) -> Arc<DiagnosticService>;
}

#[derive(Clone)]
pub struct AppContext {
    students: Arc<StudentService>,
    practice: Arc<PracticeService>,
    progress: Arc<ProgressService>,
    lessons: Arc<LessonService>,
    diagnostics: Arc<DiagnosticService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            students: app.students(),
            practice: app.practice(),
            progress: app.progress(),
            lessons: app.lessons(),
            diagnostics: app.diagnostics(),
        }
    }

    #[must_use]
    pub fn students(&self) -> Arc<StudentService> {
        Arc::clone(&self.students)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn diagnostics(&self) -> Arc<DiagnosticService> {
        Arc::clone(&self.diagnostics)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
