use std::sync::Arc;

use api::{ApiConfig, HttpBackend, TutorBackend};

use crate::diagnostic_service::DiagnosticService;
use crate::lesson_service::LessonService;
use crate::practice_service::PracticeService;
use crate::progress_service::ProgressService;
use crate::student_service::StudentService;

/// Assembles the per-concern services over one shared backend.
#[derive(Clone)]
pub struct AppServices {
    students: Arc<StudentService>,
    practice: Arc<PracticeService>,
    progress: Arc<ProgressService>,
    lessons: Arc<LessonService>,
    diagnostics: Arc<DiagnosticService>,
}

impl AppServices {
    /// Build services over an HTTP backend at the configured base URL.
    #[must_use]
    pub fn new_http(config: ApiConfig) -> Self {
        Self::with_backend(Arc::new(HttpBackend::new(config)))
    }

    /// Build services over any backend. Tests pass an `InMemoryBackend` here.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn TutorBackend>) -> Self {
        Self {
            students: Arc::new(StudentService::new(Arc::clone(&backend))),
            practice: Arc::new(PracticeService::new(Arc::clone(&backend))),
            progress: Arc::new(ProgressService::new(Arc::clone(&backend))),
            lessons: Arc::new(LessonService::new(Arc::clone(&backend))),
            diagnostics: Arc::new(DiagnosticService::new(backend)),
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
