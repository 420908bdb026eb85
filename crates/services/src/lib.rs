#![forbid(unsafe_code)]

pub mod app_services;
pub mod diagnostic_service;
pub mod error;
pub mod lesson_service;
pub mod practice_service;
pub mod progress_service;
pub mod student_service;

pub use app_services::AppServices;
pub use diagnostic_service::DiagnosticService;
pub use error::{
    DiagnosticError, LessonError, PracticeError, ProgressError, StudentServiceError,
};
pub use lesson_service::{LessonService, LessonPlanInput};
pub use practice_service::PracticeService;
pub use progress_service::ProgressService;
pub use student_service::StudentService;
