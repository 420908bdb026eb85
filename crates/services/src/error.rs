//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;
use tutor_core::model::StudentError;

/// Errors emitted by `StudentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudentServiceError {
    #[error(transparent)]
    Validation(#[from] StudentError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("no problem with that id in the current batch")]
    UnknownProblem,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error("select a student first")]
    MissingStudent,
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("unit outline must not be empty")]
    EmptyOutline,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `DiagnosticService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiagnosticError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error(transparent)]
    Api(#[from] ApiError),
}
