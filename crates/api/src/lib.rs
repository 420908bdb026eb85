#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod http;
pub mod in_memory;

pub use backend::{
    DiagnosticRequest, GeneratedProblem, HintRequest, LessonPlanRequest, ProblemRequest,
    SolutionRequest, TutorBackend,
};
pub use error::ApiError;
pub use http::{ApiConfig, HttpBackend};
pub use in_memory::InMemoryBackend;
