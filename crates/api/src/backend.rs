use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tutor_core::model::{
    Difficulty, DiagnosticAssessment, LessonPlan, ProgressRecord, Solution, Student, StudentDraft,
    StudentId,
};

use crate::error::ApiError;

/// Request body for `POST /problems`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: u32,
}

/// Request body for `POST /hints`. One request returns all hint levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HintRequest {
    pub problem: String,
    pub difficulty: Difficulty,
    pub topic: String,
}

/// Request body for `POST /solutions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionRequest {
    pub problem: String,
    pub topic: String,
}

/// Request body for `POST /lesson-plans`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LessonPlanRequest {
    pub student_id: StudentId,
    pub topic: String,
    pub unit_outline: Vec<String>,
    pub session_length: u32,
}

/// Request body for `POST /diagnostic`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRequest {
    pub topic: String,
    pub num_questions: u32,
}

/// A problem as the backend generates it: prompt plus optional tier, no id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProblem {
    pub prompt: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// The fixed JSON contract the tutor backend exposes.
///
/// `HttpBackend` is the real implementation; `InMemoryBackend` is a
/// deterministic fake for tests and offline work.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// `GET /students`
    async fn list_students(&self) -> Result<Vec<Student>, ApiError>;

    /// `POST /students`. Success is any 2xx; the created record is not needed.
    async fn create_student(&self, draft: &StudentDraft) -> Result<(), ApiError>;

    /// `POST /problems`
    async fn generate_problems(
        &self,
        request: &ProblemRequest,
    ) -> Result<Vec<GeneratedProblem>, ApiError>;

    /// `POST /hints`. All hints for one problem in a single response.
    async fn generate_hints(&self, request: &HintRequest) -> Result<Vec<String>, ApiError>;

    /// `POST /solutions`
    async fn generate_solution(&self, request: &SolutionRequest) -> Result<Solution, ApiError>;

    /// `GET /progress/{student_id}`
    async fn student_progress(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<ProgressRecord>, ApiError>;

    /// `POST /lesson-plans`
    async fn generate_lesson_plan(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlan, ApiError>;

    /// `POST /diagnostic`
    async fn generate_diagnostic(
        &self,
        request: &DiagnosticRequest,
    ) -> Result<DiagnosticAssessment, ApiError>;
}
