use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use tutor_core::model::{
    DiagnosticAssessment, LessonPlan, ProgressRecord, Solution, Student, StudentDraft, StudentId,
};

use crate::backend::{
    DiagnosticRequest, GeneratedProblem, HintRequest, LessonPlanRequest, ProblemRequest,
    SolutionRequest, TutorBackend,
};
use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001/api";

/// Where the backend lives. One base path, no credentials.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `TUTOR_API_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("TUTOR_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// The reqwest-backed `TutorBackend`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = self.client.get(&url).send().await.inspect_err(|err| {
            tracing::warn!(%url, error = %err, "backend GET failed");
        })?;
        if !response.status().is_success() {
            tracing::warn!(%url, status = %response.status(), "backend GET returned error status");
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .inspect_err(|err| {
                tracing::warn!(%url, error = %err, "backend POST failed");
            })?;
        if !response.status().is_success() {
            tracing::warn!(%url, status = %response.status(), "backend POST returned error status");
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ProblemsResponse {
    #[serde(default)]
    problems: Vec<GeneratedProblem>,
}

#[derive(Debug, Deserialize)]
struct HintsResponse {
    #[serde(default)]
    hints: Vec<String>,
}

#[async_trait]
impl TutorBackend for HttpBackend {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("students").await
    }

    async fn create_student(&self, draft: &StudentDraft) -> Result<(), ApiError> {
        let url = self.config.endpoint("students");
        let response = self.client.post(&url).json(draft).send().await?;
        if !response.status().is_success() {
            tracing::warn!(%url, status = %response.status(), "student creation rejected");
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(())
    }

    async fn generate_problems(
        &self,
        request: &ProblemRequest,
    ) -> Result<Vec<GeneratedProblem>, ApiError> {
        let response: ProblemsResponse = self.post_json("problems", request).await?;
        Ok(response.problems)
    }

    async fn generate_hints(&self, request: &HintRequest) -> Result<Vec<String>, ApiError> {
        let response: HintsResponse = self.post_json("hints", request).await?;
        Ok(response.hints)
    }

    async fn generate_solution(&self, request: &SolutionRequest) -> Result<Solution, ApiError> {
        self.post_json("solutions", request).await
    }

    async fn student_progress(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<ProgressRecord>, ApiError> {
        self.get_json(&format!("progress/{student_id}")).await
    }

    async fn generate_lesson_plan(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlan, ApiError> {
        self.post_json("lesson-plans", request).await
    }

    async fn generate_diagnostic(
        &self,
        request: &DiagnosticRequest,
    ) -> Result<DiagnosticAssessment, ApiError> {
        self.post_json("diagnostic", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:8001/api/");
        assert_eq!(
            config.endpoint("students"),
            "http://localhost:8001/api/students"
        );
    }

    #[test]
    fn default_config_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8001/api");
    }
}
