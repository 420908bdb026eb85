use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use tutor_core::model::{
    Activity, DiagnosticAssessment, DiagnosticQuestion, LessonPlan, ProgressRecord, Solution,
    Student, StudentDraft, StudentId,
};

use crate::backend::{
    DiagnosticRequest, GeneratedProblem, HintRequest, LessonPlanRequest, ProblemRequest,
    SolutionRequest, TutorBackend,
};
use crate::error::ApiError;

#[derive(Default)]
struct State {
    students: Vec<Student>,
    hints: Vec<String>,
    progress: Vec<ProgressRecord>,
    hint_requests: Vec<HintRequest>,
    problem_requests: Vec<ProblemRequest>,
}

/// Deterministic `TutorBackend` fake for tests and offline prototyping.
///
/// Generated content is derived from the request so assertions can predict
/// it. Requests are logged so tests can count backend round trips.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every backend call fails with `ApiError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Replace the canned hint sequence returned for every hints request.
    pub fn set_hints(&self, hints: Vec<String>) {
        self.lock().hints = hints;
    }

    /// Replace the canned progress records.
    pub fn set_progress(&self, progress: Vec<ProgressRecord>) {
        self.lock().progress = progress;
    }

    /// Seed a student as if the backend already knew about them.
    pub fn seed_student(&self, name: &str) -> StudentId {
        let id = StudentId::new(Uuid::new_v4());
        self.lock().students.push(Student {
            id,
            name: name.to_string(),
            age_group: None,
            grade_level: Some("5".to_string()),
            learning_style: Some("mixed".to_string()),
            prior_mastery: 0.0,
            goals: None,
            pacing_pref: Some("medium".to_string()),
            accessibility_needs: None,
            created_at: None,
        });
        id
    }

    /// Number of hints requests the backend has served.
    #[must_use]
    pub fn hint_request_count(&self) -> usize {
        self.lock().hint_requests.len()
    }

    /// Number of problem-generation requests the backend has served.
    #[must_use]
    pub fn problem_request_count(&self) -> usize {
        self.lock().problem_requests.len()
    }

    /// Problem prompts the hints requests referred to, in call order.
    #[must_use]
    pub fn hinted_problems(&self) -> Vec<String> {
        self.lock()
            .hint_requests
            .iter()
            .map(|req| req.problem.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), ApiError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("backend marked as failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TutorBackend for InMemoryBackend {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.check_available()?;
        Ok(self.lock().students.clone())
    }

    async fn create_student(&self, draft: &StudentDraft) -> Result<(), ApiError> {
        self.check_available()?;
        let student = Student {
            id: StudentId::new(Uuid::new_v4()),
            name: draft.name.clone(),
            age_group: draft.age_group.clone(),
            grade_level: draft.grade_level.clone(),
            learning_style: draft.learning_style.clone(),
            prior_mastery: 0.0,
            goals: draft.goals.clone(),
            pacing_pref: draft.pacing_pref.clone(),
            accessibility_needs: draft.accessibility_needs.clone(),
            created_at: None,
        };
        self.lock().students.push(student);
        Ok(())
    }

    async fn generate_problems(
        &self,
        request: &ProblemRequest,
    ) -> Result<Vec<GeneratedProblem>, ApiError> {
        self.check_available()?;
        let mut state = self.lock();
        state.problem_requests.push(request.clone());
        let problems = (1..=request.count)
            .map(|n| GeneratedProblem {
                prompt: format!("{} practice problem {n}", request.topic),
                difficulty: Some(request.difficulty),
            })
            .collect();
        Ok(problems)
    }

    async fn generate_hints(&self, request: &HintRequest) -> Result<Vec<String>, ApiError> {
        self.check_available()?;
        let mut state = self.lock();
        state.hint_requests.push(request.clone());
        if state.hints.is_empty() {
            return Ok(vec![
                format!("Consider what you know about {}", request.topic),
                format!("Think about the {} level approach", request.difficulty),
                "Break the problem into smaller steps".to_string(),
            ]);
        }
        Ok(state.hints.clone())
    }

    async fn generate_solution(&self, request: &SolutionRequest) -> Result<Solution, ApiError> {
        self.check_available()?;
        Ok(Solution {
            steps: vec![
                format!("Restate the problem: {}", request.problem),
                format!("Apply what you know about {}", request.topic),
            ],
            answer: "42".to_string(),
            explanation: format!("Standard approach for {}", request.topic),
        })
    }

    async fn student_progress(
        &self,
        _student_id: StudentId,
    ) -> Result<Vec<ProgressRecord>, ApiError> {
        self.check_available()?;
        Ok(self.lock().progress.clone())
    }

    async fn generate_lesson_plan(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlan, ApiError> {
        self.check_available()?;
        Ok(LessonPlan {
            objectives: vec![format!("Understand the basics of {}", request.topic)],
            activities: request
                .unit_outline
                .iter()
                .map(|unit| Activity {
                    title: unit.clone(),
                    description: format!("Work through {unit} together"),
                    time_minutes: request.session_length / request.unit_outline.len().max(1) as u32,
                })
                .collect(),
            materials: vec!["Worksheet".to_string(), "Whiteboard".to_string()],
        })
    }

    async fn generate_diagnostic(
        &self,
        request: &DiagnosticRequest,
    ) -> Result<DiagnosticAssessment, ApiError> {
        self.check_available()?;
        let questions = (1..=request.num_questions)
            .map(|n| DiagnosticQuestion {
                question: format!("{} question {n}?", request.topic),
                options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                correct_answer: "B".to_string(),
                skill_tested: request.topic.clone(),
                difficulty: "medium".to_string(),
            })
            .collect();
        Ok(DiagnosticAssessment { questions })
    }
}
