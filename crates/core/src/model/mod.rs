mod diagnostic;
mod hint;
mod ids;
mod lesson;
mod problem;
mod progress;
mod solution;
mod student;

pub use diagnostic::{AnswerFeedback, DiagnosticAssessment, DiagnosticQuestion};
pub use hint::{HintLevel, HintReveal, HintSet};
pub use ids::{ParseIdError, ProblemId, StudentId};
pub use lesson::{Activity, LessonPlan};
pub use problem::{Difficulty, ParseDifficultyError, Problem, ProblemBatch};
pub use progress::ProgressRecord;
pub use solution::Solution;
pub use student::{Student, StudentDraft, StudentError};
