use serde::{Deserialize, Serialize};

/// One multiple-choice diagnostic question.
///
/// The correct answer ships with the question; checking a selection is pure
/// string comparison and never touches the network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub skill_tested: String,
    #[serde(default)]
    pub difficulty: String,
}

impl DiagnosticQuestion {
    /// Compares a selected option against the embedded correct answer.
    #[must_use]
    pub fn check(&self, selected: &str) -> AnswerFeedback {
        if selected == self.correct_answer {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect {
                correct: self.correct_answer.clone(),
            }
        }
    }
}

/// Client-side verdict on a selected option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerFeedback {
    Correct,
    Incorrect { correct: String },
}

/// A generated set of placement questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticAssessment {
    #[serde(default)]
    pub questions: Vec<DiagnosticQuestion>,
}

impl DiagnosticAssessment {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
