use tutor_core::model::{AnswerFeedback, DiagnosticQuestion};

/// Display shape for one diagnostic question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub question: String,
    pub options: Vec<String>,
    pub meta_label: String,
}

#[must_use]
pub fn map_questions(questions: &[DiagnosticQuestion]) -> Vec<QuestionVm> {
    questions
        .iter()
        .enumerate()
        .map(|(index, q)| QuestionVm {
            heading: format!("Question {}:", index + 1),
            question: q.question.clone(),
            options: q.options.clone(),
            meta_label: format!("Tests: {} | Difficulty: {}", q.skill_tested, q.difficulty),
        })
        .collect()
}

/// Inline verdict shown under a question once an option is picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: String,
}

#[must_use]
pub fn map_feedback(feedback: &AnswerFeedback) -> FeedbackVm {
    match feedback {
        AnswerFeedback::Correct => FeedbackVm {
            correct: true,
            message: "✓ Correct!".to_string(),
        },
        AnswerFeedback::Incorrect { correct } => FeedbackVm {
            correct: false,
            message: format!("✗ Incorrect. The correct answer is: {correct}"),
        },
    }
}
