use std::collections::HashMap;

use tutor_core::model::{HintReveal, ProblemBatch, ProblemId, Solution};

/// Display shape for one problem card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemCardVm {
    pub id: ProblemId,
    pub title: String,
    pub prompt: String,
    pub difficulty_label: String,
}

#[must_use]
pub fn map_problem_cards(batch: &ProblemBatch) -> Vec<ProblemCardVm> {
    batch
        .problems
        .iter()
        .enumerate()
        .map(|(index, problem)| ProblemCardVm {
            id: problem.id,
            title: format!("Problem {}", index + 1),
            prompt: problem.prompt.clone(),
            difficulty_label: format!(
                "Difficulty: {}",
                problem.difficulty_or(batch.requested_difficulty).label()
            ),
        })
        .collect()
}

/// A hint as shown in a problem's hint list. Reveals append; earlier reveals
/// are never replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedHintVm {
    pub title: String,
    pub body: String,
    pub missing: bool,
}

#[must_use]
pub fn map_hint_reveal(reveal: &HintReveal) -> RevealedHintVm {
    match reveal {
        HintReveal::Hint { level, text } => RevealedHintVm {
            title: format!("Hint {}:", level.number()),
            body: text.clone(),
            missing: false,
        },
        HintReveal::Unavailable { level, available } => RevealedHintVm {
            title: format!("Hint {}:", level.number()),
            body: format!("No hint available at this level (the tutor provided {available})."),
            missing: true,
        },
    }
}

/// Append a reveal to a problem's on-screen hint list. Reveals accumulate;
/// earlier entries stay put, and other problems' lists are untouched.
pub fn append_hint_reveal(
    hints: &mut HashMap<ProblemId, Vec<RevealedHintVm>>,
    problem_id: ProblemId,
    reveal: &HintReveal,
) {
    hints
        .entry(problem_id)
        .or_default()
        .push(map_hint_reveal(reveal));
}

/// Display shape for a worked solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionVm {
    pub steps: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[must_use]
pub fn map_solution(solution: &Solution) -> SolutionVm {
    SolutionVm {
        steps: solution
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect(),
        answer: solution.answer.clone(),
        explanation: solution.explanation.clone(),
    }
}
