use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ProblemId;

/// Difficulty tiers the backend understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in ascending order. Handy for select widgets.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The lowercase wire form (`easy`/`medium`/`hard`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty: {raw}")]
pub struct ParseDifficultyError {
    raw: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError { raw: s.to_string() }),
        }
    }
}

/// An ephemeral practice problem.
///
/// Problems have no server-side identity; the client assigns a `ProblemId`
/// when a batch arrives so later hint and solution requests can refer to a
/// stable key instead of a position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub prompt: String,
    pub difficulty: Option<Difficulty>,
}

impl Problem {
    /// Wraps a generated prompt with a fresh client-side identity.
    #[must_use]
    pub fn assign_id(prompt: String, difficulty: Option<Difficulty>) -> Self {
        Self {
            id: ProblemId::generate(),
            prompt,
            difficulty,
        }
    }

    /// The effective difficulty: the problem's own tier, or the batch default.
    #[must_use]
    pub fn difficulty_or(&self, fallback: Difficulty) -> Difficulty {
        self.difficulty.unwrap_or(fallback)
    }
}

/// One generation request's worth of problems, the unit of hint-cache scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemBatch {
    pub topic: String,
    pub requested_difficulty: Difficulty,
    pub problems: Vec<Problem>,
}

impl ProblemBatch {
    #[must_use]
    pub fn new(topic: String, requested_difficulty: Difficulty, problems: Vec<Problem>) -> Self {
        Self {
            topic,
            requested_difficulty,
            problems,
        }
    }

    /// Looks up a problem by its client-assigned id.
    #[must_use]
    pub fn problem(&self, id: ProblemId) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}
