use serde::{Deserialize, Serialize};
use std::fmt;

/// Hint tiers, from gentle nudge to step-by-step outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintLevel {
    First,
    Second,
    Third,
}

impl HintLevel {
    pub const ALL: [HintLevel; 3] = [HintLevel::First, HintLevel::Second, HintLevel::Third];

    /// Zero-based index into a hint sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            HintLevel::First => 0,
            HintLevel::Second => 1,
            HintLevel::Third => 2,
        }
    }

    /// One-based number for display ("Hint 1" etc.).
    #[must_use]
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hint {}", self.number())
    }
}

/// The ordered hint sequence fetched for one problem.
///
/// The backend is expected to return three hints, but the set tolerates
/// fewer; out-of-range reveals report `HintReveal::Unavailable` rather than
/// silently showing nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    hints: Vec<String>,
}

impl HintSet {
    #[must_use]
    pub fn new(hints: Vec<String>) -> Self {
        Self { hints }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// The hint at the requested level, or an explicit unavailable marker.
    #[must_use]
    pub fn reveal(&self, level: HintLevel) -> HintReveal {
        match self.hints.get(level.index()) {
            Some(text) => HintReveal::Hint {
                level,
                text: text.clone(),
            },
            None => HintReveal::Unavailable {
                level,
                available: self.hints.len(),
            },
        }
    }
}

/// Outcome of asking for one hint level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintReveal {
    Hint { level: HintLevel, text: String },
    Unavailable { level: HintLevel, available: usize },
}

impl HintReveal {
    #[must_use]
    pub fn level(&self) -> HintLevel {
        match self {
            HintReveal::Hint { level, .. } | HintReveal::Unavailable { level, .. } => *level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_returns_hint_in_range() {
        let set = HintSet::new(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(
            set.reveal(HintLevel::Second),
            HintReveal::Hint {
                level: HintLevel::Second,
                text: "two".to_string()
            }
        );
    }

    #[test]
    fn reveal_reports_missing_level_explicitly() {
        let set = HintSet::new(vec!["one".to_string()]);
        assert_eq!(
            set.reveal(HintLevel::Third),
            HintReveal::Unavailable {
                level: HintLevel::Third,
                available: 1
            }
        );
    }

    #[test]
    fn level_indices_cover_three_tiers() {
        let indices: Vec<usize> = HintLevel::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(HintLevel::Third.to_string(), "Hint 3");
    }
}
