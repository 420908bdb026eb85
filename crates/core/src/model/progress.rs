use serde::{Deserialize, Serialize};

/// One topic's progress summary for a student. Fetched per view, not retained.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub topic: String,
    #[serde(default)]
    pub mastery_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
