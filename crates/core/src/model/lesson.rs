use serde::{Deserialize, Serialize};

/// A timed activity inside a lesson plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_minutes: u32,
}

/// A generated lesson plan. Display-only; the backend may persist its own copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub materials: Vec<String>,
}
