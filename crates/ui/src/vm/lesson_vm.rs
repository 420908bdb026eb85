use tutor_core::model::LessonPlan;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub heading: String,
    pub description: String,
    pub time_label: String,
}

/// Display shape for a generated lesson plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPlanVm {
    pub title: String,
    pub objectives: Vec<String>,
    pub activities: Vec<ActivityVm>,
    pub materials: Vec<String>,
}

#[must_use]
pub fn map_lesson_plan(plan: &LessonPlan, topic: &str) -> LessonPlanVm {
    LessonPlanVm {
        title: format!("Lesson Plan: {topic}"),
        objectives: plan.objectives.clone(),
        activities: plan
            .activities
            .iter()
            .enumerate()
            .map(|(index, activity)| ActivityVm {
                heading: format!("Activity {}: {}", index + 1, activity.title),
                description: activity.description.clone(),
                time_label: format!("{} min", activity.time_minutes),
            })
            .collect(),
        materials: plan.materials.clone(),
    }
}
