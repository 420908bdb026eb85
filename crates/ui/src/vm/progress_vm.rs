use tutor_core::model::ProgressRecord;

/// Display shape for one topic's progress summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressCardVm {
    pub topic: String,
    pub score_label: String,
    pub strengths: Vec<String>,
    pub target_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

#[must_use]
pub fn map_progress_cards(records: &[ProgressRecord]) -> Vec<ProgressCardVm> {
    records
        .iter()
        .map(|record| ProgressCardVm {
            topic: record.topic.clone(),
            score_label: format!("{:.0}", record.mastery_score),
            strengths: record.strengths.clone(),
            target_areas: record.target_areas.clone(),
            recommendations: record.recommendations.clone(),
        })
        .collect()
}
