use tutor_core::model::{Student, StudentId};

/// Display shape for one roster card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentCardVm {
    pub id: StudentId,
    pub name: String,
    pub grade_label: String,
    pub style_label: String,
    pub pacing_label: String,
    pub mastery_label: String,
}

/// One entry in the progress/lesson student selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentOptionVm {
    pub id: StudentId,
    pub name: String,
}

#[must_use]
pub fn map_student_card(student: &Student) -> StudentCardVm {
    let grade_label = student
        .grade_level
        .clone()
        .filter(|grade| !grade.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    StudentCardVm {
        id: student.id,
        name: student.name.clone(),
        grade_label,
        style_label: field_or_dash(student.learning_style.as_deref()),
        pacing_label: field_or_dash(student.pacing_pref.as_deref()),
        mastery_label: format!("Mastery: {:.0}%", student.prior_mastery),
    }
}

#[must_use]
pub fn map_student_options(students: &[Student]) -> Vec<StudentOptionVm> {
    students
        .iter()
        .map(|student| StudentOptionVm {
            id: student.id,
            name: student.name.clone(),
        })
        .collect()
}

fn field_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn student(grade: Option<&str>) -> Student {
        Student {
            id: StudentId::new(Uuid::new_v4()),
            name: "Ada".to_string(),
            age_group: None,
            grade_level: grade.map(str::to_string),
            learning_style: Some("visual".to_string()),
            prior_mastery: 72.4,
            goals: None,
            pacing_pref: None,
            accessibility_needs: None,
            created_at: None,
        }
    }

    #[test]
    fn missing_grade_renders_na() {
        let vm = map_student_card(&student(None));
        assert_eq!(vm.grade_label, "N/A");
        assert_eq!(vm.pacing_label, "—");
    }

    #[test]
    fn mastery_is_rounded_to_whole_percent() {
        let vm = map_student_card(&student(Some("7")));
        assert_eq!(vm.mastery_label, "Mastery: 72%");
        assert_eq!(vm.grade_label, "7");
    }
}
