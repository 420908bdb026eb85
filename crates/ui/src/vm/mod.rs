mod diagnostic_vm;
mod lesson_vm;
mod problem_vm;
mod progress_vm;
mod student_vm;

pub use diagnostic_vm::{FeedbackVm, QuestionVm, map_feedback, map_questions};
pub use lesson_vm::{ActivityVm, LessonPlanVm, map_lesson_plan};
pub use problem_vm::{
    ProblemCardVm, RevealedHintVm, SolutionVm, append_hint_reveal, map_hint_reveal,
    map_problem_cards, map_solution,
};
pub use progress_vm::{ProgressCardVm, map_progress_cards};
pub use student_vm::{StudentCardVm, StudentOptionVm, map_student_card, map_student_options};
