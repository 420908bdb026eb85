mod alert;
mod diagnostic;
mod lessons;
mod practice;
mod progress;
mod state;
mod students;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alert::{Alert, AlertBanner, AlertKind, push_alert};
pub use diagnostic::DiagnosticView;
pub use lessons::LessonsView;
pub use practice::PracticeView;
pub use progress::ProgressView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use students::StudentsView;
