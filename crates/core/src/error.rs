use thiserror::Error;

use crate::model::{ParseDifficultyError, ParseIdError, StudentError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
    #[error(transparent)]
    ParseDifficulty(#[from] ParseDifficultyError),
}
