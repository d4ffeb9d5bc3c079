use thiserror::Error;

use crate::dispatch::WorkoutCode;

/// Errors raised while turning sensor values into a training record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Workout code not supported: {0}")]
    UnknownWorkoutCode(String),

    #[error("{code} expects {expected} sensor values, got {actual}")]
    ArgumentCount {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },

    #[error("Duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("Height must be a positive number, got {0}")]
    InvalidHeight(f64),

    #[error("Action count must be a non-negative whole number, got {0}")]
    InvalidActionCount(f64),
}

pub type Result<T> = std::result::Result<T, TrainingError>;
