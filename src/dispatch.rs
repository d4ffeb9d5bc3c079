use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrainingError};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Three-letter code identifying the workout kind of a sensor package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    /// Display name of the workout built for this code
    pub fn training_type(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => Swimming::TRAINING_TYPE,
            WorkoutCode::Running => Running::TRAINING_TYPE,
            WorkoutCode::SportsWalking => SportsWalking::TRAINING_TYPE,
        }
    }

    /// Number of positional sensor values the workout is built from
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Swimming => 5,
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
        }
    }

    /// Names of the positional values, in order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutCode::Running => &["action", "duration", "weight"],
            WorkoutCode::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            other => Err(TrainingError::UnknownWorkoutCode(other.to_string())),
        }
    }
}

/// Build the workout matching `code` from positional sensor values.
///
/// Values are passed to the variant constructor in order:
/// action, duration, weight, then the variant's own fields.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code.parse()?;

    tracing::debug!("Reading {} package with {} values", code, data.len());

    match (code, data) {
        (WorkoutCode::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(action_count(action)?, duration, weight, length_pool, count_pool)
                .map(Workout::from)
        }
        (WorkoutCode::Running, &[action, duration, weight]) => {
            Running::new(action_count(action)?, duration, weight).map(Workout::from)
        }
        (WorkoutCode::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(action_count(action)?, duration, weight, height).map(Workout::from)
        }
        (code, data) => Err(TrainingError::ArgumentCount {
            code,
            expected: code.arity(),
            actual: data.len(),
        }),
    }
}

/// Sensors report counts as plain numbers; only whole non-negative values are counts
fn action_count(value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidActionCount(value))
    }
}
