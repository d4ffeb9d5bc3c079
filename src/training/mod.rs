//! Workout calculation model.
//!
//! Every workout shares an action count (steps or strokes), a duration in
//! hours and the athlete's weight in kilograms. Distance and mean speed are
//! derived from those fields; calorie formulas differ per workout kind.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::dispatch::WorkoutCode;
use crate::error::{Result, TrainingError};
use crate::models::InfoMessage;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Default stride length in metres
pub const LEN_STEP: f64 = 0.65;

/// Fields shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u32,
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl TrainingBase {
    /// Create the shared part of a workout.
    ///
    /// Duration must be finite and strictly positive since every speed
    /// formula divides by it.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TrainingError::InvalidDuration(duration));
        }

        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// Calculations every workout kind provides
pub trait Training {
    /// Display name used in the summary message
    fn training_type(&self) -> &'static str;

    fn base(&self) -> &TrainingBase;

    /// Metres covered per action
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        f64::from(self.base().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Calories burned (kcal)
    fn spent_calories(&self) -> f64;

    /// Snapshot of the computed statistics
    fn summary(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// A workout built from a sensor package
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    /// Workout code this record was built for
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Swimming(_) => WorkoutCode::Swimming,
            Workout::Running(_) => WorkoutCode::Running,
            Workout::SportsWalking(_) => WorkoutCode::SportsWalking,
        }
    }

    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Swimming(t) => t,
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn base(&self) -> &TrainingBase {
        self.inner().base()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Workout::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}
