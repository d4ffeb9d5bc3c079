use super::{Training, TrainingBase, M_IN_KM, MIN_IN_H};
use crate::error::Result;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub const TRAINING_TYPE: &'static str = "Running";

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}
