use super::{Training, TrainingBase, M_IN_KM};
use crate::error::Result;

/// Stroke length in metres
const LEN_STROKE: f64 = 1.38;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    pub length_pool: f64, // metres
    pub count_pool: f64,
}

impl Swimming {
    pub const TRAINING_TYPE: &'static str = "Swimming";

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Result<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            length_pool,
            count_pool,
        })
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Speed comes from pool laps, not from the stroke count
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}
