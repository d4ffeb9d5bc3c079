use super::{Training, TrainingBase, MIN_IN_H};
use crate::error::{Result, TrainingError};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    pub height: f64,
}

impl SportsWalking {
    pub const TRAINING_TYPE: &'static str = "SportsWalking";

    /// Height must be finite and strictly positive; the calorie formula divides by it
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(TrainingError::InvalidHeight(height));
        }

        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height,
        })
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        Self::TRAINING_TYPE
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let speed_height = floor_div(self.mean_speed().powi(2), self.height);
        let weight_term = CALORIES_WEIGHT_MULTIPLIER * self.base.weight;
        let speed_term = CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight;

        (speed_height * speed_term + weight_term) * self.base.duration * MIN_IN_H
    }
}

/// Floor of the exact quotient `x / y`.
///
/// Flooring the rounded `x / y` is off by one when the exact quotient sits just
/// below a whole number, so the quotient is rebuilt from the remainder instead.
fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }

    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
