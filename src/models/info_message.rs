use serde::Serialize;
use std::fmt;

/// Computed statistics of one workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // hours
    pub distance: f64, // km
    pub speed: f64,    // km/h
    pub calories: f64, // kcal
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Human-readable summary line
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
