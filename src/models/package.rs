use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dispatch::read_package;
use crate::error::TrainingError;
use crate::training::Workout;

/// One block of sensor readings: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Built-in readings used by the demo run
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", vec![15000.0, 1.0, 75.0]),
            Self::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// Dispatch the package to the matching workout
    pub fn build(&self) -> std::result::Result<Workout, TrainingError> {
        read_package(&self.code, &self.data)
    }
}

/// Load sensor packages from a JSON file.
///
/// The file holds an array of `{"code": "RUN", "data": [15000, 1, 75]}` objects.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<SensorPackage>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read package file {}", path.display()))?;

    let packages: Vec<SensorPackage> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse package file {}", path.display()))?;

    tracing::debug!("Loaded {} packages from {:?}", packages.len(), path);

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_build() {
        let workouts: Vec<Workout> = SensorPackage::samples()
            .iter()
            .map(SensorPackage::build)
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(workouts.len(), 3);
    }

    #[test]
    fn test_package_deserialize_integers() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"code": "RUN", "data": [15000, 1, 75]}"#).unwrap();

        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_packages("/nonexistent/packages.json");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read package file"));
    }
}
