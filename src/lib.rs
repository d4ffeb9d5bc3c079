// Library interface for the fitness tracker
// Exposes the training model so the CLI and integration tests can use it

pub mod dispatch;
pub mod error;
pub mod models;
pub mod report;
pub mod training;

// Re-export commonly used types for convenience
pub use dispatch::{read_package, WorkoutCode};
pub use error::TrainingError;
pub use models::{load_packages, InfoMessage, SensorPackage};
pub use report::{report, write_json_report, write_report};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
