// Data models for sensor input and computed summaries

pub mod info_message;
pub mod package;

pub use info_message::InfoMessage;
pub use package::{load_packages, SensorPackage};
