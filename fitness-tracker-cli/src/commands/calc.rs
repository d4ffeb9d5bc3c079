use anyhow::{Context, Result};
use clap::Args;

use fitness_tracker::read_package;

use super::{print_summary, Settings};

#[derive(Args)]
pub struct CalcCommand {
    /// Workout code (SWM, RUN or WLK)
    code: String,

    /// Sensor values: action, duration, weight, then height (WLK)
    /// or pool length and pool count (SWM)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

impl CalcCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let workout = read_package(&self.code, &self.values)
            .with_context(|| format!("Invalid {} package", self.code))?;

        print_summary(&workout, settings.format)
    }
}
