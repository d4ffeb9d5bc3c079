use anyhow::Result;
use clap::Args;

use fitness_tracker::SensorPackage;

use super::{print_summary, Settings};

#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        for package in SensorPackage::samples() {
            let workout = package.build()?;
            print_summary(&workout, settings.format)?;
        }

        Ok(())
    }
}
