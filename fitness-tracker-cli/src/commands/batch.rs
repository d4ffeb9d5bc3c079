use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

use fitness_tracker::load_packages;

use super::{print_summary, Settings};

#[derive(Args)]
pub struct BatchCommand {
    /// JSON file holding an array of {"code": ..., "data": [...]} packages
    file: PathBuf,

    /// Stop at the first package that cannot be built
    #[arg(long)]
    fail_fast: bool,
}

impl BatchCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let packages = load_packages(&self.file)?;
        let fail_fast = self.fail_fast || settings.fail_fast;
        let mut failed = 0;

        for (index, package) in packages.iter().enumerate() {
            match package.build() {
                Ok(workout) => print_summary(&workout, settings.format)?,
                Err(err) if fail_fast => {
                    return Err(err)
                        .with_context(|| format!("Package {} ({})", index + 1, package.code));
                }
                Err(err) => {
                    tracing::warn!("Skipping package {} ({}): {}", index + 1, package.code, err);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            bail!("{} of {} packages failed", failed, packages.len());
        }

        Ok(())
    }
}
