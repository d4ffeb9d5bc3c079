mod batch;
mod calc;
mod codes;
mod config_cmd;
mod demo;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fitness_tracker::{report, write_json_report, Training};

use crate::config::{Config, OutputFormat};

pub use batch::BatchCommand;
pub use calc::CalcCommand;
pub use demo::DemoCommand;

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Workout calculator for running, sports walking and swimming", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for workout summaries
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample packages
    Demo(DemoCommand),

    /// Report a single package given on the command line
    Calc(CalcCommand),

    /// Report every package in a JSON file
    Batch(BatchCommand),

    /// List supported workout codes
    Codes,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings resolved from the config file and global flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub fail_fast: bool,
}

impl Settings {
    fn load(config_file: &Path, format: Option<OutputFormat>) -> Result<Self> {
        let config = Config::load(config_file)?;
        Ok(Self::resolve(&config, format))
    }

    fn resolve(config: &Config, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(config.output.format),
            fail_fast: config.batch.fail_fast,
        }
    }
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        let config_file = Config::config_file(self.config.as_deref())?;

        match self.command {
            Commands::Demo(cmd) => cmd.execute(&Settings::load(&config_file, self.format)?),
            Commands::Calc(cmd) => cmd.execute(&Settings::load(&config_file, self.format)?),
            Commands::Batch(cmd) => cmd.execute(&Settings::load(&config_file, self.format)?),
            Commands::Codes => codes::list_codes(),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&config_file),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&config_file, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Write one workout summary to stdout in the requested format
fn print_summary(training: &dyn Training, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => report(training)?,
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_json_report(training, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
