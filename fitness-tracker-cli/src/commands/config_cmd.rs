use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub fn show_config(config_file: &Path) -> Result<()> {
    let config = Config::load(config_file)?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration ({})", config_file.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(config_file: &Path, force: bool) -> Result<()> {
    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save(config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());

    Ok(())
}
