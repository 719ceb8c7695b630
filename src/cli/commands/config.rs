//! Config Command
//!
//! Manage uiforge configuration.
//!
//! Usage:
//!   uiforge config show [-g] [-f json]
//!   uiforge config path
//!   uiforge config init [-g] [--force]

use crate::cli::Output;
use crate::config::{Config, ConfigLoader, OutputFormat};
use crate::types::Result;

/// Show the effective configuration, or the raw global file with `global`
pub fn show(config: &Config, global: bool, format: OutputFormat) -> Result<()> {
    if !global {
        let rendered = ConfigLoader::render(config, format == OutputFormat::Json)?;
        println!("{}", rendered.trim_end());
        return Ok(());
    }

    let output = Output::new();
    match ConfigLoader::global_config_path() {
        Some(global_path) if global_path.exists() => {
            let content = std::fs::read_to_string(&global_path)?;
            println!("# Global Config: {}\n", global_path.display());
            println!("{}", content.trim_end());
        }
        Some(_) => {
            output.info("No global config found.");
            output.info("Run 'uiforge config init --global' to create one.");
        }
        None => output.warning("Cannot determine global config directory."),
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

pub fn init(global: bool, force: bool) -> Result<()> {
    let output = Output::new();

    let (label, dir) = if global {
        ("global", ConfigLoader::init_global(force)?)
    } else {
        ("project", ConfigLoader::init_project(force)?)
    };

    output.success(&format!("Initialized {} configuration", label));
    output.field("Directory", &dir.display().to_string());
    output.field("Config", &dir.join("config.toml").display().to_string());
    Ok(())
}
