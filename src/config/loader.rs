//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/uiforge/config.toml)
//! 3. Project config (.uiforge/config.toml)
//! 4. Environment variables (UIFORGE_* prefix, `__` between sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{ForgeError, Result};

/// Environment variable prefix, e.g. `UIFORGE_PARSER__MIN_CONFIDENCE=0.5`
const ENV_PREFIX: &str = "UIFORGE_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            &Self::project_config_path(),
            ENV_PREFIX,
        )
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn load_layers(global: Option<&Path>, project: &Path, env_prefix: &str) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if project.exists() {
            debug!("Loading project config from: {}", project.display());
            figment = figment.merge(Toml::file(project));
        }

        figment = figment.merge(Env::prefixed(env_prefix).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/uiforge/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("uiforge"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".uiforge")
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render the effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            Ok(toml::to_string_pretty(config)?)
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            ForgeError::Config("Cannot determine global config directory".to_string())
        })?;

        Self::write_default(&global_dir, force)?;
        Ok(global_dir)
    }

    /// Initialize project configuration in the current directory
    pub fn init_project(force: bool) -> Result<PathBuf> {
        let project_dir = Self::project_dir();
        Self::write_default(&project_dir, force)?;
        Ok(project_dir)
    }

    /// Write the default config file into `dir`, keeping an existing file
    /// unless `force` is set
    pub fn write_default(dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() || force {
            fs::write(&config_path, Self::default_config())?;
            info!("Created config: {}", config_path.display());
        } else {
            info!("Config exists: {}", config_path.display());
        }

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn default_config() -> &'static str {
        r#"# uiforge Configuration
# Project settings in .uiforge/config.toml override the global file.

version = "1.0"

[templates]
dir = "./templates"

[logging]
level = "info"

# Intents below this confidence are flagged as low-confidence
[parser]
min_confidence = 0.0

[output]
format = "text"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let config = ConfigLoader::load_layers(
            None,
            &temp.path().join("missing.toml"),
            "UIFORGE_TEST_DEFAULTS_",
        )
        .unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_project_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        let project = temp.path().join("project.toml");
        fs::write(&global, "[logging]\nlevel = \"debug\"\n[server]\nport = 9000\n").unwrap();
        fs::write(&project, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config =
            ConfigLoader::load_layers(Some(&global), &project, "UIFORGE_TEST_LAYERS_").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_env_override() {
        let temp = TempDir::new().unwrap();
        // SAFETY: the prefix is unique to this test
        unsafe {
            std::env::set_var("UIFORGE_TEST_ENV_PARSER__MIN_CONFIDENCE", "0.35");
        }
        let config = ConfigLoader::load_layers(
            None,
            &temp.path().join("missing.toml"),
            "UIFORGE_TEST_ENV_",
        )
        .unwrap();
        unsafe {
            std::env::remove_var("UIFORGE_TEST_ENV_PARSER__MIN_CONFIDENCE");
        }
        assert_eq!(config.parser.min_confidence, 0.35);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[parser]\nmin_confidence = 2.0\n").unwrap();

        assert!(ConfigLoader::load_from_file(&path).is_err());
    }

    #[test]
    fn test_write_default_is_loadable() {
        let temp = TempDir::new().unwrap();
        let path = ConfigLoader::write_default(temp.path(), false).unwrap();
        assert!(path.exists());

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.templates.dir, PathBuf::from("./templates"));
    }

    #[test]
    fn test_write_default_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "version = \"2.0\"\n").unwrap();

        ConfigLoader::write_default(temp.path(), false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "version = \"2.0\"\n");

        ConfigLoader::write_default(temp.path(), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[parser]"));
    }

    #[test]
    fn test_render_formats() {
        let config = Config::default();
        let json = ConfigLoader::render(&config, true).unwrap();
        assert!(json.contains("\"min_confidence\""));

        let toml = ConfigLoader::render(&config, false).unwrap();
        assert!(toml.contains("[parser]"));
    }
}
