// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::error::ConfigError;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dice-scene")]
#[command(about = "Click the middle die to roll, first to 100 wins", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Game tick period in milliseconds
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,

    /// Seed for reproducible rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the light standing still
    #[arg(long = "no-light-spin", default_value = "false")]
    pub no_light_spin: bool,
}

impl Cli {
    /// Config file (or defaults) with flags applied on top
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_light_spin {
            config.light_spin = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["dice-scene", "--width", "320", "--seed", "9", "--no-light-spin"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 800);
        assert_eq!(config.seed, Some(9));
        assert!(!config.light_spin);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["dice-scene", "--tick-ms", "0"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn missing_config_file_reports_path() {
        let cli = Cli::parse_from(["dice-scene", "--config", "/nonexistent/dice.json"]);
        let err = cli.resolve().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dice.json"));
    }
}
