//! Configuration management for tripwise
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.tripwise/config.toml

use crate::errors::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for tripwise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub budget: BudgetConfig,
    pub mock: MockConfig,
    pub display: DisplayConfig,
}

/// Agent loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    /// Planning cycles for the basic agent
    pub max_cycles: usize,
    /// Step cap for the autonomous travel planner
    pub max_steps: usize,
    /// Pause between planner steps
    pub pace_ms: u64,
}

/// Trip budget used by the planner demos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub total: f64,
    pub duration_days: u32,
}

/// Mock service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Pins every random mock when set
    pub seed: Option<u64>,
}

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub verbosity: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "TravelBuddy".to_string(),
            max_cycles: 5,
            max_steps: 10,
            pace_ms: 500,
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total: 2500.0,
            duration_days: 14,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AgentError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AgentError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// ~/.tripwise/config.toml, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tripwise").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.agent.max_cycles == 0 {
            return Err(AgentError::ConfigError(
                "max_cycles must be greater than 0".to_string(),
            ));
        }

        if self.agent.max_steps == 0 {
            return Err(AgentError::ConfigError(
                "max_steps must be greater than 0".to_string(),
            ));
        }

        if !self.budget.total.is_finite() || self.budget.total <= 0.0 {
            return Err(AgentError::ConfigError(
                "budget total must be a positive amount".to_string(),
            ));
        }

        if self.budget.duration_days == 0 {
            return Err(AgentError::ConfigError(
                "duration_days must be greater than 0".to_string(),
            ));
        }

        match self.display.verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            _ => {
                return Err(AgentError::ConfigError(format!(
                    "Invalid verbosity level: {}",
                    self.display.verbosity
                )))
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AgentError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AgentError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgentError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as TOML for display
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AgentError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
