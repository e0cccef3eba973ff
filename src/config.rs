//! Simulation configuration with TOML support.
//!
//! Every field has a default, so a partial file (e.g. only `width`) works.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::automaton::{GridSize, Pattern, Seed, DEFAULT_DENSITY};
use crate::error::ConfigError;

pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 64;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Failure to load a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Period of the fixed-interval scheduler.
    pub tick_interval_ms: u64,
    /// Worker threads for parallel stepping; 0 steps sequentially.
    pub threads: usize,
    pub seed: SeedConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            threads: 0,
            seed: SeedConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Probability that a cell starts alive in a random seed.
    pub density: f64,
    /// Fixed RNG seed for reproducible runs.
    pub rng_seed: Option<u64>,
    /// Start from a single pattern instead of random noise.
    pub pattern: Option<Pattern>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            rng_seed: None,
            pattern: None,
        }
    }
}

impl SeedConfig {
    pub fn to_seed(&self) -> Seed {
        match self.pattern {
            Some(pattern) => Seed::Pattern(pattern),
            None => Seed::Random {
                density: self.density,
                rng_seed: self.rng_seed,
            },
        }
    }
}

impl LifeConfig {
    /// Load and validate a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: LifeConfig = toml::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let config: LifeConfig = toml::from_str(content).map_err(|source| LoadError::Parse {
            path: "<string>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        GridSize::new(self.width, self.height)?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.seed.to_seed().validate()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
