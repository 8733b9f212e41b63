use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::recipe::Recipe;

/// Run configuration, read from an optional `icons.yaml` in the working
/// directory. A missing file means the defaults apply; the binary itself
/// takes no arguments.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_recipe")]
    pub recipe: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_sizes() -> Vec<u32> {
    vec![16, 48, 128]
}

fn default_recipe() -> String {
    "record".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sizes: default_sizes(),
            recipe: default_recipe(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        PathBuf::from("icons.yaml")
    }

    /// Load `icons.yaml` if present, otherwise fall back to the defaults.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = serde_yaml::from_str(&contents)
                .context("Failed to parse config file")?;

            // Validate configuration after loading
            config.validate()?;

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("sizes cannot be empty");
        }
        for &size in &self.sizes {
            if size == 0 {
                bail!("icon sizes must be positive pixel counts");
            }
        }

        if Recipe::from_name(&self.recipe).is_none() {
            bail!(
                "unknown recipe '{}' (known recipes: {})",
                self.recipe,
                Recipe::NAMES.join(", ")
            );
        }

        Ok(())
    }

    /// The recipe named by this configuration.
    pub fn recipe(&self) -> Result<Recipe> {
        Recipe::from_name(&self.recipe)
            .with_context(|| format!("unknown recipe '{}'", self.recipe))
    }
}
