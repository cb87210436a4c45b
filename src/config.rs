use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::RecipeError;

/// Settings shared by the loader and the command line tool
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Directory holding the `*.yaml` recipe sources
    #[serde(default = "default_recipe_dir")]
    pub recipe_dir: PathBuf,
    /// Category written into newly created recipes
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Size of the ingredient highlight palette
    #[serde(default = "default_num_colors")]
    pub num_colors: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipe_dir: default_recipe_dir(),
            default_category: default_category(),
            num_colors: default_num_colors(),
        }
    }
}

// Default value functions
fn default_recipe_dir() -> PathBuf {
    PathBuf::from("recipes")
}

fn default_category() -> String {
    "Meal".to_string()
}

fn default_num_colors() -> usize {
    8
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with ONYO__ prefix
    /// 2. onyo.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ONYO__RECIPE_DIR
    pub fn load() -> Result<Self, RecipeError> {
        let builder = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("onyo").required(false))
            .add_source(
                Environment::with_prefix("ONYO")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, RecipeError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Palette slot for the n-th ingredient of a step
    pub fn color_index(&self, index_in_step: usize) -> usize {
        index_in_step % self.num_colors.max(1)
    }
}
