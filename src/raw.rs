use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeSet;

use crate::error::RecipeError;

/// A recipe source record as written in YAML
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub category: CategoryField,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    #[serde(default)]
    pub title: Option<String>,
    pub tasks: Vec<String>,
}

impl RawRecipe {
    pub fn from_value(value: Value) -> Result<Self, RecipeError> {
        Ok(serde_yaml::from_value(value)?)
    }

    pub fn from_yaml(source: &str) -> Result<Self, RecipeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn categories(&self) -> Result<BTreeSet<String>, RecipeError> {
        let categories: BTreeSet<String> = match &self.category {
            CategoryField::One(category) => BTreeSet::from([category.clone()]),
            CategoryField::Many(categories) => categories.iter().cloned().collect(),
        };

        if categories.is_empty() {
            return Err(RecipeError::EmptyCategories);
        }
        Ok(categories)
    }
}
