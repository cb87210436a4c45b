pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod loader;
pub mod markup;
pub mod model;
pub mod raw;
pub mod shopping;
pub mod validate;

use serde_yaml::Value;

pub use catalog::{group_by_category, normalize_for_recipe_id, Category};
pub use config::Settings;
pub use error::{LoadError, RecipeError};
pub use links::resolve_links;
pub use loader::{
    create_empty_recipe, load_batch, load_recipe_yaml, load_recipes_from_dir, save_recipe_yaml,
    Batch,
};
pub use markup::parse_recipe;
pub use model::{
    Ingredient, IngredientGroup, Mise, Note, Part, Recipe, Step, Task, TextStyle, Warning,
};
pub use raw::RawRecipe;
pub use shopping::normalize_ingredient_name_for_shopping;
pub use validate::validate_mise;

/// Parses a single loosely-typed recipe record.
///
/// Cross-recipe links are left unresolved and mise nesting is not checked;
/// use [`load_batch`] for that.
pub fn load_recipe(value: Value, id: &str) -> Result<Recipe, RecipeError> {
    let raw = RawRecipe::from_value(value)?;
    parse_recipe(&raw, id)
}

/// Same as [`load_recipe`], from YAML text
pub fn load_recipe_str(source: &str, id: &str) -> Result<Recipe, RecipeError> {
    let raw = RawRecipe::from_yaml(source)?;
    parse_recipe(&raw, id)
}
