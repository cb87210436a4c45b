use log::debug;

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::raw::RawRecipe;

mod ingredients;
mod notes;
mod steps;
pub mod tokens;

pub use self::ingredients::parse_ingredient_line;

/// Parses one recipe record. Links and mise nesting are checked later, per batch.
pub fn parse_recipe(raw: &RawRecipe, id: &str) -> Result<Recipe, RecipeError> {
    let mut recipe = Recipe {
        categories: raw.categories()?,
        icon: raw.icon.clone().unwrap_or_default(),
        ..Recipe::new(id.to_lowercase(), raw.name.clone())
    };

    ingredients::parse_ingredient_section(&mut recipe, &raw.ingredients)?;
    steps::parse_steps(&mut recipe, &raw.steps);
    recipe.notes = notes::parse_notes(&raw.notes);

    debug!(
        "Parsed recipe '{}': {} ingredient groups, {} steps, {} warnings",
        recipe.id,
        recipe.ingredient_groups.len(),
        recipe.steps.len(),
        recipe.warnings.len()
    );
    Ok(recipe)
}
