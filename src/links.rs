use log::debug;
use std::collections::{BTreeMap, HashMap};

use crate::model::Recipe;

/// Replaces the text of linked ingredients with the linked recipe's name.
///
/// Needs the whole batch: a link may point at any recipe in it. Links to ids
/// missing from the batch leave the text alone and warn on the linking recipe.
pub fn resolve_links(recipes: &mut BTreeMap<String, Recipe>) {
    let names: HashMap<String, String> = recipes
        .iter()
        .map(|(id, recipe)| (id.clone(), recipe.name.clone()))
        .collect();

    for recipe in recipes.values_mut() {
        resolve_recipe_links(recipe, &names);
    }
}

fn resolve_recipe_links(recipe: &mut Recipe, names: &HashMap<String, String>) {
    let mut dangling = Vec::new();

    for ingredient in recipe.all_ingredients_mut() {
        let Some(target) = ingredient.linked_recipe_id.as_deref() else {
            continue;
        };
        match names.get(target) {
            Some(name) => ingredient.text = name.clone(),
            None => dangling.push((target.to_string(), ingredient.text.clone())),
        }
    }

    // Steps hold copies of their ingredients
    for ingredient in recipe.steps.iter_mut().flat_map(|s| s.ingredients.iter_mut()) {
        if let Some(name) = ingredient
            .linked_recipe_id
            .as_deref()
            .and_then(|target| names.get(target))
        {
            ingredient.text = name.clone();
        }
    }

    for (target, text) in dangling {
        debug!("Recipe '{}' links to unknown recipe '{}'", recipe.id, target);
        recipe.add_warning(
            format!("Ingredient link `{}` is not valid", target),
            format!("ingredient '{}'", text),
        );
    }
}
