use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::strip_suffix;
use crate::error::RecipeError;
use crate::model::{Ingredient, IngredientGroup, IngredientId, Mise, Recipe};

static NAME_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([^$]+)\$").unwrap());
static LINK_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"~([^~]+)~").unwrap());
static GROUP_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^=(.*)=$").unwrap());

const MISE_OPEN: &str = "(";
const MISE_CLOSE: &str = ")";

/// Fills `ingredient_groups` and `ingredient_map` from the ingredient section lines
pub fn parse_ingredient_section(
    recipe: &mut Recipe,
    lines: &[String],
) -> Result<(), RecipeError> {
    let mut current = IngredientGroup::default();
    let mut previous: Option<&str> = None;

    for raw_line in lines {
        // Markers are recognised trimmed; ingredient text keeps the line as written
        let line = raw_line.trim();

        if let Some(title) = group_title(line) {
            commit_group(recipe, std::mem::take(&mut current));
            current.title = title.to_string();
        } else if line == MISE_CLOSE {
            match current.ingredients.last_mut() {
                Some(last) => last.mise = Mise::End,
                None => {
                    return Err(RecipeError::UnmatchedMiseClose {
                        group: current.title,
                    })
                }
            }
        } else if line != MISE_OPEN {
            let mut ingredient = parse_ingredient_line(raw_line);
            if previous == Some(MISE_OPEN) {
                ingredient.mise = Mise::Start;
            }

            // Empty groups are never committed, so a group holding this ingredient
            // lands at the next free slot.
            let id = IngredientId {
                group: recipe.ingredient_groups.len(),
                position: current.ingredients.len(),
            };
            if let (Some(key), Some(name)) = (&ingredient.key, &ingredient.name) {
                recipe.ingredient_map.insert(name.clone(), id);
                recipe.ingredient_map.insert(key.clone(), id);
            }
            current.ingredients.push(ingredient);
        }

        previous = Some(line);
    }

    commit_group(recipe, current);
    Ok(())
}

fn group_title(line: &str) -> Option<&str> {
    GROUP_TITLE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn commit_group(recipe: &mut Recipe, group: IngredientGroup) {
    if group.ingredients.is_empty() {
        debug!("Dropping empty ingredient group '{}'", group.title);
        return;
    }
    recipe.ingredient_groups.push(group);
}

/// Parses one ingredient line; only the first name token and the first link token count.
/// A token whose name is empty once the suffix is stripped leaves the ingredient unnamed.
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let mut ingredient = Ingredient::default();
    let mut text = line.to_string();

    if let Some(caps) = NAME_TOKEN.captures(line) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            let key = inner.as_str();
            let name = strip_suffix(key);
            text = format!("{}{}{}", &line[..whole.start()], name, &line[whole.end()..]);
            if !name.is_empty() {
                ingredient.key = Some(key.to_string());
                ingredient.name = Some(name.to_string());
            }
        }
    }

    let linked = LINK_TOKEN.captures(&text).and_then(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some((
            inner.as_str().trim().to_lowercase(),
            format!(
                "{}{}{}",
                &text[..whole.start()],
                inner.as_str(),
                &text[whole.end()..]
            ),
        ))
    });
    if let Some((recipe_id, unlinked_text)) = linked {
        ingredient.linked_recipe_id = Some(recipe_id);
        text = unlinked_text;
    }

    ingredient.text = text;
    ingredient
}
