use std::collections::BTreeMap;

use crate::model::Recipe;

/// Recipes sharing a category, case-insensitively
#[derive(Debug, Clone)]
pub struct Category<'a> {
    /// Spelling of the first recipe seen with this category
    pub name: String,
    pub recipes: Vec<&'a Recipe>,
}

/// Groups recipes under their lowercased category names
pub fn group_by_category<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
) -> BTreeMap<String, Category<'a>> {
    let mut categories: BTreeMap<String, Category<'a>> = BTreeMap::new();

    for recipe in recipes {
        for name in &recipe.categories {
            categories
                .entry(name.to_lowercase())
                .or_insert_with(|| Category {
                    name: name.clone(),
                    recipes: Vec::new(),
                })
                .recipes
                .push(recipe);
        }
    }

    categories
}

/// camelCase file id for a recipe name: `"Shepherd's Pie"` -> `"shepherdsPie"`
pub fn normalize_for_recipe_id(name: &str) -> String {
    let is_separator = |c: char| c.is_whitespace() || c == '_' || c == '-';
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || is_separator(*c))
        .collect();

    let mut id = String::new();
    for (i, word) in cleaned.split(is_separator).filter(|w| !w.is_empty()).enumerate() {
        let word = word.to_lowercase();
        if i == 0 {
            id.push_str(&word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            id.extend(first.to_uppercase());
            id.push_str(chars.as_str());
        }
    }
    id
}
