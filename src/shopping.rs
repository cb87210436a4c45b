use crate::markup::tokens::strip_suffix;
use crate::model::Recipe;

/// Key used to match an ingredient against shopping list entries
pub fn normalize_ingredient_name_for_shopping(name: &str) -> String {
    strip_suffix(name.trim())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Recipe {
    /// Shopping keys of all named ingredients, in `all_ingredients` order
    pub fn shopping_names(&self) -> impl Iterator<Item = String> + '_ {
        self.all_ingredients()
            .filter_map(|ingredient| ingredient.name.as_deref())
            .map(normalize_ingredient_name_for_shopping)
    }
}
