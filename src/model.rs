use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Position of an ingredient in the prep-ahead ("mise") grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mise {
    #[default]
    None,
    Start,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ingredient {
    /// Highlighted name with any `:<digits>` suffix removed
    pub name: Option<String>,
    /// Token text as written, suffix included. Steps reference ingredients by this.
    #[serde(skip)]
    pub key: Option<String>,
    /// Display text, markup removed
    pub text: String,
    pub mise: Mise,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_recipe_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientGroup {
    /// Empty for the default group
    pub title: String,
    pub ingredients: Vec<Ingredient>,
}

/// Location of a declared ingredient inside `Recipe::ingredient_groups`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientId {
    pub group: usize,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextStyle {
    #[default]
    #[serde(rename = "")]
    Plain,
    #[serde(rename = "bold")]
    Bold,
}

/// One span of a task or note line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    Text {
        text: String,
        style: TextStyle,
    },
    Ingredient {
        /// Reference as written between the `$` delimiters
        name: String,
        text: String,
        index: usize,
    },
    Timer {
        text: String,
        seconds: u64,
    },
}

impl Part {
    pub fn plain(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            style: TextStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            style: TextStyle::Bold,
        }
    }

    /// What the part shows, without markup
    pub fn text(&self) -> &str {
        match self {
            Part::Text { text, .. } | Part::Ingredient { text, .. } | Part::Timer { text, .. } => {
                text
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Task {
    pub parts: Vec<Part>,
}

impl Task {
    pub fn text(&self) -> String {
        self.parts.iter().map(Part::text).collect()
    }
}

/// A timer found in a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer<'a> {
    pub text: &'a str,
    pub seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub tasks: Vec<Task>,
    /// Ingredients in order of first mention, each listed once
    pub ingredients: Vec<Ingredient>,
}

impl Step {
    /// Timers of all tasks, in reading order
    pub fn timers(&self) -> impl Iterator<Item = Timer<'_>> {
        self.tasks
            .iter()
            .flat_map(|task| task.parts.iter())
            .filter_map(|part| match part {
                Part::Timer { text, seconds } => Some(Timer {
                    text: text.as_str(),
                    seconds: *seconds,
                }),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Note {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
    pub extra_context: String,
}

impl Warning {
    pub fn new(message: impl Into<String>, extra_context: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra_context: extra_context.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub categories: BTreeSet<String>,
    pub icon: String,
    pub ingredient_groups: Vec<IngredientGroup>,
    /// Reference name to declaration; a later declaration of the same name wins
    #[serde(skip)]
    pub ingredient_map: HashMap<String, IngredientId>,
    pub steps: Vec<Step>,
    pub notes: Vec<Note>,
    pub warnings: Vec<Warning>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every ingredient, group by group, in declaration order
    pub fn all_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredient_groups
            .iter()
            .flat_map(|group| group.ingredients.iter())
    }

    pub fn all_ingredients_mut(&mut self) -> impl Iterator<Item = &mut Ingredient> {
        self.ingredient_groups
            .iter_mut()
            .flat_map(|group| group.ingredients.iter_mut())
    }

    /// Declared ingredient registered under `name`
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        let id = self.ingredient_map.get(name)?;
        self.ingredient_groups
            .get(id.group)?
            .ingredients
            .get(id.position)
    }

    pub fn add_warning(&mut self, message: impl Into<String>, extra_context: impl Into<String>) {
        self.warnings.push(Warning::new(message, extra_context));
    }
}
