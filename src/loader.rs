use log::{debug, info, warn};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{group_by_category, normalize_for_recipe_id, Category};
use crate::config::Settings;
use crate::error::{LoadError, RecipeError};
use crate::links::resolve_links;
use crate::markup::parse_recipe;
use crate::model::Recipe;
use crate::raw::RawRecipe;
use crate::validate::validate_mise;

const RECIPE_EXTENSION: &str = "yaml";
const TEMPLATE_INGREDIENT: &str = "$ingredient$";
const TEMPLATE_TASK: &str = "Prepare the $ingredient$";

/// Source layout of a freshly created recipe
#[derive(Serialize)]
struct RecipeTemplate<'a> {
    name: &'a str,
    category: &'a str,
    ingredients: [&'a str; 1],
    steps: [TemplateStep<'a>; 1],
}

#[derive(Serialize)]
struct TemplateStep<'a> {
    tasks: [&'a str; 1],
}

/// Recipes that loaded, and the ones that did not
#[derive(Debug, Default)]
pub struct Batch {
    pub recipes: BTreeMap<String, Recipe>,
    pub errors: Vec<LoadError>,
}

impl Batch {
    pub fn has_problems(&self) -> bool {
        !self.errors.is_empty() || self.recipes.values().any(|r| !r.warnings.is_empty())
    }

    pub fn categories(&self) -> BTreeMap<String, Category<'_>> {
        group_by_category(self.recipes.values())
    }

    /// Validation report: load errors first, then warnings recipe by recipe
    pub fn report(&self) -> Vec<String> {
        let errors = self.errors.iter().map(|e| format!("ERROR {}", e));
        let warnings = self.recipes.values().flat_map(|recipe| {
            recipe.warnings.iter().map(move |w| {
                format!("WARNING {}: {} ({})", recipe.id, w.message, w.extra_context)
            })
        });
        errors.chain(warnings).collect()
    }

    fn add(&mut self, origin: &str, id: &str, value: Result<Value, RecipeError>) {
        let parsed = value.and_then(|value| {
            if self.recipes.contains_key(id) {
                return Err(RecipeError::DuplicateId(id.to_string()));
            }
            let raw = RawRecipe::from_value(value)?;
            parse_recipe(&raw, id)
        });

        match parsed {
            Ok(recipe) => {
                self.recipes.insert(recipe.id.clone(), recipe);
            }
            Err(err) => {
                warn!("Error loading {}: {}", origin, err);
                self.errors.push(LoadError::new(origin, &err));
            }
        }
    }

    /// Second pass, once every recipe of the batch is parsed
    fn finish(mut self) -> Self {
        resolve_links(&mut self.recipes);
        for recipe in self.recipes.values_mut() {
            validate_mise(recipe);
        }
        info!(
            "Loaded {} recipes ({} errors)",
            self.recipes.len(),
            self.errors.len()
        );
        self
    }
}

/// Parses all records, then resolves links and validates the survivors.
/// Records whose id was already seen are rejected.
pub fn load_batch<I>(records: I) -> Batch
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut batch = Batch::default();
    for (id, value) in records {
        let id = id.to_lowercase();
        batch.add(&id, &id, Ok(value));
    }
    batch.finish()
}

/// Loads every `*.yaml` file in `dir`; the id is the lowercased file stem
pub fn load_recipes_from_dir(dir: &Path) -> Result<Batch, RecipeError> {
    info!("Loading recipes from {}", dir.display());

    let mut batch = Batch::default();
    for path in recipe_files(dir)? {
        let Some(id) = recipe_id(&path) else {
            continue;
        };
        debug!("Reading {}", path.display());
        let value = fs::read_to_string(&path)
            .map_err(RecipeError::from)
            .and_then(|source| Ok(serde_yaml::from_str::<Value>(&source)?));
        batch.add(&path.display().to_string(), &id, value);
    }

    Ok(batch.finish())
}

fn recipe_files(dir: &Path) -> Result<Vec<PathBuf>, RecipeError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == RECIPE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn recipe_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_lowercase)
}

/// Path of the source file for `id`, matching file stems case-insensitively
pub fn recipe_path(dir: &Path, id: &str) -> Result<Option<PathBuf>, RecipeError> {
    let id = id.to_lowercase();
    Ok(recipe_files(dir)?
        .into_iter()
        .find(|path| recipe_id(path).as_deref() == Some(id.as_str())))
}

/// Raw YAML source of a recipe, for editing
pub fn load_recipe_yaml(dir: &Path, id: &str) -> Result<Option<String>, RecipeError> {
    match recipe_path(dir, id)? {
        Some(path) => Ok(Some(fs::read_to_string(path)?)),
        None => Ok(None),
    }
}

/// Writes `source` for `id` after checking that it parses as a recipe.
/// Invalid sources are rejected and nothing is written.
pub fn save_recipe_yaml(dir: &Path, id: &str, source: &str) -> Result<Recipe, RecipeError> {
    let raw = RawRecipe::from_yaml(source)?;
    let recipe = parse_recipe(&raw, id)?;

    let path = match recipe_path(dir, id)? {
        Some(path) => path,
        None => dir.join(format!("{}.{}", recipe.id, RECIPE_EXTENSION)),
    };
    fs::write(&path, source)?;
    info!("Saved recipe {} to {}", recipe.id, path.display());
    Ok(recipe)
}

/// Writes a minimal recipe named `name` and returns its id
pub fn create_empty_recipe(
    name: &str,
    dir: &Path,
    settings: &Settings,
) -> Result<String, RecipeError> {
    let file_id = normalize_for_recipe_id(name);
    if file_id.is_empty() {
        return Err(RecipeError::InvalidName(name.to_string()));
    }
    if recipe_path(dir, &file_id)?.is_some() {
        return Err(RecipeError::AlreadyExists(file_id));
    }

    let template = RecipeTemplate {
        name,
        category: &settings.default_category,
        ingredients: [TEMPLATE_INGREDIENT],
        steps: [TemplateStep {
            tasks: [TEMPLATE_TASK],
        }],
    };
    let source =
        serde_yaml::to_string(&template).map_err(|e| RecipeError::Template(e.to_string()))?;

    let path = dir.join(format!("{}.{}", file_id, RECIPE_EXTENSION));
    fs::write(&path, source)?;
    info!("Created {}", path.display());

    Ok(file_id.to_lowercase())
}
