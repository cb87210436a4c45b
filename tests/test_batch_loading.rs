use onyo_recipes::{
    create_empty_recipe, load_recipe_yaml, load_recipes_from_dir, save_recipe_yaml, RecipeError,
    Settings,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).unwrap();
}

fn recipe_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "ApplePie.yaml",
        r#"
name: Apple Pie
category: [Dessert, Baking]
ingredients:
  - 1 ~ShortcrustPastry~
  - $apple$ 6
steps:
  - tasks: ["Fill the pastry with $apple$", "Bake for !45 minutes!"]
"#,
    );
    write(
        dir.path(),
        "shortcrustPastry.yaml",
        "name: Shortcrust Pastry\ncategory: baking\ningredients: ['$flour$ 250 g', '$butter$ 125 g']\n",
    );
    write(
        dir.path(),
        "broken.yaml",
        "name: Broken\ncategory: Dessert\ningredients: [')', '$sugar$']\n",
    );
    write(dir.path(), "notes.txt", "not a recipe");
    dir
}

#[test]
fn test_load_directory() {
    let dir = recipe_dir();
    let batch = load_recipes_from_dir(dir.path()).unwrap();

    let ids: Vec<&str> = batch.recipes.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["applepie", "shortcrustpastry"]);

    assert_eq!(batch.errors.len(), 1);
    assert!(batch.errors[0].origin.ends_with("broken.yaml"));
    assert!(batch.errors[0].to_string().contains("Mise group closed"));

    let pie = &batch.recipes["applepie"];
    assert_eq!(pie.ingredient_groups[0].ingredients[0].text, "Shortcrust Pastry");
    assert!(pie.warnings.is_empty());
}

#[test]
fn test_categories_group_case_insensitively() {
    let dir = recipe_dir();
    let batch = load_recipes_from_dir(dir.path()).unwrap();
    let categories = batch.categories();

    let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["baking", "dessert"]);
    assert_eq!(categories["baking"].recipes.len(), 2);
    assert_eq!(categories["dessert"].name, "Dessert");
}

#[test]
fn test_unreadable_yaml_is_an_error_entry() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.yaml", "name: [unclosed\n");
    write(dir.path(), "ok.yaml", "name: Ok\ncategory: Meal\ningredients: []\n");

    let batch = load_recipes_from_dir(dir.path()).unwrap();

    assert_eq!(batch.recipes.len(), 1);
    assert_eq!(batch.errors.len(), 1);
    assert!(batch.has_problems());
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let result = load_recipes_from_dir(&dir.path().join("nope"));
    assert!(matches!(result, Err(RecipeError::Io(_))));
}

#[test]
fn test_create_empty_recipe() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::default();

    let id = create_empty_recipe("Dummy Recipe", dir.path(), &settings).unwrap();
    assert_eq!(id, "dummyrecipe");
    assert!(dir.path().join("dummyRecipe.yaml").exists());

    let batch = load_recipes_from_dir(dir.path()).unwrap();
    let recipe = &batch.recipes["dummyrecipe"];
    assert_eq!(recipe.name, "Dummy Recipe");
    assert_eq!(recipe.categories, BTreeSet::from(["Meal".to_string()]));
    assert!(!batch.has_problems());

    let again = create_empty_recipe("Dummy Recipe", dir.path(), &settings);
    assert!(matches!(again, Err(RecipeError::AlreadyExists(_))));
}

#[test]
fn test_create_empty_recipe_needs_a_usable_name() {
    let dir = TempDir::new().unwrap();
    let result = create_empty_recipe("!!!", dir.path(), &Settings::default());
    assert!(matches!(result, Err(RecipeError::InvalidName(_))));
}

#[test]
fn test_save_recipe_yaml_validates_first() {
    let dir = recipe_dir();
    let original = load_recipe_yaml(dir.path(), "applepie").unwrap().unwrap();

    let invalid = "name: Apple Pie\ningredients: []\n";
    assert!(save_recipe_yaml(dir.path(), "applepie", invalid).is_err());
    assert_eq!(
        load_recipe_yaml(dir.path(), "ApplePie").unwrap().unwrap(),
        original
    );

    let edited = "name: Apple Pie\ncategory: Dessert\ningredients: ['$apple$ 8']\n";
    let recipe = save_recipe_yaml(dir.path(), "applepie", edited).unwrap();
    assert_eq!(recipe.all_ingredients().next().unwrap().text, "apple 8");
    assert_eq!(
        fs::read_to_string(dir.path().join("ApplePie.yaml")).unwrap(),
        edited
    );
}

#[test]
fn test_load_recipe_yaml_unknown_id() {
    let dir = recipe_dir();
    assert!(load_recipe_yaml(dir.path(), "lasagna").unwrap().is_none());
}
