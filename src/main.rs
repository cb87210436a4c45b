use log::{debug, error};
use std::env;
use std::path::PathBuf;
use std::process;

use onyo_recipes::{create_empty_recipe, load_recipes_from_dir, Settings};

const USAGE: &str = "Usage: onyo-recipes <validate [DIR] | show ID [DIR] | new NAME [DIR]>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let settings = Settings::load()?;
    debug!("{:#?}", settings);

    let dir_arg = |index: usize| {
        args.get(index)
            .map(PathBuf::from)
            .unwrap_or_else(|| settings.recipe_dir.clone())
    };

    match args.first().map(String::as_str) {
        Some("validate") => {
            let batch = load_recipes_from_dir(&dir_arg(1))?;
            for line in batch.report() {
                println!("{}", line);
            }
            if batch.has_problems() {
                println!("There are problems");
                process::exit(1);
            }
            println!("All good ({} recipes)", batch.recipes.len());
        }
        Some("show") => {
            let id = args.get(1).ok_or(USAGE)?;
            let batch = load_recipes_from_dir(&dir_arg(2))?;
            match batch.recipes.get(&id.to_lowercase()) {
                Some(recipe) => println!("{}", serde_json::to_string_pretty(recipe)?),
                None => {
                    error!("No recipe {}", id);
                    process::exit(1);
                }
            }
        }
        Some("new") => {
            let name = args.get(1).ok_or(USAGE)?;
            let id = create_empty_recipe(name, &dir_arg(2), &settings)?;
            println!("{}", id);
        }
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }

    Ok(())
}
