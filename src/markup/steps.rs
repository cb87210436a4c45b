use super::tokens::{spans, strip_suffix, Grammar, Span, Token};
use crate::model::{Ingredient, Part, Recipe, Step, Task};
use crate::raw::RawStep;

/// Builds the steps of `recipe`. Needs the ingredient section parsed first.
pub fn parse_steps(recipe: &mut Recipe, raw_steps: &[RawStep]) {
    for (step_index, raw) in raw_steps.iter().enumerate() {
        let mut step = Step {
            title: raw.title.clone(),
            ..Default::default()
        };
        // References as written, parallel to `step.ingredients`
        let mut references: Vec<&str> = Vec::new();

        for (task_index, line) in raw.tasks.iter().enumerate() {
            let mut task = Task::default();

            for span in spans(line, Grammar::Task) {
                let part = match span {
                    Span::Text(text) => Part::plain(text),
                    Span::Token { token, .. } => match token {
                        Token::Ingredient(reference) => {
                            let index = match references.iter().position(|r| *r == reference) {
                                Some(index) => index,
                                None => {
                                    let ingredient = step_ingredient(
                                        recipe,
                                        reference,
                                        step_index + 1,
                                        task_index + 1,
                                    );
                                    references.push(reference);
                                    step.ingredients.push(ingredient);
                                    step.ingredients.len() - 1
                                }
                            };
                            Part::Ingredient {
                                name: reference.to_string(),
                                text: strip_suffix(reference).to_string(),
                                index,
                            }
                        }
                        Token::Timer { text, amount, unit } => Part::Timer {
                            text: text.to_string(),
                            seconds: unit.seconds(amount),
                        },
                        Token::Bold(text) => Part::bold(text),
                    },
                };
                task.parts.push(part);
            }

            step.tasks.push(task);
        }

        recipe.steps.push(step);
    }
}

/// The declared ingredient for `reference`, or a placeholder plus a warning
fn step_ingredient(
    recipe: &mut Recipe,
    reference: &str,
    step_no: usize,
    task_no: usize,
) -> Ingredient {
    if let Some(declared) = recipe.ingredient(reference) {
        return declared.clone();
    }

    recipe.add_warning(
        format!("Task ingredient '{}' is not part of recipe", reference),
        format!("step {}, task {}", step_no, task_no),
    );
    let name = strip_suffix(reference);
    let named = !name.is_empty();
    Ingredient {
        name: named.then(|| name.to_string()),
        key: named.then(|| reference.to_string()),
        text: name.to_string(),
        ..Default::default()
    }
}
