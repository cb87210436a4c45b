use crate::model::{Mise, Recipe};

const MISE_HINT: &str =
    "Hint: check the numeric suffixes of repeated ingredients, e.g. $cream:1$ vs $cream:2$";

/// Checks that mise groups in each step open and close in order.
/// Problems become warnings on the recipe; nothing is rejected.
pub fn validate_mise(recipe: &mut Recipe) {
    let mut warnings = Vec::new();

    for (step_index, step) in recipe.steps.iter().enumerate() {
        let step_no = step_index + 1;
        let mut in_group = false;

        for ingredient in &step.ingredients {
            let label = ingredient.name.as_deref().unwrap_or(&ingredient.text);
            match ingredient.mise {
                Mise::Start if in_group => warnings.push((
                    "Nested mise group",
                    format!("step {}, ingredient '{}'. {}", step_no, label, MISE_HINT),
                )),
                Mise::End if !in_group => warnings.push((
                    "Ending unstarted mise group",
                    format!("step {}, ingredient '{}'. {}", step_no, label, MISE_HINT),
                )),
                _ => {}
            }
            match ingredient.mise {
                Mise::Start => in_group = true,
                Mise::End => in_group = false,
                Mise::None => {}
            }
        }

        if in_group {
            warnings.push((
                "Mise group not ended",
                format!("step {}. {}", step_no, MISE_HINT),
            ));
        }
    }

    for (message, context) in warnings {
        recipe.add_warning(message, context);
    }
}
