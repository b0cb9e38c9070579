// 🧮 Recipe Resolver - recursive expansion into base ingredients
//
// Expands a recipe into the total quantity of each base ingredient it
// transitively requires, then prices the whole thing in cook time. The
// resolver only ever reads the cookbook; a rejection anywhere in the
// expansion discards the partial result.
//
// Unlike the naive expansion, a recipe reappearing on its own expansion
// path is rejected as a circular reference instead of recursing forever.

use crate::cookbook::{Cookbook, CookbookError};
use crate::entities::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// SUMMARY TYPES
// ============================================================================

/// Aggregated quantity of one base ingredient in a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

/// The result of resolving one recipe: total cook time plus every base
/// ingredient with its summed quantity, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub cook_time: i64,
    pub ingredients: Vec<IngredientQuantity>,
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolve a recipe by name into a [`RecipeSummary`].
///
/// Rejects when the name is unknown, names an ingredient rather than a
/// recipe, any reference in the expansion dangles, or the reference graph
/// is cyclic. Never mutates the cookbook.
pub fn summarize(cookbook: &Cookbook, recipe_name: &str) -> Result<RecipeSummary, CookbookError> {
    match cookbook.get(recipe_name) {
        Some(Entry::Recipe(_)) => {}
        Some(other) => {
            return Err(CookbookError::InvalidShape(format!(
                "{} is an {}, not a recipe",
                recipe_name,
                other.kind()
            )))
        }
        None => return Err(CookbookError::NotFound(recipe_name.to_string())),
    }

    // IndexMap keeps ingredients in order of first appearance while
    // summing contributions from every path through the graph.
    let mut totals: IndexMap<String, i64> = IndexMap::new();
    let mut in_progress: HashSet<String> = HashSet::new();
    expand(cookbook, recipe_name, 1, &mut totals, &mut in_progress)?;

    let mut cook_time = 0;
    let mut ingredients = Vec::with_capacity(totals.len());

    for (name, &quantity) in &totals {
        // Re-check the kind while pricing; the expansion only ever puts
        // ingredient names into the map, so this should always hold.
        let Some(Entry::Ingredient(ingredient)) = cookbook.get(name) else {
            return Err(CookbookError::InvalidShape(format!(
                "{} is not an ingredient",
                name
            )));
        };
        cook_time += quantity * ingredient.cook_time;
        ingredients.push(IngredientQuantity {
            name: name.clone(),
            quantity,
        });
    }

    Ok(RecipeSummary {
        name: recipe_name.to_string(),
        cook_time,
        ingredients,
    })
}

/// Walk one entry, scaling everything below it by `multiplier`.
///
/// `in_progress` holds the recipe names on the current expansion path;
/// re-entering one of them means the graph is cyclic.
fn expand(
    cookbook: &Cookbook,
    name: &str,
    multiplier: i64,
    totals: &mut IndexMap<String, i64>,
    in_progress: &mut HashSet<String>,
) -> Result<(), CookbookError> {
    let entry = cookbook
        .get(name)
        .ok_or_else(|| CookbookError::NotFound(name.to_string()))?;

    match entry {
        Entry::Ingredient(_) => {
            *totals.entry(name.to_string()).or_insert(0) += multiplier;
            Ok(())
        }
        Entry::Recipe(recipe) => {
            if !in_progress.insert(name.to_string()) {
                return Err(CookbookError::CircularReference(name.to_string()));
            }
            for item in &recipe.required_items {
                expand(
                    cookbook,
                    &item.name,
                    item.quantity * multiplier,
                    totals,
                    in_progress,
                )?;
            }
            in_progress.remove(name);
            Ok(())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
