// Entity Models - cookbook entries
//
// Two entity kinds share one namespace in the store. They are modeled as
// a tagged union rather than a trait hierarchy: every consumer (registrar,
// resolver) matches on the variant explicitly.

pub mod ingredient;
pub mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RequiredItem};

use serde::{Deserialize, Serialize};

/// A cookbook entry: either a base ingredient or a composite recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Entity name, regardless of kind
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    /// Kind tag as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Ingredient(_) => "ingredient",
            Entry::Recipe(_) => "recipe",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
