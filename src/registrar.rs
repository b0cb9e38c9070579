// 📋 Entry Registrar - descriptor validation and store insertion
//
// The only write path into the cookbook. Raw JSON descriptors are
// validated fully before any mutation, so a rejection always leaves the
// store exactly as it was. Checks run in a fixed order and the first
// failure wins.
//
// Required item names are deliberately NOT checked against the store
// here: registration order is unconstrained, and dangling references
// only surface at resolution time.

use crate::cookbook::{Cookbook, CookbookError};
use crate::entities::{Entry, Ingredient, Recipe, RequiredItem};
use serde_json::Value;
use std::collections::HashSet;

/// Validate a raw entity descriptor and, if it passes, store it.
///
/// Validation order:
/// 1. descriptor is an object with a non-empty string `name` and a string `type`
/// 2. `name` is not already taken (exact, case-sensitive match)
/// 3. `type` is exactly `"recipe"` or `"ingredient"`
/// 4. ingredient: integer `cookTime >= 0`
/// 5. recipe: non-empty `requiredItems`, each with a non-empty string
///    `name` and an integer `quantity > 0`, names pairwise distinct
pub fn register_entry(cookbook: &mut Cookbook, descriptor: &Value) -> Result<(), CookbookError> {
    let object = descriptor
        .as_object()
        .ok_or_else(|| CookbookError::MalformedInput("descriptor is not an object".to_string()))?;

    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(CookbookError::MalformedInput(
                "missing or empty name".to_string(),
            ))
        }
    };

    let entry_type = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| CookbookError::MalformedInput("missing type".to_string()))?;

    if cookbook.contains(name) {
        return Err(CookbookError::Conflict(name.to_string()));
    }

    let entry = match entry_type {
        "ingredient" => Entry::Ingredient(validate_ingredient(name, object)?),
        "recipe" => Entry::Recipe(validate_recipe(name, object)?),
        other => {
            return Err(CookbookError::InvalidShape(format!(
                "unknown entry type: {}",
                other
            )))
        }
    };

    cookbook.insert(entry)
}

/// Check 4: `cookTime` must be a JSON integer >= 0 (floats are rejected)
fn validate_ingredient(
    name: &str,
    object: &serde_json::Map<String, Value>,
) -> Result<Ingredient, CookbookError> {
    let cook_time = object
        .get("cookTime")
        .and_then(Value::as_i64)
        .ok_or_else(|| CookbookError::MalformedInput("cookTime must be an integer".to_string()))?;

    if cook_time < 0 {
        return Err(CookbookError::InvalidShape(
            "cookTime must be >= 0".to_string(),
        ));
    }

    Ok(Ingredient::new(name, cook_time))
}

/// Check 5: `requiredItems` must be a non-empty array of valid items
/// with pairwise-distinct names
fn validate_recipe(
    name: &str,
    object: &serde_json::Map<String, Value>,
) -> Result<Recipe, CookbookError> {
    let raw_items = object
        .get("requiredItems")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CookbookError::MalformedInput("requiredItems must be an array".to_string())
        })?;

    if raw_items.is_empty() {
        return Err(CookbookError::InvalidShape(
            "requiredItems must not be empty".to_string(),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut required_items = Vec::with_capacity(raw_items.len());

    for raw_item in raw_items {
        let item_name = match raw_item.get("name").and_then(Value::as_str) {
            Some(item_name) if !item_name.is_empty() => item_name,
            _ => {
                return Err(CookbookError::MalformedInput(
                    "required item is missing a name".to_string(),
                ))
            }
        };

        let quantity = raw_item
            .get("quantity")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                CookbookError::MalformedInput("quantity must be an integer".to_string())
            })?;

        if quantity <= 0 {
            return Err(CookbookError::InvalidShape(
                "quantity must be > 0".to_string(),
            ));
        }

        if !seen.insert(item_name) {
            return Err(CookbookError::InvalidShape(format!(
                "duplicate required item: {}",
                item_name
            )));
        }

        required_items.push(RequiredItem::new(item_name, quantity));
    }

    Ok(Recipe::new(name, required_items))
}

// ============================================================================
// TESTS
// ============================================================================
