// 🍳 Recipe Entity - composite cookbook entry
//
// A recipe references other entries (ingredients or recipes) by name.
// References are resolved lazily: the registrar never checks them against
// the store, so a recipe may legally point at names registered later.

use serde::{Deserialize, Serialize};

/// One required item inside a recipe: a reference to another entity
/// by name, plus how many units of it this recipe needs.
///
/// Invariant (enforced by the registrar): `quantity > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        RequiredItem {
            name: name.into(),
            quantity,
        }
    }
}

/// A composite entry: an ordered, non-empty list of required items with
/// pairwise-distinct names (both enforced by the registrar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique entity name (exact, case-sensitive)
    pub name: String,

    /// Ordered list of (reference, quantity) pairs
    #[serde(rename = "requiredItems")]
    pub required_items: Vec<RequiredItem>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Recipe {
            name: name.into(),
            required_items,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_creation_preserves_item_order() {
        let burger = Recipe::new(
            "Burger",
            vec![
                RequiredItem::new("Bun", 2),
                RequiredItem::new("Beef Patty", 1),
                RequiredItem::new("Lettuce", 1),
            ],
        );

        assert_eq!(burger.name, "Burger");
        assert_eq!(burger.required_items.len(), 3);
        assert_eq!(burger.required_items[0].name, "Bun");
        assert_eq!(burger.required_items[1].name, "Beef Patty");
        assert_eq!(burger.required_items[2].name, "Lettuce");
    }

    #[test]
    fn test_recipe_json_field_names() {
        let pie = Recipe::new("Meat Pie", vec![RequiredItem::new("Beef", 1)]);
        let json = serde_json::to_value(&pie).unwrap();

        assert_eq!(json["name"], "Meat Pie");
        assert_eq!(json["requiredItems"][0]["name"], "Beef");
        assert_eq!(json["requiredItems"][0]["quantity"], 1);
    }
}
