// 🥕 Ingredient Entity - base (non-composite) cookbook entry
//
// An ingredient is terminal in recipe expansion: it has no required
// items, only the time it takes to prepare one unit of it.

use serde::{Deserialize, Serialize};

/// A base ingredient with its per-unit preparation time.
///
/// Invariant (enforced by the registrar): `cook_time >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique entity name (exact, case-sensitive)
    pub name: String,

    /// Time units to prepare one unit of this ingredient
    #[serde(rename = "cookTime")]
    pub cook_time: i64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cook_time: i64) -> Self {
        Ingredient {
            name: name.into(),
            cook_time,
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
    fn test_ingredient_creation() {
        let beef = Ingredient::new("Beef", 5);

        assert_eq!(beef.name, "Beef");
        assert_eq!(beef.cook_time, 5);
    }

    #[test]
    fn test_ingredient_json_field_names() {
        let egg = Ingredient::new("Egg", 6);
        let json = serde_json::to_value(&egg).unwrap();

        // Wire contract uses camelCase
        assert_eq!(json["name"], "Egg");
        assert_eq!(json["cookTime"], 6);
    }
}
