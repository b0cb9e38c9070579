// 📖 Cookbook Store - process-lifetime entry registry
//
// One flat, name-keyed mapping shared by both entity kinds. Entries are
// immutable once stored: there is no update or delete, and the whole store
// is rebuilt from nothing on each run.

use crate::entities::Entry;
use std::collections::HashMap;

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

/// Every way a registration or resolution can be rejected.
///
/// The HTTP layer collapses all of these into a single 400 response; the
/// variants exist for logs and tests, not for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookbookError {
    /// Missing or wrong-typed required field in a descriptor
    MalformedInput(String),
    /// Referenced entity name not present in the store
    NotFound(String),
    /// Duplicate name at registration
    Conflict(String),
    /// Wrong entity kind, empty collections, out-of-range numbers,
    /// duplicate item names within one recipe
    InvalidShape(String),
    /// A recipe reappeared on its own expansion path
    CircularReference(String),
}

impl std::fmt::Display for CookbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CookbookError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            CookbookError::NotFound(name) => write!(f, "entry not found: {}", name),
            CookbookError::Conflict(name) => write!(f, "entry already exists: {}", name),
            CookbookError::InvalidShape(msg) => write!(f, "invalid shape: {}", msg),
            CookbookError::CircularReference(name) => {
                write!(f, "circular reference through recipe: {}", name)
            }
        }
    }
}

impl std::error::Error for CookbookError {}

// ============================================================================
// COOKBOOK STORE
// ============================================================================

/// In-memory store of all registered entries, keyed by exact name.
///
/// Invariant: every key equals the `name` of its value, names are compared
/// case-sensitively, and no two entries share a name.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: HashMap<String, Entry>,
}

impl Cookbook {
    /// Create a new empty cookbook
    pub fn new() -> Self {
        Cookbook {
            entries: HashMap::new(),
        }
    }

    /// Insert an entry under its own name.
    ///
    /// The registrar checks for duplicates before building the entry; this
    /// check is the store invariant itself, so it is enforced here too.
    pub fn insert(&mut self, entry: Entry) -> Result<(), CookbookError> {
        let name = entry.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(CookbookError::Conflict(name));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Look up an entry by exact name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Check whether a name is taken
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Ingredient;

    #[test]
    fn test_cookbook_insert_and_get() {
        let mut cookbook = Cookbook::new();
        assert!(cookbook.is_empty());

        cookbook
            .insert(Entry::Ingredient(Ingredient::new("Beef", 2)))
            .unwrap();

        assert_eq!(cookbook.len(), 1);
        assert!(cookbook.contains("Beef"));

        let entry = cookbook.get("Beef").unwrap();
        assert_eq!(entry.name(), "Beef");
    }

    #[test]
    fn test_cookbook_names_are_case_sensitive() {
        let mut cookbook = Cookbook::new();
        cookbook
            .insert(Entry::Ingredient(Ingredient::new("Beef", 2)))
            .unwrap();

        assert!(cookbook.get("beef").is_none());
        assert!(!cookbook.contains("BEEF"));
    }

    #[test]
    fn test_cookbook_rejects_duplicate_names() {
        let mut cookbook = Cookbook::new();
        cookbook
            .insert(Entry::Ingredient(Ingredient::new("Beef", 2)))
            .unwrap();

        let result = cookbook.insert(Entry::Ingredient(Ingredient::new("Beef", 9)));
        assert_eq!(result, Err(CookbookError::Conflict("Beef".to_string())));

        // First entry is retained untouched
        let Entry::Ingredient(beef) = cookbook.get("Beef").unwrap() else {
            panic!("expected ingredient");
        };
        assert_eq!(beef.cook_time, 2);
    }

    #[test]
    fn test_cookbook_error_display() {
        let err = CookbookError::CircularReference("Sourdough".to_string());
        assert_eq!(
            err.to_string(),
            "circular reference through recipe: Sourdough"
        );
    }
}
