// 🍔 DevDonalds Cookbook - Core Library
// Exposes all modules for use in the API server and tests

pub mod cookbook;
pub mod entities;
pub mod parser;
pub mod registrar;
pub mod resolver;

// Re-export commonly used types
pub use cookbook::{Cookbook, CookbookError};
pub use entities::{Entry, Ingredient, Recipe, RequiredItem};
pub use parser::parse_handwriting;
pub use registrar::register_entry;
pub use resolver::{summarize, IngredientQuantity, RecipeSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
