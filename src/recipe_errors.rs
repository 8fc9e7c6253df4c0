//! # Recipe Error Types Module
//!
//! This module defines the error type shared by the recipe catalog, the
//! favorites book and the recipe generator. Matching, scoring and
//! substitution lookups never fail and do not use it.

use thiserror::Error;

/// Convenience alias for results carrying a [`RecipeError`]
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Custom error types for recipe operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Recipe generation was requested without any ingredient
    #[error("Please provide at least one ingredient")]
    NoIngredients,

    /// No recipe with the given id exists in the catalog
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Ratings are whole stars between the configured bounds
    #[error("Invalid rating {0}: ratings must be between 1 and 5")]
    InvalidRating(u8),

    /// The recipe is already in the user's favorites
    #[error("Recipe {0} is already a favorite")]
    AlreadyFavorite(String),

    /// Reading a catalog file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog rows could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
