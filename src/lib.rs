//! # Pantry Recipes
//!
//! Suggests recipes from the ingredients a user already has. Recipes are
//! scored by the share of their ingredients found in the user's pantry,
//! filtered to good matches, ranked, and annotated with substitutions the
//! user can make. A template generator proposes recipes when the catalog
//! has nothing suitable.

pub mod config;
pub mod favorites;
pub mod ingredient_matcher;
pub mod ingredient_normalizer;
pub mod quantity_patterns;
pub mod recipe_catalog;
pub mod recipe_errors;
pub mod recipe_generator;
pub mod recipe_model;
pub mod recipe_search;
pub mod substitution_table;

pub use recipe_errors::{RecipeError, RecipeResult};
pub use recipe_model::{GeneratedRecipe, Recipe, RecipeMatch, Substitution};
pub use recipe_search::{RecipeFilters, RecipeSearch};
