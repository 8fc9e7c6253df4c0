//! # Recipe Search Module
//!
//! Ties the matching engine together: a recipe collection and a user's
//! ingredients go in, a ranked list of [`RecipeMatch`] comes out.
//!
//! The recipe collection is expected to be pre-filtered by the store (see
//! [`RecipeFilters`]); the search itself never looks at diet, difficulty or
//! cooking time. Searching holds no state between calls.
//!
//! ```rust
//! use pantry_recipes::recipe_model::Recipe;
//! use pantry_recipes::recipe_search::RecipeSearch;
//!
//! let recipes = vec![
//!     Recipe::new("1", "Pancakes")
//!         .with_ingredient("Flour", "1 cup")
//!         .with_ingredient("Eggs", "2")
//!         .with_ingredient("Milk", "1 cup")
//!         .with_ingredient("Butter", "1 tbsp"),
//! ];
//!
//! let search = RecipeSearch::default();
//! let results = search.search(&recipes, &["flour", "egg", "milk", "olive oil"]);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].match_score, 75.0);
//! assert_eq!(results[0].substitutions[0].substitute, "olive oil");
//! ```

use crate::ingredient_matcher::{match_normalized, rank_matches};
use crate::ingredient_normalizer::normalize_all;
use crate::recipe_model::{Difficulty, Recipe, RecipeMatch};
use crate::substitution_table::{SubstitutionResolver, SubstitutionTable};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Store-side predicates narrowing the recipe collection before matching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilters {
    /// Keep recipes sharing at least one tag; empty means no constraint
    #[serde(default)]
    pub diet_type: Vec<String>,
    /// Keep recipes of exactly this difficulty
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Keep recipes taking at most this many minutes; 0 means no constraint
    #[serde(default)]
    pub max_cooking_time: Option<u32>,
}

impl RecipeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diet_types<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.diet_type = tags.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = Some(minutes);
        self
    }

    /// Whether no predicate is active
    pub fn is_empty(&self) -> bool {
        self.diet_type.is_empty()
            && self.difficulty.is_none()
            && self.max_cooking_time.unwrap_or(0) == 0
    }

    /// Check a recipe against every active predicate
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        if !self.diet_type.is_empty() && !recipe.has_any_diet_type(&self.diet_type) {
            return false;
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }

        match self.max_cooking_time {
            Some(max) if max > 0 => recipe.cooking_time <= max,
            _ => true,
        }
    }
}

/// Scores recipes against a user's ingredients and ranks the good matches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearch {
    resolver: SubstitutionResolver,
}

impl RecipeSearch {
    pub fn new(resolver: SubstitutionResolver) -> Self {
        Self { resolver }
    }

    /// Build a search around a custom substitution table
    pub fn with_table(table: SubstitutionTable) -> Self {
        Self::new(SubstitutionResolver::new(table))
    }

    pub fn resolver(&self) -> &SubstitutionResolver {
        &self.resolver
    }

    /// Score a single recipe without filtering it
    pub fn score_recipe<U: AsRef<str>>(&self, recipe: &Recipe, user_ingredients: &[U]) -> RecipeMatch {
        let normalized_user = normalize_all(user_ingredients);
        self.score_normalized(recipe, &normalized_user)
    }

    /// Score every recipe without filtering or sorting
    pub fn score_all<U: AsRef<str>>(&self, recipes: &[Recipe], user_ingredients: &[U]) -> Vec<RecipeMatch> {
        let normalized_user = normalize_all(user_ingredients);
        debug!("Normalized user ingredients: {:?}", normalized_user);

        recipes
            .iter()
            .map(|recipe| self.score_normalized(recipe, &normalized_user))
            .collect()
    }

    /// Score, filter (> 50%) and rank a recipe collection, best first
    pub fn search<U: AsRef<str>>(&self, recipes: &[Recipe], user_ingredients: &[U]) -> Vec<RecipeMatch> {
        if recipes.is_empty() {
            debug!("No recipes to search");
            return Vec::new();
        }

        let ranked = rank_matches(self.score_all(recipes, user_ingredients));
        info!(
            "Searched {} recipes with {} ingredients: {} suggestions",
            recipes.len(),
            user_ingredients.len(),
            ranked.len()
        );
        ranked
    }

    fn score_normalized(&self, recipe: &Recipe, normalized_user: &[String]) -> RecipeMatch {
        let split = match_normalized(&recipe.ingredient_names(), normalized_user);
        let match_score = split.score();
        let substitutions = self
            .resolver
            .resolve_normalized(&split.missing, normalized_user);

        debug!(
            "Recipe '{}' scored {:.1}% ({} substitutions)",
            recipe.name,
            match_score,
            substitutions.len()
        );

        RecipeMatch {
            recipe: recipe.clone(),
            match_score,
            matched_ingredients: split.matched,
            missing_ingredients: split.missing,
            substitutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Substitution;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        ingredients
            .iter()
            .fold(Recipe::new(id, id), |r, name| r.with_ingredient(name, "1 cup"))
    }

    #[test]
    fn test_score_recipe_invariants() {
        let search = RecipeSearch::default();
        let r = recipe("r", &["Chicken", "", "Rice", "Peas"]);

        let result = search.score_recipe(&r, &["chicken", "rice"]);

        assert_eq!(result.total_ingredients(), 3);
        assert!((result.match_score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.missing_ingredients, vec!["Peas"]);
    }

    #[test]
    fn test_recipe_without_named_ingredients_scores_zero() {
        let search = RecipeSearch::default();
        let r = recipe("empty", &["", ""]);

        let result = search.score_recipe(&r, &["anything"]);
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.total_ingredients(), 0);
        assert!(search.search(&[r], &["anything"]).is_empty());
    }

    #[test]
    fn test_search_excludes_exactly_half() {
        let search = RecipeSearch::default();
        let recipes = vec![
            recipe("half", &["a", "b", "x", "y"]),
            recipe("most", &["a", "b", "c", "e"]),
        ];

        let scores: Vec<f64> = search
            .score_all(&recipes, &["a", "b", "c"])
            .iter()
            .map(|m| m.match_score)
            .collect();
        assert_eq!(scores, vec![50.0, 75.0]);

        let results = search.search(&recipes, &["a", "b", "c"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, "most");
        assert_eq!(results[0].match_score, 75.0);
    }

    #[test]
    fn test_substitutions_attached_to_matches() {
        let search = RecipeSearch::default();
        let recipes = vec![recipe("stew", &["Beef", "Carrots", "Onion"])];

        let results = search.search(&recipes, &["carrot", "onions", "lentils"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].substitutions, vec![Substitution::new("Beef", "lentils")]);
    }

    #[test]
    fn test_custom_table_is_used() {
        let search = RecipeSearch::with_table(SubstitutionTable::new());
        let recipes = vec![recipe("toast", &["Bread", "Butter", "Jam"])];

        let results = search.search(&recipes, &["bread", "jam", "olive oil"]);
        assert!(results[0].substitutions.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let search = RecipeSearch::default();
        let none: [&str; 0] = [];
        assert!(search.search(&[], &["egg"]).is_empty());
        assert!(search.search(&[recipe("r", &["egg"])], &none).is_empty());
    }

    #[test]
    fn test_filters_accept() {
        let quick_vegan = Recipe::new("1", "Quick vegan")
            .with_cooking_time(15)
            .with_difficulty(Difficulty::Easy)
            .with_diet_types(&["vegan", "gluten-free"]);

        assert!(RecipeFilters::new().accepts(&quick_vegan));
        assert!(RecipeFilters::new().with_diet_types(&["vegetarian", "vegan"]).accepts(&quick_vegan));
        assert!(!RecipeFilters::new().with_diet_types(&["vegetarian"]).accepts(&quick_vegan));
        assert!(!RecipeFilters::new().with_difficulty(Difficulty::Hard).accepts(&quick_vegan));
        assert!(RecipeFilters::new().with_max_cooking_time(15).accepts(&quick_vegan));
        assert!(!RecipeFilters::new().with_max_cooking_time(10).accepts(&quick_vegan));
    }

    #[test]
    fn test_zero_max_time_means_unbounded() {
        let slow = Recipe::new("2", "Slow").with_cooking_time(240);
        let filters = RecipeFilters::new().with_max_cooking_time(0);
        assert!(filters.is_empty());
        assert!(filters.accepts(&slow));
    }
}
