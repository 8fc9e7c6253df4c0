//! # Ingredient Matcher Module
//!
//! Partitions a recipe's ingredients into those the user has and those they
//! are missing, turns the split into a percentage score, and ranks scored
//! recipes.
//!
//! Matching is strict equality between normalized names. There is no
//! substring or fuzzy matching: `"olive oil"` does not match `"oil"`.
//!
//! ```rust
//! use pantry_recipes::ingredient_matcher::{match_ingredients, match_score};
//!
//! let result = match_ingredients(&["Eggs", "Milk", "Flour", "Sugar"], &["egg", "milk ", "flour"]);
//!
//! assert_eq!(result.matched, vec!["Eggs", "Milk", "Flour"]);
//! assert_eq!(result.missing, vec!["Sugar"]);
//! assert_eq!(match_score(result.matched.len(), result.total()), 75.0);
//! ```

use crate::config::MATCH_SCORE_THRESHOLD;
use crate::ingredient_normalizer::{normalize, normalize_all};
use crate::recipe_model::RecipeMatch;
use log::{debug, trace};
use std::cmp::Ordering;

/// Outcome of matching one recipe against a user's ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientMatch {
    /// Recipe ingredient names the user has, in recipe order
    pub matched: Vec<String>,
    /// Recipe ingredient names the user lacks, in recipe order
    pub missing: Vec<String>,
}

impl IngredientMatch {
    /// Number of named ingredients considered
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Percentage score for this split
    pub fn score(&self) -> f64 {
        match_score(self.matched.len(), self.total())
    }
}

/// Match recipe ingredient names against the user's ingredients
///
/// Empty recipe names are dropped before matching and count toward neither
/// list. Output names keep the recipe's original casing.
pub fn match_ingredients<R, U>(recipe_ingredients: &[R], user_ingredients: &[U]) -> IngredientMatch
where
    R: AsRef<str>,
    U: AsRef<str>,
{
    let normalized_user = normalize_all(user_ingredients);
    match_normalized(recipe_ingredients, &normalized_user)
}

/// Same as [`match_ingredients`] with user ingredients already normalized
///
/// Lets a search normalize the pantry once for a whole recipe collection.
pub fn match_normalized<R: AsRef<str>>(
    recipe_ingredients: &[R],
    normalized_user: &[String],
) -> IngredientMatch {
    let mut result = IngredientMatch::default();

    for name in recipe_ingredients {
        let name: &str = name.as_ref();
        if name.is_empty() {
            continue;
        }

        let normalized = normalize(name);
        if normalized_user.iter().any(|user| *user == normalized) {
            result.matched.push(name.to_string());
        } else {
            result.missing.push(name.to_string());
        }
    }

    trace!(
        "Matched {}/{} recipe ingredients (missing: {:?})",
        result.matched.len(),
        result.total(),
        result.missing
    );
    result
}

/// Percentage of matched ingredients, or 0 when there are none to match
pub fn match_score(matched_count: usize, total_count: usize) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    (matched_count as f64 / total_count as f64) * 100.0
}

/// Whether a score clears the suggestion threshold (strictly above 50%)
pub fn is_good_match(score: f64) -> bool {
    score > MATCH_SCORE_THRESHOLD
}

/// Keep matches scoring above the threshold, best first
///
/// The sort is stable: equal scores keep their incoming order.
pub fn rank_matches(matches: Vec<RecipeMatch>) -> Vec<RecipeMatch> {
    let scored = matches.len();
    let mut kept: Vec<RecipeMatch> = matches
        .into_iter()
        .filter(|m| is_good_match(m.match_score))
        .collect();

    kept.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        "Ranked {} matches, {} above {}%",
        scored,
        kept.len(),
        MATCH_SCORE_THRESHOLD
    );
    kept
}
