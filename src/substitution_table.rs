//! # Substitution Table Module
//!
//! Maps a canonical ingredient to the alternatives that can stand in for it,
//! and resolves which of a recipe's missing ingredients the user can cover
//! with something already in their pantry.
//!
//! The table is an immutable value handed to the resolver at construction,
//! so tests and callers can swap in their own data.
//!
//! ```rust
//! use pantry_recipes::substitution_table::{SubstitutionResolver, SubstitutionTable};
//!
//! let resolver = SubstitutionResolver::new(SubstitutionTable::common());
//! let subs = resolver.resolve_substitutions(&["butter"], &["olive oil"]);
//!
//! assert_eq!(subs.len(), 1);
//! assert_eq!(subs[0].substitute, "olive oil");
//! ```

use crate::ingredient_normalizer::{normalize, normalize_all};
use crate::recipe_model::Substitution;
use log::{debug, trace};
use std::collections::HashMap;

/// Reference substitution data: canonical ingredient and its alternatives in
/// order of preference
const COMMON_SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("butter", &["olive oil", "coconut oil", "margarine"]),
    ("milk", &["almond milk", "soy milk", "coconut milk"]),
    ("egg", &["flax egg", "chia egg", "applesauce"]),
    ("flour", &["almond flour", "coconut flour", "gluten-free flour"]),
    ("sugar", &["honey", "maple syrup", "stevia"]),
    ("sour cream", &["greek yogurt", "coconut cream"]),
    ("cream", &["coconut cream", "cashew cream"]),
    ("chicken", &["tofu", "tempeh", "seitan"]),
    ("beef", &["mushrooms", "lentils", "beyond meat"]),
    ("cheese", &["nutritional yeast", "cashew cheese", "vegan cheese"]),
];

/// Read-only mapping from canonical ingredient to alternative ingredients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionTable {
    entries: HashMap<String, Vec<String>>,
}

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of ten common kitchen substitutions
    pub fn common() -> Self {
        COMMON_SUBSTITUTIONS
            .iter()
            .fold(Self::new(), |table, &(ingredient, alternatives)| {
                table.with_entry(ingredient, alternatives)
            })
    }

    /// Add or replace the alternatives for an ingredient
    ///
    /// The key is normalized so lookups match however it was written.
    /// Alternatives keep their declared spelling and order.
    pub fn with_entry<S: AsRef<str>>(mut self, ingredient: &str, alternatives: &[S]) -> Self {
        self.entries.insert(
            normalize(ingredient),
            alternatives
                .iter()
                .map(|a| a.as_ref().to_string())
                .collect(),
        );
        self
    }

    /// Alternatives for an already-normalized ingredient name
    pub fn alternatives(&self, normalized: &str) -> Option<&[String]> {
        self.entries.get(normalized).map(Vec::as_slice)
    }

    /// Number of ingredients with alternatives
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Suggests substitutes the user already holds for missing ingredients
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionResolver {
    table: SubstitutionTable,
}

impl SubstitutionResolver {
    pub fn new(table: SubstitutionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Find substitutions for missing ingredients among the user's ingredients
    ///
    /// For every missing ingredient with a table entry, each alternative the
    /// user holds (after normalization) yields one pair, in table order. The
    /// missing name keeps the recipe's spelling and the substitute keeps the
    /// table's. Unknown ingredients produce nothing.
    pub fn resolve_substitutions<M, U>(&self, missing: &[M], user_ingredients: &[U]) -> Vec<Substitution>
    where
        M: AsRef<str>,
        U: AsRef<str>,
    {
        let normalized_user = normalize_all(user_ingredients);
        self.resolve_normalized(missing, &normalized_user)
    }

    /// Same as [`resolve_substitutions`](Self::resolve_substitutions) with
    /// user ingredients already normalized
    pub fn resolve_normalized<M: AsRef<str>>(
        &self,
        missing: &[M],
        normalized_user: &[String],
    ) -> Vec<Substitution> {
        let mut substitutions = Vec::new();

        for missing_name in missing {
            let missing_name = missing_name.as_ref();
            let Some(alternatives) = self.table.alternatives(&normalize(missing_name)) else {
                trace!("No substitutions known for '{}'", missing_name);
                continue;
            };

            for alternative in alternatives {
                let normalized_alternative = normalize(alternative);
                if normalized_user.iter().any(|u| *u == normalized_alternative) {
                    debug!("Substitution found: '{}' -> '{}'", missing_name, alternative);
                    substitutions.push(Substitution::new(missing_name, alternative));
                }
            }
        }

        substitutions
    }
}

impl Default for SubstitutionResolver {
    fn default() -> Self {
        Self::new(SubstitutionTable::common())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SubstitutionResolver {
        SubstitutionResolver::default()
    }

    #[test]
    fn test_common_table_has_ten_entries() {
        let table = SubstitutionTable::common();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.alternatives("butter").unwrap(),
            &["olive oil", "coconut oil", "margarine"]
        );
        assert!(table.alternatives("water").is_none());
    }

    #[test]
    fn test_butter_with_olive_oil() {
        let subs = resolver().resolve_substitutions(&["butter"], &["olive oil"]);
        assert_eq!(subs, vec![Substitution::new("butter", "olive oil")]);
    }

    #[test]
    fn test_no_substitute_held() {
        let subs = resolver().resolve_substitutions(&["butter"], &["water"]);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_multiple_alternatives_follow_table_order() {
        let subs = resolver().resolve_substitutions(&["Butter"], &["Margarine", "olive oil"]);
        assert_eq!(
            subs,
            vec![
                Substitution::new("Butter", "olive oil"),
                Substitution::new("Butter", "margarine"),
            ]
        );
    }

    #[test]
    fn test_plural_missing_ingredient_is_normalized() {
        // "Eggs" normalizes to the "egg" key
        let subs = resolver().resolve_substitutions(&["Eggs"], &["applesauce"]);
        assert_eq!(subs, vec![Substitution::new("Eggs", "applesauce")]);
    }

    #[test]
    fn test_plural_alternative_matches_singular_user_entry() {
        // "mushrooms" and "Mushroom" normalize identically
        let subs = resolver().resolve_substitutions(&["beef"], &["Mushroom"]);
        assert_eq!(subs, vec![Substitution::new("beef", "mushrooms")]);
    }

    #[test]
    fn test_unknown_ingredient_is_silent() {
        let subs = resolver().resolve_substitutions(&["saffron"], &["turmeric"]);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_custom_table() {
        let table = SubstitutionTable::new().with_entry("Limes", &["lemon"]);
        let resolver = SubstitutionResolver::new(table);

        let subs = resolver.resolve_substitutions(&["lime"], &["Lemons"]);
        assert_eq!(subs, vec![Substitution::new("lime", "lemon")]);

        let none = resolver.resolve_substitutions(&["butter"], &["olive oil"]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(resolver().resolve_substitutions(&empty, &["olive oil"]).is_empty());
        assert!(resolver().resolve_substitutions(&["butter"], &empty).is_empty());
    }
}
