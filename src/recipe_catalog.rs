//! # Recipe Catalog Module
//!
//! An in-memory recipe store loaded from JSON rows. It plays the part of the
//! external recipe database: it applies [`RecipeFilters`] before recipes
//! reach the matching engine, looks recipes up by id and lists them by name.
//!
//! Rows may store ingredients as plain strings or as `{name, quantity}`
//! objects; both are converted when the rows are decoded.

use crate::recipe_errors::{RecipeError, RecipeResult};
use crate::recipe_model::Recipe;
use crate::recipe_search::RecipeFilters;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Read-only collection of recipes in load order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Decode a JSON array of recipe rows
    pub fn from_json(json: &str) -> RecipeResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        info!("Loaded {} recipes into catalog", recipes.len());
        Ok(Self::new(recipes))
    }

    /// Read and decode a JSON file of recipe rows
    pub fn load(path: &Path) -> RecipeResult<Self> {
        info!("Loading recipe catalog from: {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes passing every active filter, in catalog order
    pub fn query(&self, filters: &RecipeFilters) -> Vec<Recipe> {
        let selected: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| filters.accepts(recipe))
            .cloned()
            .collect();

        debug!(
            "Catalog query kept {}/{} recipes (filters: {:?})",
            selected.len(),
            self.recipes.len(),
            filters
        );
        selected
    }

    /// Look a recipe up by id
    pub fn get_by_id(&self, id: &str) -> Option<&Recipe> {
        let found = self.recipes.iter().find(|recipe| recipe.id == id);
        if found.is_none() {
            debug!("No recipe found with ID: {}", id);
        }
        found
    }

    /// Look a recipe up by id, failing when it is absent
    pub fn require(&self, id: &str) -> RecipeResult<&Recipe> {
        self.get_by_id(id)
            .ok_or_else(|| RecipeError::RecipeNotFound(id.to_string()))
    }

    /// Every recipe ordered by name
    pub fn all(&self) -> Vec<Recipe> {
        let mut recipes = self.recipes.clone();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Difficulty;

    const ROWS: &str = r#"[
        {"id": "b", "name": "Beef Stew", "ingredients": [{"name": "Beef", "quantity": "500g"}, "Carrots"],
         "cooking_time": 90, "difficulty": "medium", "diet_type": ["gluten-free"]},
        {"id": "a", "name": "Avocado Toast", "ingredients": ["Bread", "Avocado"],
         "cooking_time": 5, "difficulty": "easy", "diet_type": ["vegan", "vegetarian"]}
    ]"#;

    #[test]
    fn test_from_json_mixed_ingredients() {
        let catalog = RecipeCatalog::from_json(ROWS).unwrap();
        assert_eq!(catalog.len(), 2);

        let stew = catalog.get_by_id("b").unwrap();
        assert_eq!(stew.ingredient_names(), vec!["Beef", "Carrots"]);
        assert_eq!(stew.ingredients[0].quantity, "500g");
        assert_eq!(stew.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_all_sorted_by_name() {
        let catalog = RecipeCatalog::from_json(ROWS).unwrap();
        let names: Vec<String> = catalog.all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Avocado Toast", "Beef Stew"]);
    }

    #[test]
    fn test_query_applies_filters() {
        let catalog = RecipeCatalog::from_json(ROWS).unwrap();

        assert_eq!(catalog.query(&RecipeFilters::new()).len(), 2);

        let vegan = catalog.query(&RecipeFilters::new().with_diet_types(&["vegan"]));
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].id, "a");

        let quick = catalog.query(&RecipeFilters::new().with_max_cooking_time(30));
        assert_eq!(quick.len(), 1);

        let medium = catalog.query(&RecipeFilters::new().with_difficulty(Difficulty::Medium));
        assert_eq!(medium[0].id, "b");
    }

    #[test]
    fn test_missing_recipe() {
        let catalog = RecipeCatalog::from_json(ROWS).unwrap();
        assert!(catalog.get_by_id("zzz").is_none());
        assert!(matches!(
            catalog.require("zzz"),
            Err(RecipeError::RecipeNotFound(id)) if id == "zzz"
        ));
    }

    #[test]
    fn test_null_columns_do_not_reject_catalog() {
        let rows = r#"[
            {"id": "n", "name": "Plain Rice", "description": null, "image_url": null,
             "ingredients": ["Rice", "Water"], "diet_type": null}
        ]"#;

        let catalog = RecipeCatalog::from_json(rows).unwrap();
        let rice = catalog.require("n").unwrap();
        assert!(rice.description.is_empty());
        assert!(rice.diet_type.is_empty());
        assert_eq!(rice.ingredient_names(), vec!["Rice", "Water"]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RecipeCatalog::from_json("{not json"),
            Err(RecipeError::Serialization(_))
        ));
    }
}
