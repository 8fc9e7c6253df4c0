//! # Recipe Data Model
//!
//! This module defines the data structures exchanged between the recipe
//! store, the matching engine and the recipe generator.
//!
//! ## Core Concepts
//!
//! - **Recipe**: A stored recipe, read-only from the matcher's point of view
//! - **RecipeIngredient**: A display name plus a free-text quantity
//! - **RecipeMatch**: A recipe annotated with its match score against a pantry
//! - **GeneratedRecipe**: A recipe produced from templates for a pantry
//!
//! Recipe rows have historically stored ingredients either as plain strings
//! or as `{name, quantity}` objects. Both shapes are accepted when
//! deserializing and converted to [`RecipeIngredient`] immediately, so the
//! rest of the crate only ever sees one representation.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::recipe_model::{Difficulty, Recipe};
//!
//! let omelette = Recipe::new("r-1", "Omelette")
//!     .with_ingredient("Eggs", "3 large")
//!     .with_ingredient("Butter", "1 tbsp")
//!     .with_difficulty(Difficulty::Easy)
//!     .with_cooking_time(10);
//!
//! assert_eq!(omelette.ingredient_names(), vec!["Eggs", "Butter"]);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How hard a recipe is to prepare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-serving nutrition figures, stored flat on the recipe row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carbs: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fat: u32,
}

impl Nutrition {
    pub fn new(calories: u32, protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Display name (e.g., "Tomatoes"). Empty when the source row had none.
    pub name: String,
    /// Free-text quantity (e.g., "2 medium")
    #[serde(default)]
    pub quantity: String,
}

impl RecipeIngredient {
    pub fn new(name: &str, quantity: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.quantity, self.name)
        }
    }
}

/// Ingredient entry as found in stored recipe rows
///
/// Only used while deserializing; converted to [`RecipeIngredient`] at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawIngredient {
    /// Bare ingredient name (`"flour"`)
    Name(String),
    /// Object form (`{"name": "flour", "quantity": "2 cups"}`)
    Entry {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        quantity: Option<Value>,
    },
    /// Anything else; kept so that one odd entry does not reject the row
    Unrecognized(Value),
}

impl From<RawIngredient> for RecipeIngredient {
    fn from(raw: RawIngredient) -> Self {
        match raw {
            RawIngredient::Name(name) => RecipeIngredient {
                name,
                quantity: String::new(),
            },
            RawIngredient::Entry { name, quantity } => RecipeIngredient {
                name: name.unwrap_or_default(),
                quantity: match quantity {
                    Some(Value::String(s)) => s,
                    Some(Value::Number(n)) => n.to_string(),
                    _ => String::new(),
                },
            },
            RawIngredient::Unrecognized(_) => RecipeIngredient {
                name: String::new(),
                quantity: String::new(),
            },
        }
    }
}

/// Read an explicit `null` column as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept either ingredient shape, or a non-array value meaning "no ingredients"
fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<RecipeIngredient>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<RawIngredient>(entry.clone())
                .unwrap_or(RawIngredient::Unrecognized(entry))
                .into()
        })
        .collect())
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Cooking time in minutes
    #[serde(default, deserialize_with = "null_as_default")]
    pub cooking_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "null_as_default")]
    pub diet_type: Vec<String>,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Recipe {
    /// Create an empty recipe with an id and a name
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            image_url: String::new(),
            cooking_time: 0,
            difficulty: Difficulty::default(),
            diet_type: Vec::new(),
            nutrition: Nutrition::default(),
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Append an ingredient line
    pub fn with_ingredient(mut self, name: &str, quantity: &str) -> Self {
        self.ingredients.push(RecipeIngredient::new(name, quantity));
        self
    }

    pub fn with_instructions<S: AsRef<str>>(mut self, steps: &[S]) -> Self {
        self.instructions = steps.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = minutes;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_diet_types<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.diet_type = tags.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn with_image_url(mut self, url: &str) -> Self {
        self.image_url = url.to_string();
        self
    }

    /// Ingredient display names in recipe order, including empty ones
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    /// Whether the recipe carries at least one of the given diet tags
    pub fn has_any_diet_type<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .any(|tag| self.diet_type.iter().any(|own| own == tag.as_ref()))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} min, {})",
            self.name, self.cooking_time, self.difficulty
        )
    }
}

/// A missing ingredient the user can replace with one they already have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Missing ingredient as written in the recipe
    pub missing: String,
    /// Alternative as written in the substitution table
    pub substitute: String,
}

impl Substitution {
    pub fn new(missing: &str, substitute: &str) -> Self {
        Self {
            missing: missing.to_string(),
            substitute: substitute.to_string(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.missing, self.substitute)
    }
}

/// A recipe scored against a user's ingredients
///
/// Computed per search and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Percentage of named recipe ingredients the user has (0-100)
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchedIngredients")]
    pub matched_ingredients: Vec<String>,
    #[serde(rename = "missingIngredients")]
    pub missing_ingredients: Vec<String>,
    pub substitutions: Vec<Substitution>,
}

impl RecipeMatch {
    /// Wrap a recipe without scoring it, as shown in the favorites view
    pub fn unscored(recipe: Recipe) -> Self {
        Self {
            recipe,
            match_score: 0.0,
            matched_ingredients: Vec::new(),
            missing_ingredients: Vec::new(),
            substitutions: Vec::new(),
        }
    }

    /// Number of named ingredients the score was computed over
    pub fn total_ingredients(&self) -> usize {
        self.matched_ingredients.len() + self.missing_ingredients.len()
    }
}

impl fmt::Display for RecipeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {:.0}% match ({}/{} ingredients)",
            self.recipe.name,
            self.match_score,
            self.matched_ingredients.len(),
            self.total_ingredients()
        )
    }
}

/// Template family a generated recipe belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    StirFry,
    Salad,
    Soup,
    /// No dedicated template; generic instructions apply
    Other,
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecipeCategory::StirFry => "stir fry",
            RecipeCategory::Salad => "salad",
            RecipeCategory::Soup => "soup",
            RecipeCategory::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A recipe produced by the template generator
///
/// Nutrition values are fixed per template, not computed from ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub category: RecipeCategory,
    #[serde(flatten)]
    pub recipe: Recipe,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new("1", "Pancakes")
            .with_ingredient("Flour", "2 cups")
            .with_ingredient("Milk", "1 cup")
            .with_difficulty(Difficulty::Medium)
            .with_cooking_time(25)
            .with_diet_types(&["vegetarian"])
            .with_nutrition(Nutrition::new(300, 8, 45, 9));

        assert_eq!(recipe.ingredient_names(), vec!["Flour", "Milk"]);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.nutrition.calories, 300);
        assert!(recipe.has_any_diet_type(&["vegan", "vegetarian"]));
        assert!(!recipe.has_any_diet_type(&["vegan"]));
    }

    #[test]
    fn test_recipe_text_builders() {
        let recipe = Recipe::new("2", "Omelette")
            .with_description("Fluffy folded eggs")
            .with_instructions(&["Beat the eggs", "Cook in butter"])
            .with_image_url("https://example.com/omelette.jpg");

        assert_eq!(recipe.description, "Fluffy folded eggs");
        assert_eq!(recipe.instructions, vec!["Beat the eggs", "Cook in butter"]);
        assert_eq!(recipe.image_url, "https://example.com/omelette.jpg");
    }

    #[test]
    fn test_deserialize_null_columns() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r6",
            "name": "Sparse",
            "description": null,
            "image_url": null,
            "instructions": null,
            "ingredients": null,
            "cooking_time": null,
            "difficulty": null,
            "diet_type": null,
            "calories": null
        }))
        .unwrap();

        assert_eq!(recipe, Recipe::new("r6", "Sparse"));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_deserialize_object_ingredients() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r1",
            "name": "Salad",
            "ingredients": [
                {"name": "Lettuce", "quantity": "1 head"},
                {"name": "Tomatoes", "quantity": 2}
            ],
            "difficulty": "easy",
            "calories": 120
        }))
        .unwrap();

        assert_eq!(recipe.ingredients[0], RecipeIngredient::new("Lettuce", "1 head"));
        assert_eq!(recipe.ingredients[1], RecipeIngredient::new("Tomatoes", "2"));
        assert_eq!(recipe.nutrition.calories, 120);
        assert_eq!(recipe.nutrition.fat, 0);
    }

    #[test]
    fn test_deserialize_mixed_and_malformed_ingredients() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r2",
            "name": "Mystery",
            "ingredients": ["Rice", {"quantity": "1 cup"}, {"name": null}, 42]
        }))
        .unwrap();

        let names = recipe.ingredient_names();
        assert_eq!(names, vec!["Rice", "", "", ""]);
        assert_eq!(recipe.ingredients[1].quantity, "1 cup");
    }

    #[test]
    fn test_non_array_ingredients_become_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r3",
            "name": "Broken",
            "ingredients": "flour, sugar"
        }))
        .unwrap();

        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_match_serialization_keys() {
        let recipe = Recipe::new("r4", "Toast").with_ingredient("Bread", "2 slices");
        let mut matched = RecipeMatch::unscored(recipe);
        matched.match_score = 100.0;
        matched.matched_ingredients = vec!["Bread".to_string()];

        let value = serde_json::to_value(&matched).unwrap();
        assert_eq!(value["matchScore"], json!(100.0));
        assert_eq!(value["matchedIngredients"], json!(["Bread"]));
        assert_eq!(value["id"], json!("r4"));
        assert_eq!(value["difficulty"], json!("easy"));
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_display_formatting() {
        let ingredient = RecipeIngredient::new("garlic", "1 medium");
        assert_eq!(ingredient.to_string(), "1 medium garlic");

        let bare = RecipeIngredient::new("salt", "");
        assert_eq!(bare.to_string(), "salt");

        let recipe = Recipe::new("r5", "Soup").with_cooking_time(35);
        assert_eq!(recipe.to_string(), "Soup (35 min, easy)");

        let mut matched = RecipeMatch::unscored(recipe);
        matched.match_score = 75.0;
        matched.matched_ingredients = vec!["a".into(), "b".into(), "c".into()];
        matched.missing_ingredients = vec!["d".into()];
        assert_eq!(matched.to_string(), "Soup - 75% match (3/4 ingredients)");

        assert_eq!(Substitution::new("butter", "olive oil").to_string(), "butter -> olive oil");
    }
}
