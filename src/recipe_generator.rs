//! # Recipe Generator Module
//!
//! Produces three recipes (stir fry, salad, soup) from a user's ingredients
//! without consulting the recipe store.
//!
//! Each template names itself after the first one or two user ingredients,
//! appends a fixed set of pantry staples, labels every ingredient with a
//! heuristic quantity (see [`QuantityRules`]) and renders a fixed list of
//! steps for its category. Nutrition figures are per-template constants.
//!
//! The timestamp only feeds recipe ids and `created_at`; the same
//! ingredients always produce the same content.
//!
//! ```rust
//! use pantry_recipes::recipe_generator::RecipeGenerator;
//!
//! let generator = RecipeGenerator::new();
//! let recipes = generator.generate(&["chicken", "broccoli"])?;
//!
//! assert_eq!(recipes.len(), 3);
//! assert_eq!(recipes[0].recipe.name, "chicken & broccoli Stir Fry");
//! # Ok::<(), pantry_recipes::recipe_errors::RecipeError>(())
//! ```

use crate::quantity_patterns::QuantityRules;
use crate::recipe_errors::{RecipeError, RecipeResult};
use crate::recipe_model::{
    Difficulty, GeneratedRecipe, Nutrition, Recipe, RecipeCategory, RecipeIngredient,
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::time::Duration;

/// Name used when a template wants a second ingredient the user did not give
const SECOND_INGREDIENT_FALLBACK: &str = "Vegetables";

const STIR_FRY_PANTRY: &[&str] = &["oil", "garlic", "soy sauce", "salt", "pepper"];
const SALAD_PANTRY: &[&str] = &["olive oil", "lemon juice", "salt", "herbs"];
const SOUP_PANTRY: &[&str] = &["vegetable broth", "onion", "garlic", "salt", "pepper", "herbs"];

/// Static parts of a recipe template
struct RecipeTemplate {
    category: RecipeCategory,
    description: &'static str,
    cooking_time: u32,
    difficulty: Difficulty,
    nutrition: Nutrition,
    diet_type: &'static [&'static str],
    image_url: &'static str,
}

static TEMPLATES: [RecipeTemplate; 3] = [
    RecipeTemplate {
        category: RecipeCategory::StirFry,
        description: "A quick and flavorful stir fry featuring your main ingredients",
        cooking_time: 20,
        difficulty: Difficulty::Easy,
        nutrition: Nutrition {
            calories: 250,
            protein: 15,
            carbs: 20,
            fat: 12,
        },
        diet_type: &["healthy", "quick"],
        image_url: "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=500&h=300&fit=crop",
    },
    RecipeTemplate {
        category: RecipeCategory::Salad,
        description: "A fresh and nutritious salad perfect for any meal",
        cooking_time: 15,
        difficulty: Difficulty::Easy,
        nutrition: Nutrition {
            calories: 180,
            protein: 8,
            carbs: 15,
            fat: 10,
        },
        diet_type: &["healthy", "fresh", "vegetarian"],
        image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=500&h=300&fit=crop",
    },
    RecipeTemplate {
        category: RecipeCategory::Soup,
        description: "A comforting soup that makes the most of your ingredients",
        cooking_time: 35,
        difficulty: Difficulty::Easy,
        nutrition: Nutrition {
            calories: 220,
            protein: 12,
            carbs: 25,
            fat: 8,
        },
        diet_type: &["comforting", "warm", "vegetarian"],
        image_url: "https://images.unsplash.com/photo-1547592180-85f173990554?w=500&h=300&fit=crop",
    },
];

/// Pantry staples a category adds to the user's ingredients
pub fn pantry_additions(category: RecipeCategory) -> &'static [&'static str] {
    match category {
        RecipeCategory::StirFry => STIR_FRY_PANTRY,
        RecipeCategory::Salad => SALAD_PANTRY,
        RecipeCategory::Soup => SOUP_PANTRY,
        RecipeCategory::Other => &[],
    }
}

/// Recipe title for a category, built from the first user ingredients
pub fn recipe_name<S: AsRef<str>>(category: RecipeCategory, user_ingredients: &[S]) -> String {
    let first = user_ingredients.first().map(AsRef::as_ref).unwrap_or_default();
    let second = user_ingredients.get(1).map(AsRef::as_ref);

    match category {
        RecipeCategory::StirFry => {
            let lead: Vec<&str> = user_ingredients.iter().take(2).map(AsRef::as_ref).collect();
            format!("{} Stir Fry", lead.join(" & "))
        }
        RecipeCategory::Salad => format!(
            "{} & {} Salad",
            first,
            second.unwrap_or(SECOND_INGREDIENT_FALLBACK)
        ),
        RecipeCategory::Soup => format!("Hearty {first} Soup"),
        RecipeCategory::Other => format!("{first} Dish"),
    }
}

/// Cooking steps for a category
///
/// The first user ingredient (and for stir fries the second, or
/// "vegetables") is woven into the steps. Categories without a template get
/// five generic steps.
pub fn instructions_for<S: AsRef<str>>(category: RecipeCategory, user_ingredients: &[S]) -> Vec<String> {
    let first = user_ingredients.first().map(AsRef::as_ref).unwrap_or_default();
    let second = user_ingredients
        .get(1)
        .map(AsRef::as_ref)
        .unwrap_or("vegetables");

    match category {
        RecipeCategory::StirFry => vec![
            "Heat oil in a large wok or pan over high heat".to_string(),
            format!("Add {first} and stir-fry for 2-3 minutes"),
            format!("Add {second} and continue cooking for 3-4 minutes"),
            "Add garlic and stir for 30 seconds".to_string(),
            "Season with soy sauce, salt, and pepper".to_string(),
            "Cook for 1-2 more minutes until everything is tender".to_string(),
            "Serve hot over rice or noodles".to_string(),
        ],
        RecipeCategory::Salad => [
            "Wash and prepare all fresh ingredients",
            "Cut ingredients into bite-sized pieces",
            "Make dressing by whisking olive oil, lemon juice, and salt",
            "Toss all ingredients together in a large bowl",
            "Drizzle with dressing and mix gently",
            "Add fresh herbs and season to taste",
            "Serve immediately",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        RecipeCategory::Soup => vec![
            "Heat oil in a large pot over medium heat".to_string(),
            "Add onion and garlic, cook until softened".to_string(),
            format!("Add {first} and cook for 5 minutes"),
            "Pour in vegetable broth and bring to a boil".to_string(),
            "Reduce heat and simmer for 20-25 minutes".to_string(),
            "Season with salt, pepper, and herbs".to_string(),
            "Taste and adjust seasoning as needed".to_string(),
            "Serve hot with bread or crackers".to_string(),
        ],
        RecipeCategory::Other => [
            "Prepare all ingredients",
            "Heat oil in a pan",
            "Cook ingredients until tender",
            "Season to taste",
            "Serve hot",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

/// Builds template recipes from a user's ingredients
#[derive(Debug, Clone, Default)]
pub struct RecipeGenerator {
    quantity_rules: QuantityRules,
}

impl RecipeGenerator {
    /// Generator using the standard quantity heuristics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantity_rules(quantity_rules: QuantityRules) -> Self {
        Self { quantity_rules }
    }

    /// Generate the three template recipes, stamped with the current time
    pub fn generate<S: AsRef<str>>(&self, user_ingredients: &[S]) -> RecipeResult<Vec<GeneratedRecipe>> {
        self.generate_at(user_ingredients, Utc::now())
    }

    /// Generate the three template recipes with an explicit timestamp
    ///
    /// Fails with [`RecipeError::NoIngredients`] when the list is empty.
    pub fn generate_at<S: AsRef<str>>(
        &self,
        user_ingredients: &[S],
        timestamp: DateTime<Utc>,
    ) -> RecipeResult<Vec<GeneratedRecipe>> {
        if user_ingredients.is_empty() {
            return Err(RecipeError::NoIngredients);
        }

        let user: Vec<&str> = user_ingredients.iter().map(AsRef::as_ref).collect();
        let seed = timestamp.timestamp_millis();
        let created_at = timestamp.to_rfc3339();

        let recipes: Vec<GeneratedRecipe> = TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, template)| {
                let recipe = Recipe {
                    id: format!("generated-{seed}-{index}"),
                    name: recipe_name(template.category, &user),
                    description: template.description.to_string(),
                    ingredients: self.ingredients_for(template.category, &user),
                    instructions: instructions_for(template.category, &user),
                    image_url: template.image_url.to_string(),
                    cooking_time: template.cooking_time,
                    difficulty: template.difficulty,
                    diet_type: template.diet_type.iter().map(|t| t.to_string()).collect(),
                    nutrition: template.nutrition,
                    created_at: Some(created_at.clone()),
                };
                debug!("Generated {} recipe '{}'", template.category, recipe.name);

                GeneratedRecipe {
                    category: template.category,
                    recipe,
                }
            })
            .collect();

        info!(
            "Generated {} recipes from {} ingredients",
            recipes.len(),
            user.len()
        );
        Ok(recipes)
    }

    /// Generate after waiting `delay`
    ///
    /// The empty-input check happens before waiting.
    pub async fn generate_after<S: AsRef<str>>(
        &self,
        delay: Duration,
        user_ingredients: &[S],
    ) -> RecipeResult<Vec<GeneratedRecipe>> {
        if user_ingredients.is_empty() {
            return Err(RecipeError::NoIngredients);
        }

        if !delay.is_zero() {
            debug!("Waiting {:?} before generating recipes", delay);
            tokio::time::sleep(delay).await;
        }

        self.generate(user_ingredients)
    }

    /// User ingredients followed by the category's pantry staples, with quantities
    pub fn ingredients_for<S: AsRef<str>>(
        &self,
        category: RecipeCategory,
        user_ingredients: &[S],
    ) -> Vec<RecipeIngredient> {
        user_ingredients
            .iter()
            .map(AsRef::as_ref)
            .chain(pantry_additions(category).iter().copied())
            .map(|name| RecipeIngredient::new(name, self.quantity_rules.quantity_for(name)))
            .collect()
    }
}
