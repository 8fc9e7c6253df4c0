//! # Favorites Module
//!
//! Tracks which recipes each user has favorited and the star rating they
//! gave. This is an in-memory stand-in for the favorites table of the
//! external store; nothing is persisted.
//!
//! A rating always lives on a favorite: rating a recipe that is not yet a
//! favorite adds it (see [`FavoritesBook::rate`]).

use crate::config::{MAX_RATING, MIN_RATING};
use crate::recipe_catalog::RecipeCatalog;
use crate::recipe_errors::{RecipeError, RecipeResult};
use crate::recipe_model::RecipeMatch;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One favorited recipe for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub user_id: String,
    pub recipe_id: String,
    /// Stars between 1 and 5, if the user rated the recipe
    pub rating: Option<u8>,
    pub created_at: String,
}

/// Per-user favorites and ratings
#[derive(Debug, Clone, Default)]
pub struct FavoritesBook {
    entries: Vec<Favorite>,
    next_id: u64,
}

fn validate_rating(rating: u8) -> RecipeResult<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(RecipeError::InvalidRating(rating))
    }
}

impl FavoritesBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, user_id: &str, recipe_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|f| f.user_id == user_id && f.recipe_id == recipe_id)
    }

    /// All favorites of a user, oldest first
    pub fn favorites(&self, user_id: &str) -> Vec<&Favorite> {
        self.entries.iter().filter(|f| f.user_id == user_id).collect()
    }

    pub fn is_favorite(&self, user_id: &str, recipe_id: &str) -> bool {
        self.position(user_id, recipe_id).is_some()
    }

    /// Favorite a recipe, optionally rating it at the same time
    ///
    /// Returns the new favorite's id. Fails if the recipe is already a
    /// favorite of this user or the rating is out of range.
    pub fn add_favorite(&mut self, user_id: &str, recipe_id: &str, rating: Option<u8>) -> RecipeResult<u64> {
        let rating = rating.map(validate_rating).transpose()?;
        if self.is_favorite(user_id, recipe_id) {
            return Err(RecipeError::AlreadyFavorite(recipe_id.to_string()));
        }

        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Favorite {
            id,
            user_id: user_id.to_string(),
            recipe_id: recipe_id.to_string(),
            rating,
            created_at: Utc::now().to_rfc3339(),
        });

        info!("User {} favorited recipe {} (favorite ID: {})", user_id, recipe_id, id);
        Ok(id)
    }

    /// Remove a favorite; returns whether one was removed
    pub fn remove_favorite(&mut self, user_id: &str, recipe_id: &str) -> bool {
        match self.position(user_id, recipe_id) {
            Some(index) => {
                self.entries.remove(index);
                info!("User {} removed favorite recipe {}", user_id, recipe_id);
                true
            }
            None => {
                debug!("No favorite {} for user {} to remove", recipe_id, user_id);
                false
            }
        }
    }

    /// Flip the favorite state of a recipe and return the new state
    pub fn toggle_favorite(&mut self, user_id: &str, recipe_id: &str) -> RecipeResult<bool> {
        if self.remove_favorite(user_id, recipe_id) {
            Ok(false)
        } else {
            self.add_favorite(user_id, recipe_id, None)?;
            Ok(true)
        }
    }

    /// Change the rating of an existing favorite
    ///
    /// Returns `false` when the recipe is not a favorite of this user.
    pub fn update_rating(&mut self, user_id: &str, recipe_id: &str, rating: u8) -> RecipeResult<bool> {
        let rating = validate_rating(rating)?;
        match self.position(user_id, recipe_id) {
            Some(index) => {
                self.entries[index].rating = Some(rating);
                debug!("User {} rated recipe {}: {}", user_id, recipe_id, rating);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rate a recipe, favoriting it first if needed
    pub fn rate(&mut self, user_id: &str, recipe_id: &str, rating: u8) -> RecipeResult<()> {
        if self.is_favorite(user_id, recipe_id) {
            self.update_rating(user_id, recipe_id, rating)?;
        } else {
            self.add_favorite(user_id, recipe_id, Some(rating))?;
        }
        Ok(())
    }

    pub fn get_rating(&self, user_id: &str, recipe_id: &str) -> Option<u8> {
        self.position(user_id, recipe_id)
            .and_then(|index| self.entries[index].rating)
    }

    /// Rated recipes of a user keyed by recipe id
    pub fn ratings(&self, user_id: &str) -> HashMap<String, u8> {
        self.favorites(user_id)
            .into_iter()
            .filter_map(|f| f.rating.map(|r| (f.recipe_id.clone(), r)))
            .collect()
    }

    /// A user's favorited recipes from the catalog, as unscored matches
    ///
    /// Ordered by recipe name. Favorites whose recipe is no longer in the
    /// catalog are skipped.
    pub fn favorite_recipes(&self, user_id: &str, catalog: &RecipeCatalog) -> Vec<RecipeMatch> {
        catalog
            .all()
            .into_iter()
            .filter(|recipe| self.is_favorite(user_id, &recipe.id))
            .map(RecipeMatch::unscored)
            .collect()
    }
}
