//! Driving port for recipe reads.

use async_trait::async_trait;

use crate::domain::{Error, Recipe};

/// Use-case boundary for listing and fetching recipes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// All recipes, oldest first.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error>;

    /// A single recipe.
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when no recipe matches
    /// `id`; the message names the identifier exactly as supplied.
    async fn get_recipe(&self, id: &str) -> Result<Recipe, Error>;
}
