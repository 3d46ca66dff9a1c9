//! Driving port for recipe mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewRecipe, Recipe};

/// Use-case boundary for creating recipes.
///
/// Inbound adapters validate the payload into a [`NewRecipe`] before calling
/// this port, so implementations never see malformed content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCommand: Send + Sync {
    /// Create and persist a recipe with a fresh identifier and timestamps.
    async fn create_recipe(&self, content: NewRecipe) -> Result<Recipe, Error>;
}
