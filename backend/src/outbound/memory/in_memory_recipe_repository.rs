//! Process-local `RecipeRepository` used by tests and database-less runs.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeId};

/// Recipe store backed by a vector behind a `RwLock`.
///
/// Recipes are kept in insertion order; `find_all` applies a stable sort on
/// `created_at`, so equal timestamps keep the order they were stored in.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Seed the store with existing recipes.
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes.into_iter().collect()),
        }
    }
}

fn poisoned<T>(_: T) -> RecipeRepositoryError {
    RecipeRepositoryError::query("in-memory recipe store lock poisoned")
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut recipes = self.recipes.write().map_err(poisoned)?;
        if recipes.iter().any(|stored| stored.id() == recipe.id()) {
            return Err(RecipeRepositoryError::conflict(recipe.id().to_string()));
        }
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let mut listed = self.recipes.read().map_err(poisoned)?.to_vec();
        listed.sort_by_key(Recipe::created_at);
        Ok(listed)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let Ok(recipe_id) = RecipeId::parse(id) else {
            return Ok(None);
        };
        let recipes = self.recipes.read().map_err(poisoned)?;
        Ok(recipes.iter().find(|stored| stored.id() == recipe_id).cloned())
    }
}
