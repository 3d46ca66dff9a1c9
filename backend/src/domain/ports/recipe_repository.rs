//! Port for recipe persistence.

use async_trait::async_trait;

use crate::domain::Recipe;

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "recipe repository connection failed: {message}",
        /// A statement failed while executing.
        Query { message: String } =>
            "recipe repository query failed: {message}",
        /// A recipe with the same identifier is already stored.
        Conflict { id: String } =>
            "recipe {id} already exists",
    }
}

/// Storage contract for recipes.
///
/// Implementations perform no validation; inputs are already well formed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe and return the stored record.
    ///
    /// Fails with [`RecipeRepositoryError::Conflict`] when the identifier is
    /// already taken.
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeRepositoryError>;

    /// Every stored recipe ordered by creation time, oldest first.
    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Look a recipe up by its textual identifier.
    ///
    /// Unknown or malformed identifiers yield `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipeRepositoryError>;
}
