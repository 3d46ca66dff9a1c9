//! Recipe domain services.
//!
//! These services implement the recipe driving ports. Each use case calls
//! exactly one repository method; repository failures are translated into
//! domain errors here and nowhere else.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{RecipeCommand, RecipeQuery, RecipeRepository, RecipeRepositoryError};
use crate::domain::{Error, NewRecipe, Recipe};

fn map_repository_error(error: RecipeRepositoryError) -> Error {
    match error {
        RecipeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipeRepositoryError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
        RecipeRepositoryError::Conflict { id } => {
            Error::conflict(format!("Recipe with ID {id} already exists"))
                .with_details(serde_json::json!({ "id": id }))
        }
    }
}

/// Recipe service implementing the command driving port.
#[derive(Clone)]
pub struct RecipeCommandService<R> {
    recipe_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> RecipeCommandService<R> {
    /// Create a command service over `recipe_repo`, stamping new recipes with
    /// `clock`.
    pub fn new(recipe_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { recipe_repo, clock }
    }
}

#[async_trait]
impl<R> RecipeCommand for RecipeCommandService<R>
where
    R: RecipeRepository,
{
    async fn create_recipe(&self, content: NewRecipe) -> Result<Recipe, Error> {
        let recipe = Recipe::create(content, self.clock.as_ref());
        self.recipe_repo
            .create(recipe)
            .await
            .map_err(map_repository_error)
    }
}

/// Recipe service implementing the query driving port.
#[derive(Clone)]
pub struct RecipeQueryService<R> {
    recipe_repo: Arc<R>,
}

impl<R> RecipeQueryService<R> {
    /// Create a query service over `recipe_repo`.
    pub fn new(recipe_repo: Arc<R>) -> Self {
        Self { recipe_repo }
    }
}

#[async_trait]
impl<R> RecipeQuery for RecipeQueryService<R>
where
    R: RecipeRepository,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.recipe_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, Error> {
        self.recipe_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("Recipe with ID {id} not found"))
                    .with_details(serde_json::json!({ "id": id }))
            })
    }
}

#[cfg(test)]
#[path = "recipe_service_tests.rs"]
mod tests;
