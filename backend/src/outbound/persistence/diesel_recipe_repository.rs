//! PostgreSQL-backed `RecipeRepository` implementation using Diesel ORM.
//!
//! One statement per operation; rows are converted back into domain recipes
//! without revalidation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Recipe;
use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewRecipeRow, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::recipes;

/// Diesel-backed implementation of the recipe repository port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecipeRepositoryError {
    map_basic_pool_error(error, RecipeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RecipeRepositoryError {
    map_basic_diesel_error(
        error,
        RecipeRepositoryError::query,
        RecipeRepositoryError::connection,
    )
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(recipes::table)
            .values(NewRecipeRow::from(&recipe))
            .returning(RecipeRow::as_returning())
            .get_result::<RecipeRow>(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    RecipeRepositoryError::conflict(recipe.id().to_string())
                } else {
                    map_diesel_error(err)
                }
            })?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .order((recipes::created_at.asc(), recipes::id.asc()))
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipeRepositoryError> {
        // Malformed identifiers cannot match a uuid primary key.
        let Ok(recipe_id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = recipes::table
            .filter(recipes::id.eq(recipe_id))
            .select(RecipeRow::as_select())
            .first::<RecipeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Recipe::from))
    }
}
