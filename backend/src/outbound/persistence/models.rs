//! Diesel row types for the `recipes` table.
//!
//! These stay private to the persistence module; adapters convert them into
//! domain [`Recipe`] values before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Recipe, RecipeDraft, RecipeId};

use super::schema::recipes;

/// Row read back from the `recipes` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe::new(RecipeDraft {
            id: Some(RecipeId::from_uuid(row.id)),
            title: row.title,
            description: row.description,
            ingredients: row.ingredients,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

/// Insertable borrowed view of a domain recipe.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: &'a [String],
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Recipe> for NewRecipeRow<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            id: *recipe.id().as_uuid(),
            title: recipe.title(),
            description: recipe.description(),
            ingredients: recipe.ingredients(),
            created_at: recipe.created_at(),
            updated_at: recipe.updated_at(),
        }
    }
}
