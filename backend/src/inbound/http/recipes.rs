//! Recipe HTTP handlers.
//!
//! ```text
//! POST /recipes
//! GET  /recipes
//! GET  /recipes/{id}
//! ```
//!
//! Handlers return bare payloads; the [`crate::Envelope`] middleware on the
//! `/recipes` scope wraps them in the success envelope.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewRecipe, Recipe};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecipeEnvelopeSchema, RecipeListEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_recipe_validation_error;

/// Request payload for creating a recipe.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRecipeRequest {
    /// Recipe title, 3 to 100 characters.
    #[schema(example = "Bolo de Cenoura", min_length = 3, max_length = 100)]
    pub title: String,
    /// Recipe description, 10 to 500 characters.
    #[schema(example = "Um delicioso bolo de cenoura", min_length = 10, max_length = 500)]
    pub description: String,
    /// Ingredients in preparation order; at least one.
    #[schema(example = json!(["cenoura", "farinha"]), min_items = 1)]
    pub ingredients: Vec<String>,
}

impl TryFrom<CreateRecipeRequest> for NewRecipe {
    type Error = crate::domain::Error;

    fn try_from(value: CreateRecipeRequest) -> Result<Self, Self::Error> {
        NewRecipe::try_new(value.title, value.description, value.ingredients)
            .map_err(map_recipe_validation_error)
    }
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Recipe representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[schema(format = "uuid", example = "6f1c2e1a-4b7d-4c1e-9d1a-2f3b4c5d6e7f")]
    pub id: String,
    #[schema(example = "Bolo de Cenoura")]
    pub title: String,
    #[schema(example = "Um delicioso bolo de cenoura")]
    pub description: String,
    #[schema(example = json!(["cenoura", "farinha"]))]
    pub ingredients: Vec<String>,
    #[schema(format = "date-time", example = "2024-01-01T12:00:00.000Z")]
    pub created_at: String,
    #[schema(format = "date-time", example = "2024-01-01T12:00:00.000Z")]
    pub updated_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(value: Recipe) -> Self {
        Self {
            id: value.id().to_string(),
            created_at: format_timestamp(value.created_at()),
            updated_at: format_timestamp(value.updated_at()),
            title: value.title().to_owned(),
            description: value.description().to_owned(),
            ingredients: value.ingredients().to_vec(),
        }
    }
}

/// Create a recipe.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeEnvelopeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Recipe identifier already taken", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRecipeRequest>,
) -> ApiResult<HttpResponse> {
    let content = NewRecipe::try_from(payload.into_inner())?;
    let recipe = state.recipes.create_recipe(content).await?;
    Ok(HttpResponse::Created().json(RecipeResponse::from(recipe)))
}

/// List every recipe, oldest first.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "Recipes", body = RecipeListEnvelopeSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.recipes_query.list_recipes().await?;
    Ok(web::Json(
        recipes.into_iter().map(RecipeResponse::from).collect(),
    ))
}

/// Fetch one recipe by identifier.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe", body = RecipeEnvelopeSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/{id}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let id = path.into_inner();
    let recipe = state.recipes_query.get_recipe(&id).await?;
    Ok(web::Json(RecipeResponse::from(recipe)))
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
