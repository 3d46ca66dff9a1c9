//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the recipe and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe
//! the envelope and error shapes without coupling domain types to utoipa.
//!
//! The document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::recipes::{CreateRecipeRequest, RecipeResponse};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, RecipeEnvelopeSchema, RecipeListEnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe catalogue API",
        description = "Create, list and fetch recipes. Successful recipe responses are wrapped in a uniform envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateRecipeRequest,
        RecipeResponse,
        RecipeEnvelopeSchema,
        RecipeListEnvelopeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "recipes", description = "Recipe catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
