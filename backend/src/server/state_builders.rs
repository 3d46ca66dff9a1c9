//! Builders for the HTTP state from the configured recipe store.

use std::sync::Arc;

use actix_web::web;
use recipe_catalogue::inbound::http::state::HttpState;
use recipe_catalogue::outbound::memory::InMemoryRecipeRepository;
use recipe_catalogue::outbound::persistence::DieselRecipeRepository;

use super::ServerConfig;

/// Wire the recipe use cases over PostgreSQL when a pool is configured,
/// otherwise over the in-process store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_repository(Arc::new(DieselRecipeRepository::new(pool.clone()))),
        None => HttpState::from_repository(Arc::new(InMemoryRecipeRepository::default())),
    };
    web::Data::new(state)
}
