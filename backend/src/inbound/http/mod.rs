//! HTTP inbound adapter exposing the recipe REST endpoints.

pub mod error;
pub mod health;
pub mod recipes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

use crate::middleware::Envelope;

pub use error::ApiResult;

/// Register the recipe scope and the health endpoints.
///
/// The `/recipes` scope carries the success envelope and the JSON error
/// handler; health endpoints stay unwrapped. Callers provide `web::Data<HttpState>`
/// and `web::Data<HealthState>` as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use recipe_catalogue::inbound::http::{configure, health::HealthState, state::HttpState};
/// use recipe_catalogue::outbound::memory::InMemoryRecipeRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryRecipeRepository::default()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_with_envelope(cfg, Envelope::new());
}

/// [`configure`] with a caller-supplied envelope, for deterministic
/// timestamps in tests.
pub fn configure_with_envelope(cfg: &mut web::ServiceConfig, envelope: Envelope) {
    cfg.service(
        web::scope("/recipes")
            .wrap(envelope)
            .app_data(validation::json_config())
            .service(recipes::create_recipe)
            .service(recipes::list_recipes)
            .service(recipes::get_recipe),
    )
    .service(health::ready)
    .service(health::live);
}
