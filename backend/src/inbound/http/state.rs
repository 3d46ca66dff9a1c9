//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised with mocks or the in-memory store.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::ports::{RecipeCommand, RecipeQuery, RecipeRepository};
use crate::domain::{RecipeCommandService, RecipeQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipeCommand>,
    pub recipes_query: Arc<dyn RecipeQuery>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(recipes: Arc<dyn RecipeCommand>, recipes_query: Arc<dyn RecipeQuery>) -> Self {
        Self {
            recipes,
            recipes_query,
        }
    }

    /// Wire both use cases over one repository, stamping with the system
    /// clock.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: RecipeRepository + 'static,
    {
        Self::new(
            Arc::new(RecipeCommandService::new(
                Arc::clone(&repository),
                Arc::new(DefaultClock),
            )),
            Arc::new(RecipeQueryService::new(repository)),
        )
    }
}
