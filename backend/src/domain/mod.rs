//! Domain primitives, ports and use cases.
//!
//! Purpose: define the recipe entity and the services that orchestrate it
//! without depending on HTTP or Diesel. Types here are immutable once built
//! and document their invariants in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Recipe / RecipeDraft / NewRecipe: the recipe entity and its inputs.
//! - RecipeCommandService / RecipeQueryService: use cases behind the
//!   [`ports::RecipeCommand`] and [`ports::RecipeQuery`] driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod recipe;
mod recipe_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recipe::{
    DESCRIPTION_MAX, DESCRIPTION_MIN, NewRecipe, Recipe, RecipeDraft, RecipeId,
    RecipeValidationError, TITLE_MAX, TITLE_MIN,
};
pub use self::recipe_service::{RecipeCommandService, RecipeQueryService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
