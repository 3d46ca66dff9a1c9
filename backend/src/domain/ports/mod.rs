//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`RecipeRepository`) are implemented by outbound adapters;
//! driving ports (`RecipeCommand`, `RecipeQuery`) are called by inbound
//! adapters and implemented by the domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod recipe_command;
mod recipe_query;
mod recipe_repository;

#[cfg(test)]
pub use recipe_command::MockRecipeCommand;
pub use recipe_command::RecipeCommand;
#[cfg(test)]
pub use recipe_query::MockRecipeQuery;
pub use recipe_query::RecipeQuery;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
