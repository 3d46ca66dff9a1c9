//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here only translate between Diesel rows and domain types.
//! Row structs and table definitions stay private to this module; pooling is
//! `bb8` through `diesel-async`, and every database failure is mapped onto
//! the port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use recipe_catalogue::outbound::persistence::{DbPool, DieselRecipeRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), recipe_catalogue::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repo = DieselRecipeRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_recipe_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_recipe_repository::DieselRecipeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
