//! Diesel table definitions.
//!
//! Must stay in step with `backend/migrations`; regenerate with
//! `diesel print-schema` after adding a migration.

diesel::table! {
    /// Catalogued recipes.
    recipes (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Recipe title (max 100 characters).
        title -> Varchar,
        /// Free-text description (max 500 characters).
        description -> Varchar,
        /// Ingredients in the order they were supplied.
        ingredients -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
