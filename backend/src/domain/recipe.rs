//! Recipe entity and its validated input.
//!
//! A [`Recipe`] is an immutable snapshot: every field is fixed at
//! construction and only getters are exposed. Two construction paths exist:
//!
//! - [`Recipe::create`] for brand-new records: a fresh [`RecipeId`] and both
//!   timestamps taken from the supplied clock.
//! - [`Recipe::from_draft`] for reconstruction from storage: any field present
//!   on the [`RecipeDraft`] is kept verbatim, missing ones are defaulted.
//!
//! Content rules (lengths, non-empty ingredient list) live on [`NewRecipe`],
//! which inbound adapters must build before calling the create use case.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use mockable::{Clock, DefaultClock};
use uuid::Uuid;

/// Minimum title length in characters.
pub const TITLE_MIN: usize = 3;
/// Maximum title length in characters.
pub const TITLE_MAX: usize = 100;
/// Minimum description length in characters.
pub const DESCRIPTION_MIN: usize = 10;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// Validation failures raised while building a [`NewRecipe`] or parsing a
/// [`RecipeId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeValidationError {
    #[error("recipe id must be a valid UUID")]
    InvalidId,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at least {min} characters")]
    TitleTooShort { min: usize },
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description must be at least {min} characters")]
    DescriptionTooShort { min: usize },
    #[error("description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("recipe must have at least one ingredient")]
    NoIngredients,
    #[error("ingredient at position {index} must not be empty")]
    EmptyIngredient { index: usize },
}

/// Stable recipe identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically one read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an identifier from its textual form.
    pub fn parse(raw: &str) -> Result<Self, RecipeValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| RecipeValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn check_length(
    value: &str,
    min: usize,
    max: usize,
    empty: RecipeValidationError,
    too_short: RecipeValidationError,
    too_long: RecipeValidationError,
) -> Result<(), RecipeValidationError> {
    if value.is_empty() {
        return Err(empty);
    }
    let length = value.chars().count();
    if length < min {
        return Err(too_short);
    }
    if length > max {
        return Err(too_long);
    }
    Ok(())
}

/// Validated content for a recipe that does not exist yet.
///
/// ## Invariants
/// - `title` is non-empty and between [`TITLE_MIN`] and [`TITLE_MAX`]
///   characters.
/// - `description` is non-empty and between [`DESCRIPTION_MIN`] and
///   [`DESCRIPTION_MAX`] characters.
/// - `ingredients` holds at least one item and no item is empty.
///   Whitespace counts as content.
///
/// # Examples
/// ```
/// use recipe_catalogue::domain::NewRecipe;
///
/// let recipe = NewRecipe::try_new(
///     "Bolo de Cenoura",
///     "Um delicioso bolo de cenoura",
///     vec!["cenoura".to_owned(), "farinha".to_owned()],
/// )
/// .expect("valid recipe");
/// assert_eq!(recipe.ingredients().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    title: String,
    description: String,
    ingredients: Vec<String>,
}

impl NewRecipe {
    /// Validate and construct recipe content.
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Result<Self, RecipeValidationError> {
        let title = title.into();
        let description = description.into();

        check_length(
            &title,
            TITLE_MIN,
            TITLE_MAX,
            RecipeValidationError::EmptyTitle,
            RecipeValidationError::TitleTooShort { min: TITLE_MIN },
            RecipeValidationError::TitleTooLong { max: TITLE_MAX },
        )?;
        check_length(
            &description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
            RecipeValidationError::EmptyDescription,
            RecipeValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN,
            },
            RecipeValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            },
        )?;

        if ingredients.is_empty() {
            return Err(RecipeValidationError::NoIngredients);
        }
        if let Some(index) = ingredients.iter().position(|item| item.is_empty()) {
            return Err(RecipeValidationError::EmptyIngredient { index });
        }

        Ok(Self {
            title,
            description,
            ingredients,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_slice()
    }
}

/// Field bundle used to reconstruct a [`Recipe`].
///
/// Optional fields are defaulted by [`Recipe::from_draft`]; adapters reading
/// from storage fill every field so nothing is regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub id: Option<RecipeId>,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A catalogued recipe.
///
/// ## Invariants
/// - `id` never changes once assigned.
/// - The value is never mutated after construction; there is no update
///   operation, so `updated_at` equals whatever was set at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    title: String,
    description: String,
    ingredients: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a new recipe from validated content.
    ///
    /// Generates a fresh identifier and stamps both timestamps with a single
    /// reading of `clock`, truncated to the microsecond precision storage
    /// keeps.
    pub fn create(content: NewRecipe, clock: &dyn Clock) -> Self {
        let NewRecipe {
            title,
            description,
            ingredients,
        } = content;
        let now = clock.utc().trunc_subsecs(6);
        Self {
            id: RecipeId::random(),
            title,
            description,
            ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a recipe, defaulting missing fields from `clock`.
    pub fn from_draft(draft: RecipeDraft, clock: &dyn Clock) -> Self {
        let RecipeDraft {
            id,
            title,
            description,
            ingredients,
            created_at,
            updated_at,
        } = draft;
        let now = clock.utc();
        Self {
            id: id.unwrap_or_else(RecipeId::random),
            title,
            description,
            ingredients,
            created_at: created_at.unwrap_or(now),
            updated_at: updated_at.unwrap_or(now),
        }
    }

    /// Reconstruct a recipe using the system clock for missing timestamps.
    pub fn new(draft: RecipeDraft) -> Self {
        Self::from_draft(draft, &DefaultClock)
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Ingredients in the order they were supplied.
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_slice()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    //! Entity construction and content validation.

    use super::*;
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn content() -> NewRecipe {
        NewRecipe::try_new(
            "Lasanha",
            "Lasanha italiana tradicional",
            vec!["massa".into(), "molho".into(), "queijo".into()],
        )
        .expect("valid content")
    }

    fn ingredients(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[rstest]
    fn create_stamps_both_timestamps_from_clock(content: NewRecipe, fixed_instant: DateTime<Utc>) {
        let recipe = Recipe::create(content, &FixtureClock(fixed_instant));
        assert_eq!(recipe.created_at(), fixed_instant);
        assert_eq!(recipe.updated_at(), fixed_instant);
    }

    #[rstest]
    fn create_truncates_timestamps_to_microseconds(content: NewRecipe, fixed_instant: DateTime<Utc>) {
        let precise = fixed_instant + chrono::Duration::nanoseconds(123_456_789);
        let recipe = Recipe::create(content, &FixtureClock(precise));

        let expected = fixed_instant + chrono::Duration::microseconds(123_456);
        assert_eq!(recipe.created_at(), expected);
        assert_eq!(recipe.updated_at(), expected);
    }

    #[rstest]
    fn create_keeps_content_and_ingredient_order(content: NewRecipe) {
        let recipe = Recipe::create(content.clone(), &DefaultClock);
        assert_eq!(recipe.title(), content.title());
        assert_eq!(recipe.description(), content.description());
        assert_eq!(recipe.ingredients(), ["massa", "molho", "queijo"]);
    }

    #[rstest]
    fn create_generates_distinct_ids(content: NewRecipe) {
        let first = Recipe::create(content.clone(), &DefaultClock);
        let second = Recipe::create(content, &DefaultClock);
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    fn from_draft_keeps_supplied_fields(fixed_instant: DateTime<Utc>) {
        let id = RecipeId::random();
        let updated = fixed_instant + chrono::Duration::minutes(5);
        let recipe = Recipe::new(RecipeDraft {
            id: Some(id),
            title: "Pizza".into(),
            description: "Pizza margherita".into(),
            ingredients: ingredients(&["massa", "molho"]),
            created_at: Some(fixed_instant),
            updated_at: Some(updated),
        });

        assert_eq!(recipe.id(), id);
        assert_eq!(recipe.created_at(), fixed_instant);
        assert_eq!(recipe.updated_at(), updated);
    }

    #[rstest]
    fn from_draft_defaults_missing_fields(fixed_instant: DateTime<Utc>) {
        let recipe = Recipe::from_draft(
            RecipeDraft {
                id: None,
                title: "Pizza".into(),
                description: "Pizza margherita".into(),
                ingredients: ingredients(&["massa"]),
                created_at: None,
                updated_at: None,
            },
            &FixtureClock(fixed_instant),
        );

        assert!(!recipe.id().as_uuid().is_nil());
        assert_eq!(recipe.created_at(), fixed_instant);
        assert_eq!(recipe.updated_at(), fixed_instant);
    }

    #[rstest]
    #[case("", "Descrição longa", &["a"], RecipeValidationError::EmptyTitle)]
    #[case("ab", "Descrição longa", &["a"], RecipeValidationError::TitleTooShort { min: TITLE_MIN })]
    #[case("Bolo", "", &["a"], RecipeValidationError::EmptyDescription)]
    #[case("Bolo", "curta", &["a"], RecipeValidationError::DescriptionTooShort { min: DESCRIPTION_MIN })]
    #[case("Bolo", "Descrição longa", &[], RecipeValidationError::NoIngredients)]
    #[case("Bolo", "Descrição longa", &["ovos", ""], RecipeValidationError::EmptyIngredient { index: 1 })]
    fn try_new_rejects_invalid_content(
        #[case] title: &str,
        #[case] description: &str,
        #[case] items: &[&str],
        #[case] expected: RecipeValidationError,
    ) {
        let result = NewRecipe::try_new(title, description, ingredients(items));
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn try_new_rejects_overlong_fields() {
        let long_title = "a".repeat(TITLE_MAX + 1);
        let long_description = "d".repeat(DESCRIPTION_MAX + 1);

        assert_eq!(
            NewRecipe::try_new(long_title, "Descrição longa", ingredients(&["a"])),
            Err(RecipeValidationError::TitleTooLong { max: TITLE_MAX })
        );
        assert_eq!(
            NewRecipe::try_new("Bolo", long_description, ingredients(&["a"])),
            Err(RecipeValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX
            })
        );
    }

    #[rstest]
    fn try_new_keeps_whitespace_only_content() {
        let result = NewRecipe::try_new("   ", "          ", ingredients(&[" ", "\t"]));

        let recipe = result.expect("whitespace counts as content");
        assert_eq!(recipe.title(), "   ");
        assert_eq!(recipe.ingredients(), [" ", "\t"]);
    }

    #[rstest]
    fn try_new_accepts_boundary_lengths() {
        let result = NewRecipe::try_new(
            "a".repeat(TITLE_MAX),
            "d".repeat(DESCRIPTION_MIN),
            ingredients(&["sal"]),
        );
        assert!(result.is_ok());
    }

    #[rstest]
    fn lengths_count_characters_not_bytes() {
        // "Pão" is three characters but four bytes.
        let result = NewRecipe::try_new("Pão", "Pão doce caseiro", ingredients(&["farinha"]));
        assert!(result.is_ok());
    }

    #[rstest]
    #[case("b8c4e2f1-4d3a-4b5c-9f8e-1a2b3c4d5e6f", true)]
    #[case("unknown-id", false)]
    #[case("", false)]
    fn recipe_id_parse(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(RecipeId::parse(raw).is_ok(), valid);
    }
}
