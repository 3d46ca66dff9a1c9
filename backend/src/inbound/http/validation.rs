//! Request validation helpers for the HTTP adapter.
//!
//! Every rejection becomes an `invalid_request` domain error whose details
//! name the offending field and a stable machine-readable code.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, RecipeValidationError};

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    Empty,
    TooShort,
    TooLong,
    EmptyList,
    EmptyItem,
    InvalidJson,
    InvalidContentType,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::EmptyList => "empty_list",
            Self::EmptyItem => "empty_item",
            Self::InvalidJson => "invalid_json",
            Self::InvalidContentType => "invalid_content_type",
        }
    }
}

/// HTTP field name as it appears in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

const TITLE: FieldName = FieldName::new("title");
const DESCRIPTION: FieldName = FieldName::new("description");
const INGREDIENTS: FieldName = FieldName::new("ingredients");

fn field_error(field: FieldName, code: ValidationCode, message: String, extra: Value) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": code.as_str(),
    });
    if let (Some(target), Value::Object(source)) = (details.as_object_mut(), extra) {
        target.extend(source);
    }
    Error::invalid_request(message).with_details(details)
}

/// Translate recipe content rules into an HTTP validation error.
pub(crate) fn map_recipe_validation_error(error: RecipeValidationError) -> Error {
    let message = error.to_string();
    match error {
        RecipeValidationError::InvalidId => {
            Error::invalid_request(message).with_details(json!({ "field": "id" }))
        }
        RecipeValidationError::EmptyTitle => {
            field_error(TITLE, ValidationCode::Empty, message, Value::Null)
        }
        RecipeValidationError::TitleTooShort { min } => {
            field_error(TITLE, ValidationCode::TooShort, message, json!({ "min": min }))
        }
        RecipeValidationError::TitleTooLong { max } => {
            field_error(TITLE, ValidationCode::TooLong, message, json!({ "max": max }))
        }
        RecipeValidationError::EmptyDescription => {
            field_error(DESCRIPTION, ValidationCode::Empty, message, Value::Null)
        }
        RecipeValidationError::DescriptionTooShort { min } => field_error(
            DESCRIPTION,
            ValidationCode::TooShort,
            message,
            json!({ "min": min }),
        ),
        RecipeValidationError::DescriptionTooLong { max } => field_error(
            DESCRIPTION,
            ValidationCode::TooLong,
            message,
            json!({ "max": max }),
        ),
        RecipeValidationError::NoIngredients => {
            field_error(INGREDIENTS, ValidationCode::EmptyList, message, Value::Null)
        }
        RecipeValidationError::EmptyIngredient { index } => field_error(
            INGREDIENTS,
            ValidationCode::EmptyItem,
            message,
            json!({ "index": index }),
        ),
    }
}

fn map_json_payload_error(error: &JsonPayloadError) -> Error {
    match error {
        JsonPayloadError::ContentType => {
            Error::invalid_request("request body must be application/json")
                .with_details(json!({ "code": ValidationCode::InvalidContentType.as_str() }))
        }
        other => Error::invalid_request(format!("invalid JSON payload: {other}"))
            .with_details(json!({ "code": ValidationCode::InvalidJson.as_str() })),
    }
}

/// JSON extractor configuration turning body errors into domain errors.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "rejected JSON payload");
        map_json_payload_error(&err).into()
    })
}
