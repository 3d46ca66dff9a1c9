//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape so the adapter layer owns the documentation concern.

use utoipa::ToSchema;

use super::recipes::RecipeResponse;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing service is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Recipe with ID unknown-id not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c2e1a-4b7d-4c1e-9d1a-2f3b4c5d6e7f")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// Success envelope carrying a single recipe.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct RecipeEnvelopeSchema {
    data: RecipeResponse,
    #[schema(example = 201)]
    status_code: u16,
    #[schema(example = "Recurso criado com sucesso")]
    message: String,
    #[schema(format = "date-time", example = "2024-01-01T12:00:00.000Z")]
    timestamp: String,
    #[schema(example = "/recipes")]
    path: String,
}

/// Success envelope carrying a list of recipes.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct RecipeListEnvelopeSchema {
    data: Vec<RecipeResponse>,
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Dados recuperados com sucesso")]
    message: String,
    #[schema(format = "date-time", example = "2024-01-01T12:00:00.000Z")]
    timestamp: String,
    #[schema(example = "/recipes")]
    path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_schema_is_named_after_domain_error() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(schema_json.contains("details"));
    }

    #[rstest]
    fn error_code_schema_lists_conflict() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert!(schema_json.contains("conflict"));
        assert!(schema_json.contains("service_unavailable"));
    }

    #[rstest]
    fn envelope_schema_lists_every_field() {
        let schema_json = schema_to_json::<RecipeEnvelopeSchema>();
        for field in ["data", "statusCode", "message", "timestamp", "path"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
