//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape and are registered under the domain
//! type names through utoipa's `as` attribute.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body could not be decoded.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No route matches the request.
    #[schema(rename = "not_found")]
    NotFound,
    /// One or more submitted fields failed validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// A backing service is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures carry `details.errors`, a map from field name to the
/// messages for every rule that field violated.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// First error message, with a count of any others.
    #[schema(example = "The name field is required. (and 1 more error)")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    #[schema(example = json!({
        "errors": {
            "name": ["The name field is required."],
            "email": ["The email field must be a valid email address."]
        }
    }))]
    details: Option<serde_json::Value>,
}

/// Registration request body, sent as JSON or URL-encoded form data.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationRequest {
    /// Required, non-blank text.
    #[schema(example = "Alice")]
    name: String,
    /// Required email address.
    #[schema(example = "alice@example.com")]
    email: String,
    /// Required, non-blank text.
    #[schema(example = "secret123")]
    password: String,
}

/// OpenAPI schema for [`crate::domain::ports::RegistrationEcho`].
///
/// The accepted fields exactly as submitted.
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::RegistrationEcho)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationEchoSchema {
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: String,
    #[schema(example = "secret123")]
    password: String,
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
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("validation_failed")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn error_code_schema_lists_variant(#[case] variant: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(variant));
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn echo_schema_is_named_after_the_port_type() {
        assert_eq!(
            RegistrationEchoSchema::name(),
            "crate.domain.ports.RegistrationEcho"
        );
        assert!(schema_to_json::<RegistrationEchoSchema>().contains("password"));
    }
}
