//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP path and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, RegistrationEchoSchema, RegistrationRequest,
};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "signup API",
        description = "Landing page, user registration, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::landing::landing_page,
        crate::inbound::http::registration::submit_form,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RegistrationRequest,
        RegistrationEchoSchema
    )),
    tags(
        (name = "pages", description = "Server-rendered pages"),
        (name = "registration", description = "User registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
