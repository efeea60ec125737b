//! Registration form handler.
//!
//! ```text
//! POST /submit-form {"name":"Alice","email":"alice@example.com","password":"secret123"}
//! ```
//!
//! Accepts JSON or URL-encoded bodies. A valid submission is persisted and
//! echoed back unchanged, password included. The password is stored and
//! returned in plain text.

use actix_web::{Resource, web};

use crate::domain::ports::RegistrationEcho;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::RegistrationPayload;
use crate::inbound::http::schemas::{ErrorSchema, RegistrationEchoSchema, RegistrationRequest};
use crate::inbound::http::state::HttpState;

/// Register a user from a submitted form.
#[utoipa::path(
    post,
    path = "/submit-form",
    request_body(
        description = "Registration fields",
        content(
            (RegistrationRequest = "application/json"),
            (RegistrationRequest = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "User registered; submitted fields echoed", body = RegistrationEchoSchema),
        (status = 400, description = "Body could not be decoded", body = ErrorSchema),
        (status = 422, description = "One or more fields failed validation", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["registration"],
    operation_id = "submitForm"
)]
pub async fn submit_form(
    state: web::Data<HttpState>,
    payload: RegistrationPayload,
) -> ApiResult<web::Json<RegistrationEcho>> {
    let echo = state.registration.register(payload.into_inner()).await?;
    Ok(web::Json(echo))
}

/// `/submit-form` resource; methods other than POST get 405.
pub fn resource() -> Resource {
    web::resource("/submit-form").route(web::post().to(submit_form))
}
