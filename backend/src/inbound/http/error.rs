//! Rendering of domain errors as HTTP responses.
//!
//! Every failure leaves the service as the same JSON envelope. The status
//! line is derived from [`ErrorCode`]; `internal_error` envelopes are
//! replaced with a generic message before they reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers returning domain errors.
pub type ApiResult<T> = Result<T, Error>;

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// HTTP status for each error code.
const fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The envelope a client is allowed to see.
///
/// Internal failures keep only their code and trace id; the original message
/// and details are logged instead.
fn client_view(source: &Error) -> Error {
    if source.code() != ErrorCode::InternalError {
        return source.clone();
    }

    error!(
        trace_id = source.trace_id().unwrap_or_default(),
        message = source.message(),
        "internal error hidden from client"
    );
    let generic = Error::internal(GENERIC_INTERNAL_MESSAGE);
    match source.trace_id() {
        Some(id) => generic.with_trace_id(id.to_owned()),
        None => generic,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = client_view(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = body.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(body)
    }
}
