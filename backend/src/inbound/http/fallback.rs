//! Default service for unmatched routes.

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use actix_web::{HttpRequest, HttpResponse};

/// Answer any unrouted request with a `404 not_found` error body.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no route for {} {}", req.method(), req.path())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn unknown_paths_get_a_not_found_envelope() {
        let app = test::init_service(App::new().default_service(web::to(not_found))).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/missing").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("no route for GET /missing")
        );
    }
}
