//! Static landing page served at `/`.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Resource, web};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Sign up</title>
</head>
<body>
  <main>
    <h1>Welcome</h1>
    <p>Create an account by posting your name, email, and password.</p>
    <form method="post" action="/submit-form">
      <label>Name <input type="text" name="name" required></label>
      <label>Email <input type="email" name="email" required></label>
      <label>Password <input type="password" name="password" required></label>
      <button type="submit">Register</button>
    </form>
  </main>
</body>
</html>
"#;

/// Render the landing page. Query strings and bodies are ignored.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
    tags = ["pages"],
    operation_id = "landingPage"
)]
pub async fn landing_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}

/// `/` resource; methods other than GET get 405.
pub fn resource() -> Resource {
    web::resource("/").route(web::get().to(landing_page))
}
