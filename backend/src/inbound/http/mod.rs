//! HTTP inbound adapter.
//!
//! Routes:
//!
//! ```text
//! GET  /              landing page
//! POST /submit-form   user registration
//! GET  /health/ready  readiness probe
//! GET  /health/live   liveness probe
//! ```

use actix_web::web;

pub mod error;
pub mod fallback;
pub mod health;
pub mod landing;
pub mod payload;
pub mod registration;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Register every HTTP route on `cfg`.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::{configure, fallback::not_found};
///
/// let app = App::new()
///     .configure(configure)
///     .default_service(web::to(not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing::resource())
        .service(registration::resource())
        .service(health::ready)
        .service(health::live);
}
