//! User registration service.
//!
//! Serves a static landing page and accepts registration submissions at
//! `POST /submit-form`, validating them and persisting users through a
//! repository port backed by PostgreSQL or process memory.
//!
//! Layout follows a ports-and-adapters split:
//!
//! - [`domain`]: user model, validation, and the registration use-case.
//! - [`inbound`]: HTTP handlers depending only on domain ports.
//! - [`outbound`]: persistence adapters implementing those ports.
//! - [`middleware`]: request-scoped trace correlation.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
