//! Server construction: adapter selection, app wiring, and binding.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use signup::Trace;
#[cfg(debug_assertions)]
use signup::doc::ApiDoc;
use signup::domain::RegistrationService;
use signup::domain::ports::{RegistrationCommand, UserRepository};
use signup::inbound::http::configure;
use signup::inbound::http::fallback::not_found;
use signup::inbound::http::health::HealthState;
use signup::inbound::http::state::HttpState;
use signup::outbound::persistence::{
    DbPool, DieselUserRepository, InMemoryUserRepository, PoolConfig, run_migrations,
};

/// Resolve the configured host and port to a socket address.
///
/// # Errors
/// Returns [`std::io::Error`] when the host cannot be resolved.
pub fn bind_addr(settings: &ServerSettings) -> std::io::Result<SocketAddr> {
    (settings.host(), settings.port())
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            std::io::Error::other(format!(
                "no address resolved for {}:{}",
                settings.host(),
                settings.port()
            ))
        })
}

/// Choose the user repository adapter.
///
/// A configured database URL selects the Diesel adapter, applying embedded
/// migrations first when enabled. Without one, users are kept in memory.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_user_repository(
    settings: &ServerSettings,
) -> std::io::Result<Arc<dyn UserRepository>> {
    let Some(url) = settings.database_url() else {
        warn!("no database configured; registrations are kept in memory");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    if settings.run_migrations {
        run_migrations(url)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }

    let pool = DbPool::new(
        PoolConfig::new(url)
            .with_max_size(settings.db_max_connections())
            .with_connection_timeout(settings.db_connect_timeout()),
    )
    .await
    .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(
        max_connections = settings.db_max_connections(),
        "using PostgreSQL user repository"
    );
    Ok(Arc::new(DieselUserRepository::new(pool)))
}

/// Build the registration use-case around `users`.
#[must_use]
pub fn build_registration(users: Arc<dyn UserRepository>) -> Arc<dyn RegistrationCommand> {
    Arc::new(RegistrationService::new(users))
}

/// Prometheus middleware exposing `/metrics`.
///
/// # Errors
/// Returns [`std::io::Error`] when the metrics registry rejects a collector.
#[cfg(feature = "metrics")]
pub fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("signup")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found));

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Bind the HTTP server and mark it ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    registration: Arc<dyn RegistrationCommand>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(registration));
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;
    #[cfg(feature = "metrics")]
    let prometheus = prometheus.ok_or_else(|| {
        std::io::Error::other("metrics feature enabled without Prometheus middleware")
    })?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
