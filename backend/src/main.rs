//! signup entry point: loads settings, selects the user store, and serves
//! HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{
    ServerConfig, ServerSettings, bind_addr, build_registration, build_user_repository,
    create_server,
};
use signup::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;

    let users = build_user_repository(&settings).await?;
    let config = ServerConfig::new(bind_addr(&settings)?);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_metrics()?);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), build_registration(users), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
