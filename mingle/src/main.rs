//! Server entry-point: wires the friend-request API, health probes, and
//! OpenAPI docs.

use std::ffi::OsString;

use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use mingle::config::AppSettings;
#[cfg(debug_assertions)]
use mingle::doc::ApiDoc;
use mingle::inbound::http::friend_requests;
use mingle::inbound::http::health::{HealthState, live, ready};
use mingle::inbound::http::state::HttpState;

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

    let args: Vec<OsString> = std::env::args_os().collect();
    let settings = AppSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(HttpState::default());
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .configure(friend_requests::configure)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(settings.bind_addr())?;

    info!(bind_addr = settings.bind_addr(), "server listening");
    health_state.mark_ready();
    server.run().await
}
