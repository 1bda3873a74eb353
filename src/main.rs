mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
    util::{
        file_store::LocalFileStore,
        time::{ReferenceDay, SystemClock},
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let state = AppState::new(
        db,
        ReferenceDay::new(Arc::new(SystemClock), config.reference_timezone),
        Arc::new(LocalFileStore::new(config.upload_dir.clone())),
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Listening on {} with reference timezone {}",
        config.bind_address,
        config.reference_timezone
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
