pub mod handlers;
pub mod types;

use crate::{Result, config::Config, generator::TestGenerator};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState, cors: bool) -> Router {
    let mut app = Router::new()
        .route("/ping", get(handlers::ping))
        .route("/generate-tests", post(handlers::generate_tests))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

pub async fn run(config: Config) -> Result<()> {
    let generator = TestGenerator::new(config.inference.clone())?;

    let app = router(AppState { generator }, config.server.cors);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
