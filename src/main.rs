use anyhow::{Context, Result};
use axum::{routing::get, Router};
use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod greeting;
mod handlers;
mod state;

use state::AppState;

const PORT: u16 = 3000;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::greet::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::from_env());

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("bind port {PORT}"))?;

    tracing::info!("listening on http://{bind_addr}");
    axum::serve(listener, app(state)).await.context("server crashed")
}
