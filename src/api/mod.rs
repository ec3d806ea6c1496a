//! HTTP layer exposing the responder boundary.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::chat::Responder;

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

pub async fn serve(responder: Responder, host: String, port: u16) -> Result<()> {
    let state = AppState {
        responder: Arc::new(responder),
    };
    let router = Router::new()
        .route("/respond", post(routes::respond))
        .route("/conditions", get(routes::list_conditions))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving symptom-scout API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
