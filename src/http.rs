use crate::auth::ApiKeyAuth;
use crate::mcp::dto::{McpRequest, McpResponse};
use crate::mcp::handler;
use crate::YokatlasServer;
use anyhow::Result;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    server: Arc<YokatlasServer>,
    auth: ApiKeyAuth,
}

impl AppState {
    pub fn new(server: Arc<YokatlasServer>) -> Self {
        let auth = ApiKeyAuth::new(&server.config().auth);
        Self { server, auth }
    }
}

async fn handle_rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<McpRequest>,
) -> Response {
    if !state.auth.authorize(&headers) {
        tracing::warn!("Rejected RPC request without a valid {}", state.auth.header_name());
        let body = McpResponse::failure(req.id, -32001, "Unauthorized");
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    match handler::handle_request(&state.server, req).await {
        Some(res) => Json(res).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rpc", post(handle_rpc))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_http_server(server: YokatlasServer, port: u16) -> Result<()> {
    let state = AppState::new(Arc::new(server));
    if state.auth.is_enabled() {
        tracing::info!("API key auth enabled via {}", state.auth.header_name());
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP MCP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
