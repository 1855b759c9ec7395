//! Revisio Document Comparison Service
//!
//! Accepts an uploaded PDF, extracts its text alongside two fixed
//! reference versions, and asks an LLM to transfer the v1→v2 correction
//! pattern onto the upload, chunk by chunk.

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use revisio_utils::{init_logging, AppConfig, ErrorResponse, RevisioError};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod chunker;
mod comparator;
mod llm;
mod pdf;
mod service;

use llm::OpenAiClient;
use service::ComparisonService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting Revisio Document Comparison Service");

    let llm = Arc::new(OpenAiClient::new(&config.llm)?);
    let service = ComparisonService::new(llm, config.references.clone());

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/v1/comparisons", post(create_comparison))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.server.max_request_size))
        .with_state(service);

    let addr = SocketAddr::from((config.server.host.parse::<std::net::IpAddr>()?, config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Document Comparison Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "document-comparison",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Comparison response
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub filename: String,
    pub chunks_compared: usize,
    pub result: String,
}

/// Upload a candidate PDF and run the comparison pipeline.
async fn create_comparison(
    State(service): State<ComparisonService>,
    mut multipart: Multipart,
) -> Result<Json<ComparisonResponse>, (StatusCode, Json<ErrorResponse>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| reject(RevisioError::validation("file", format!("upload error: {}", e))))?
        .ok_or_else(|| reject(RevisioError::validation("file", "no file provided")))?;

    let filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown.pdf".to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| reject(RevisioError::validation("file", format!("read error: {}", e))))?;

    info!(filename = %filename, size_bytes = data.len(), "received candidate document");

    let outcome = service.run(&data).await.map_err(reject)?;

    Ok(Json(ComparisonResponse {
        filename,
        chunks_compared: outcome.chunks_compared,
        result: outcome.result,
    }))
}

fn reject(error: RevisioError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Document Comparison Tool</title></head>
<body>
  <h1>Document Comparison Tool</h1>
  <p>Upload a new document; corrections are suggested from the v1/v2 baseline pair.</p>
  <form id="upload">
    <input type="file" name="file" accept="application/pdf" required>
    <button type="submit">Compare</button>
  </form>
  <h2>Comparison Result</h2>
  <pre id="result"></pre>
  <script>
    document.getElementById('upload').addEventListener('submit', async (e) => {
      e.preventDefault();
      const body = new FormData(e.target);
      const out = document.getElementById('result');
      out.textContent = 'Comparing...';
      const resp = await fetch('/api/v1/comparisons', { method: 'POST', body });
      const json = await resp.json();
      out.textContent = resp.ok ? json.result : json.error;
    });
  </script>
</body>
</html>
"#;
