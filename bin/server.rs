// DevDonalds Cookbook - Web Server
// REST API with Axum over a single shared in-memory cookbook

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use devdonalds::{parse_handwriting, register_entry, summarize, Cookbook};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;

/// Shared application state
///
/// One lock guards the whole store: registrations hold it for write for
/// the full validate-and-insert, summaries hold it for read for the full
/// traversal, so every resolution sees a consistent snapshot.
#[derive(Clone)]
struct AppState {
    cookbook: Arc<RwLock<Cookbook>>,
}

/// Response for POST /parse
#[derive(Serialize)]
struct ParseResponse {
    msg: String,
}

/// Query parameters for GET /summary
#[derive(Deserialize)]
struct SummaryParams {
    name: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json("OK")
}

/// POST /parse - Normalize a handwritten recipe name
async fn parse_name(Json(body): Json<Value>) -> impl IntoResponse {
    let input = body.get("input").and_then(Value::as_str).unwrap_or("");

    match parse_handwriting(input) {
        Some(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// POST /entry - Register a cookbook entry (ingredient or recipe)
async fn add_entry(State(state): State<AppState>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut cookbook = state.cookbook.write().unwrap();

    match register_entry(&mut cookbook, &body) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            eprintln!("Rejected entry: {}", e);
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// GET /summary?name= - Resolve a recipe into base ingredients + cook time
async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let cookbook = state.cookbook.read().unwrap();

    match summarize(&cookbook, &params.name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            eprintln!("Rejected summary for {}: {}", params.name, e);
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🍔 DevDonalds Cookbook - Web Server v{}", devdonalds::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Fresh, empty store on every run (no persistence by design)
    let state = AppState {
        cookbook: Arc::new(RwLock::new(Cookbook::new())),
    };

    // Build routes
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse_name))
        .route("/entry", post(add_entry))
        .route("/summary", get(get_summary))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:8080";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("\n🚀 Server running on http://localhost:8080");
    println!("   POST /parse    - normalize a recipe name");
    println!("   POST /entry    - register an ingredient or recipe");
    println!("   GET  /summary  - resolve a recipe");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;

    Ok(())
}
