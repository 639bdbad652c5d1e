use std::net::SocketAddr;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use stride_core::{Plan, Planner, PlannerError, ServiceStatus};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        let status = if err.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request and response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct GoalRequest {
    #[serde(default)]
    pub goal: String,
}

impl GoalRequest {
    /// Parses a request body, treating anything malformed as an empty goal.
    fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|err| {
            warn!("Ignoring malformed request body: {err}");
            Self::default()
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(planner: Planner) -> Router {
    Router::new()
        .route("/api/generate-plan", post(generate_plan))
        .route("/api/ai-suggest", post(ai_suggest))
        .route("/api/status", get(status))
        .with_state(planner)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(planner: Planner, bind: &str, port: u16) -> Result<()> {
    let app = build_router(planner);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    info!("stride serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("stride serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {err}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn generate_plan(State(planner): State<Planner>, body: Bytes) -> Result<Json<Plan>, AppError> {
    let request = GoalRequest::from_body(&body);
    info!("POST /api/generate-plan goal={:?}", request.goal);

    let plan = planner.generate_plan(&request.goal).await.inspect_err(|err| {
        if !err.is_input_error() {
            warn!("Plan generation failed: {err}");
        }
    })?;
    Ok(Json(plan))
}

async fn ai_suggest(State(planner): State<Planner>, body: Bytes) -> Json<SuggestionResponse> {
    let Ok(request) = serde_json::from_slice::<GoalRequest>(&body) else {
        info!("POST /api/ai-suggest with malformed body");
        return Json(SuggestionResponse {
            suggestion: String::new(),
        });
    };
    info!("POST /api/ai-suggest goal={:?}", request.goal);

    Json(SuggestionResponse {
        suggestion: planner.suggest_goal(&request.goal).await,
    })
}

async fn status(State(planner): State<Planner>) -> Json<ServiceStatus> {
    info!("GET /api/status");
    Json(planner.status())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
