use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version plus what the matcher is running against.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "jobs_loaded": state.toolkit.postings().len(),
        "jobs_source": state.config.jobs_csv.display().to_string(),
        "skill_extractor": state.toolkit.extractor_backend()
    }))
}
