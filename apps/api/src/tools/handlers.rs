use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tools::schemas::ToolDescriptor;

/// GET /api/v1/tools
pub async fn handle_list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.toolkit.descriptors())
}

/// POST /api/v1/tools/:name
///
/// Body is the tool's argument object; response is the tool's raw output.
pub async fn handle_invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let output = state.toolkit.invoke(&name, args).await?;
    Ok(Json(output))
}
