use axum::{extract::State, Json};

use crate::matching::demand::SkillDemand;
use crate::matching::matcher::{MatchOutcome, MatchSummary};
use crate::state::AppState;
use crate::tools::{AlternativesRequest, SkillsRequest};

/// POST /api/v1/jobs/best-match
pub async fn handle_best_match(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Json<MatchOutcome> {
    Json(state.toolkit.best_match(&request.skills))
}

/// POST /api/v1/jobs/alternatives
pub async fn handle_alternatives(
    State(state): State<AppState>,
    Json(request): Json<AlternativesRequest>,
) -> Json<Vec<MatchSummary>> {
    Json(state.toolkit.alternatives(&request.skills, request.top_n))
}

/// POST /api/v1/skills/demand
pub async fn handle_skill_demand(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Json<SkillDemand> {
    Json(state.toolkit.skill_demand(&request.skills))
}
