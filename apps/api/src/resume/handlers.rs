//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{debug, info};

use crate::analysis::AnalysisReport;
use crate::errors::AppError;
use crate::resume::extraction::ExtractionReport;
use crate::resume::validation::ValidationResult;
use crate::state::AppState;
use crate::tools::ResumeTextRequest;

const UPLOAD_FIELD: &str = "file";

/// POST /api/v1/resumes/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Json<ValidationResult> {
    Json(state.toolkit.validate(&request.resume_text))
}

/// POST /api/v1/resumes/skills
///
/// Validate-then-extract. Empty resumes and extractor failures come back as
/// `success: false` with the reason in `issues` / `error`.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Json<ExtractionReport> {
    Json(state.toolkit.extract_skills(&request.resume_text).await)
}

/// POST /api/v1/resumes/upload
///
/// Multipart form with a `file` part holding either a PDF or UTF-8 text.
/// The extracted text goes through the same path as `/skills`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionReport>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let is_pdf = field.content_type() == Some("application/pdf")
            || file_name.to_ascii_lowercase().ends_with(".pdf");
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        debug!("Received upload {file_name} ({} bytes, pdf={is_pdf})", data.len());

        let resume_text = if is_pdf {
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                .await
                .map_err(|e| AppError::Internal(e.into()))?
                .map_err(|e| {
                    AppError::UnprocessableEntity(format!("Could not read PDF {file_name}: {e}"))
                })?
        } else {
            String::from_utf8(data.to_vec()).map_err(|_| {
                AppError::UnprocessableEntity(format!("{file_name} is neither a PDF nor UTF-8 text"))
            })?
        };

        let report = state.toolkit.extract_skills(&resume_text).await;
        info!(
            "Extracted {} skills from uploaded {file_name}",
            report.skill_count
        );
        return Ok(Json(report));
    }

    Err(AppError::Validation(format!(
        "multipart form must include a '{UPLOAD_FIELD}' part"
    )))
}

/// POST /api/v1/analyze
///
/// Full pipeline: validate → extract → best match, alternatives, demand.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Json<AnalysisReport> {
    Json(state.toolkit.analyze(&request.resume_text).await)
}
