//! Analysis Pipeline — validate → extract → match + demand, as one report.
//!
//! Each stage reports its own condition; the pipeline never fails.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::matching::demand::{analyze_demand, SkillDemand};
use crate::matching::matcher::{
    find_alternatives, find_best_match, MatchOutcome, MatchSummary, DEFAULT_TOP_N,
};
use crate::models::JobPosting;
use crate::resume::extraction::{extract_validated, SkillExtractor};
use crate::resume::validation::{validate_resume, ValidationResult};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub success: bool,
    pub extractor_backend: &'static str,
    pub validation: ValidationResult,
    pub skills: Vec<String>,
    /// Absent when extraction did not succeed.
    pub best_match: Option<MatchOutcome>,
    pub alternatives: Vec<MatchSummary>,
    pub skill_demand: SkillDemand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn analyze_resume(
    resume_text: &str,
    postings: &[JobPosting],
    extractor: &dyn SkillExtractor,
) -> AnalysisReport {
    let request_id = Uuid::new_v4();
    let validation = validate_resume(resume_text);
    let extraction = extract_validated(resume_text, &validation, extractor).await;

    let mut report = AnalysisReport {
        request_id,
        analyzed_at: Utc::now(),
        success: extraction.success,
        extractor_backend: extractor.backend(),
        validation,
        skills: extraction.skills,
        best_match: None,
        alternatives: vec![],
        skill_demand: SkillDemand::new(),
        error: extraction.error,
    };

    if !report.success {
        if report.error.is_none() {
            report.error = report.validation.issues.first().cloned();
        }
        info!(%request_id, "Resume analysis stopped before matching");
        return report;
    }

    let best_match = find_best_match(postings, &report.skills);
    report.alternatives = find_alternatives(postings, &report.skills, DEFAULT_TOP_N);
    report.skill_demand = analyze_demand(postings, &report.skills);

    info!(
        %request_id,
        skills = report.skills.len(),
        match_score = best_match.match_score(),
        alternatives = report.alternatives.len(),
        "Resume analysis complete"
    );
    report.best_match = Some(best_match);

    report
}
