//! The resume/job operations exposed as named tools with JSON arguments and
//! JSON results, callable by any orchestrator.
//!
//! HTTP handlers use the typed methods directly; `invoke` is the
//! name-dispatched entry point behind `/api/v1/tools/:name`.

pub mod handlers;
pub mod schemas;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::analysis::{analyze_resume, AnalysisReport};
use crate::matching::demand::{analyze_demand, SkillDemand};
use crate::matching::matcher::{
    find_alternatives, find_best_match, MatchOutcome, MatchSummary, DEFAULT_TOP_N,
};
use crate::models::JobPosting;
use crate::resume::extraction::{safe_extract, ExtractionReport, SkillExtractor};
use crate::resume::validation::{validate_resume, ValidationResult};

use self::schemas::{
    ToolDescriptor, ANALYZE_RESUME, EXTRACT_SKILLS, FIND_ALTERNATIVE_MATCHES,
    FIND_BEST_JOB_MATCH, GET_SKILL_STATISTICS, VALIDATE_RESUME,
};

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize tool output: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Argument types (shared with the HTTP handlers)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlternativesRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Toolkit
// ────────────────────────────────────────────────────────────────────────────

/// The posting table and extractor every tool runs against. Cheap to clone.
#[derive(Clone)]
pub struct Toolkit {
    postings: Arc<Vec<JobPosting>>,
    extractor: Arc<dyn SkillExtractor>,
}

impl Toolkit {
    pub fn new(postings: Arc<Vec<JobPosting>>, extractor: Arc<dyn SkillExtractor>) -> Self {
        Self {
            postings,
            extractor,
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn extractor_backend(&self) -> &'static str {
        self.extractor.backend()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        schemas::all_descriptors()
    }

    pub fn validate(&self, resume_text: &str) -> ValidationResult {
        validate_resume(resume_text)
    }

    pub async fn extract_skills(&self, resume_text: &str) -> ExtractionReport {
        safe_extract(resume_text, self.extractor.as_ref()).await
    }

    pub fn best_match(&self, skills: &[String]) -> MatchOutcome {
        find_best_match(&self.postings, skills)
    }

    pub fn alternatives(&self, skills: &[String], top_n: Option<usize>) -> Vec<MatchSummary> {
        find_alternatives(&self.postings, skills, top_n.unwrap_or(DEFAULT_TOP_N))
    }

    pub fn skill_demand(&self, skills: &[String]) -> SkillDemand {
        analyze_demand(&self.postings, skills)
    }

    pub async fn analyze(&self, resume_text: &str) -> AnalysisReport {
        analyze_resume(resume_text, &self.postings, self.extractor.as_ref()).await
    }

    /// Runs the tool called `name` with JSON `args`.
    ///
    /// Input conditions (empty resume, no postings) come back as ordinary
    /// results; only unknown names and malformed arguments are errors.
    pub async fn invoke(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        debug!(tool = name, "Invoking tool");

        let output = match name {
            VALIDATE_RESUME => {
                let req: ResumeTextRequest = parse_args(name, args)?;
                serde_json::to_value(self.validate(&req.resume_text))?
            }
            EXTRACT_SKILLS => {
                let req: ResumeTextRequest = parse_args(name, args)?;
                serde_json::to_value(self.extract_skills(&req.resume_text).await)?
            }
            FIND_BEST_JOB_MATCH => {
                let req: SkillsRequest = parse_args(name, args)?;
                serde_json::to_value(self.best_match(&req.skills))?
            }
            FIND_ALTERNATIVE_MATCHES => {
                let req: AlternativesRequest = parse_args(name, args)?;
                serde_json::to_value(self.alternatives(&req.skills, req.top_n))?
            }
            GET_SKILL_STATISTICS => {
                let req: SkillsRequest = parse_args(name, args)?;
                serde_json::to_value(self.skill_demand(&req.skills))?
            }
            ANALYZE_RESUME => {
                let req: ResumeTextRequest = parse_args(name, args)?;
                serde_json::to_value(self.analyze(&req.resume_text).await)?
            }
            _ => return Err(ToolError::UnknownTool(name.to_string())),
        };

        Ok(output)
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|source| ToolError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::resume::extraction::VocabularySkillExtractor;

    pub(crate) fn sample_toolkit() -> Toolkit {
        let postings = vec![
            JobPosting::new("Data Engineer", "Initech", "Austin")
                .with_salary("$120k")
                .with_description("Python, SQL, Spark and AWS pipelines"),
            JobPosting::new("Frontend Developer", "Globex", "Remote")
                .with_description("React, TypeScript, CSS"),
            JobPosting::new("Pastry Chef", "Bakery", "Lyon"),
        ];
        Toolkit::new(Arc::new(postings), Arc::new(VocabularySkillExtractor))
    }

    #[tokio::test]
    async fn test_descriptors_cover_every_dispatched_tool() {
        let toolkit = sample_toolkit();
        for descriptor in toolkit.descriptors() {
            let result = toolkit.invoke(descriptor.name, json!({})).await;
            assert!(
                matches!(result, Err(ToolError::InvalidArguments { .. })),
                "{} should reject empty args",
                descriptor.name
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let err = sample_toolkit()
            .invoke("summon_recruiter", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "summon_recruiter"));
    }

    #[tokio::test]
    async fn test_unexpected_argument_is_rejected() {
        let err = sample_toolkit()
            .invoke(FIND_BEST_JOB_MATCH, json!({"skills": ["python"], "limit": 3}))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid arguments for find_best_job_match"));
    }

    #[tokio::test]
    async fn test_best_match_tool_returns_record() {
        let output = sample_toolkit()
            .invoke(FIND_BEST_JOB_MATCH, json!({"skills": ["Python", "SQL"]}))
            .await
            .unwrap();
        assert_eq!(output["company_name"], "Initech");
        assert_eq!(output["match_score"], 5);
        assert_eq!(output["salary"], "$120k");
        assert_eq!(output["total_jobs_analyzed"], 1);
    }

    #[tokio::test]
    async fn test_best_match_tool_reports_empty_skills_as_value() {
        let output = sample_toolkit()
            .invoke(FIND_BEST_JOB_MATCH, json!({"skills": []}))
            .await
            .unwrap();
        assert_eq!(output["error"], "No jobs available or no skills provided");
        assert_eq!(output["match_score"], 0);
    }

    #[tokio::test]
    async fn test_alternatives_tool_honours_top_n() {
        let toolkit = sample_toolkit();
        let all = toolkit
            .invoke(FIND_ALTERNATIVE_MATCHES, json!({"skills": ["python", "react"]}))
            .await
            .unwrap();
        assert_eq!(all.as_array().unwrap().len(), 2);

        let one = toolkit
            .invoke(
                FIND_ALTERNATIVE_MATCHES,
                json!({"skills": ["python", "react"], "top_n": 1}),
            )
            .await
            .unwrap();
        assert_eq!(one.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_skill_statistics_keep_caller_order() {
        let output = sample_toolkit()
            .invoke(GET_SKILL_STATISTICS, json!({"skills": ["React", "Python", "Cobol"]}))
            .await
            .unwrap();
        let keys: Vec<&String> = output.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["React", "Python", "Cobol"]);
        assert_eq!(output["Cobol"]["jobs_mentioning"], 0);
        assert_eq!(output["Cobol"]["demand_level"], "Very Low");
    }

    #[tokio::test]
    async fn test_validate_tool_reports_empty_resume() {
        let output = sample_toolkit()
            .invoke(VALIDATE_RESUME, json!({"resume_text": ""}))
            .await
            .unwrap();
        assert_eq!(output["valid"], false);
        assert_eq!(output["issues"][0], "Resume text is empty");
    }
}
