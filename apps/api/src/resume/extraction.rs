//! Skill Extraction — pluggable, trait-based extractor that turns resume text
//! into an ordered, bounded skill list.
//!
//! Default: `VocabularySkillExtractor` (fixed ordered vocabulary, deterministic).
//! Optional: `LlmSkillExtractor` (delegates to a `TextCompletion` collaborator).
//!
//! `Toolkit` holds an `Arc<dyn SkillExtractor>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{LlmError, TextCompletion};
use crate::resume::prompts::{build_skill_extraction_prompt, SKILL_EXTRACTION_SYSTEM};
use crate::resume::validation::{validate_resume, ValidationResult};
use crate::text::{dedup_ordered, is_all_lowercase, title_case};

/// Upper bound on skills returned by either extractor.
pub const DEFAULT_SKILL_COUNT: usize = 10;

/// Reference vocabulary. Output order follows this list.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "django",
    "flask",
    "node.js",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "html",
    "css",
    "typescript",
    "vue.js",
    "angular",
    "spring",
    "express.js",
    "redis",
    "elasticsearch",
    "jenkins",
    "ci/cd",
    "restful",
    "api",
    "microservices",
    "agile",
    "scrum",
    "machine learning",
    "data analysis",
    "blockchain",
];

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("text completion failed: {0}")]
    Completion(#[from] LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap extraction backends without touching callers.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<Vec<String>, ExtractionError>;

    /// "vocabulary" or "llm".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// VocabularySkillExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct VocabularySkillExtractor;

#[async_trait]
impl SkillExtractor for VocabularySkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Vec<String>, ExtractionError> {
        Ok(extract_vocabulary_skills(resume_text))
    }

    fn backend(&self) -> &'static str {
        "vocabulary"
    }
}

/// Scans the resume for every vocabulary entry, in vocabulary order, and keeps
/// the first ten hits. All-lowercase entries are reported title-cased.
pub fn extract_vocabulary_skills(resume_text: &str) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();

    let found = SKILL_VOCABULARY
        .iter()
        .filter(|skill| resume_lower.contains(*skill))
        .map(|skill| {
            if is_all_lowercase(skill) {
                title_case(skill)
            } else {
                skill.to_string()
            }
        });

    let mut skills = dedup_ordered(found);
    skills.truncate(DEFAULT_SKILL_COUNT);
    skills
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor {
    completion: Arc<dyn TextCompletion>,
    top_n: usize,
}

impl LlmSkillExtractor {
    pub fn new(completion: Arc<dyn TextCompletion>, top_n: usize) -> Self {
        Self { completion, top_n }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Vec<String>, ExtractionError> {
        let prompt = build_skill_extraction_prompt(resume_text, self.top_n);
        let completion = self
            .completion
            .complete(&prompt, SKILL_EXTRACTION_SYSTEM)
            .await?;
        let skills = parse_skill_lines(&completion, self.top_n);
        debug!("LLM extracted {} skills", skills.len());
        Ok(skills)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Parses a line-per-skill completion: strips bullets, drops blank and
/// single-character lines, lower-cases, de-duplicates in order, truncates.
pub fn parse_skill_lines(completion: &str, top_n: usize) -> Vec<String> {
    let cleaned = completion
        .lines()
        .map(|line| {
            line.trim()
                .trim_matches(|c: char| matches!(c, '-' | '•' | '*'))
                .trim()
        })
        .filter(|line| line.chars().count() > 1)
        .map(str::to_lowercase);

    let mut skills = dedup_ordered(cleaned);
    skills.truncate(top_n);
    skills
}

// ────────────────────────────────────────────────────────────────────────────
// Validate-then-extract
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of a guarded extraction. Never an error: failures are reported in
/// `success`, `issues` and `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub success: bool,
    pub skills: Vec<String>,
    pub skill_count: usize,
    pub word_count: usize,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validates the resume, then extracts skills, converting every failure into
/// a structured report.
pub async fn safe_extract(resume_text: &str, extractor: &dyn SkillExtractor) -> ExtractionReport {
    let validation = validate_resume(resume_text);
    extract_validated(resume_text, &validation, extractor).await
}

/// Same as `safe_extract` for callers that already hold the validation result.
pub async fn extract_validated(
    resume_text: &str,
    validation: &ValidationResult,
    extractor: &dyn SkillExtractor,
) -> ExtractionReport {
    if !validation.valid {
        return ExtractionReport {
            success: false,
            skills: vec![],
            skill_count: 0,
            word_count: validation.word_count,
            issues: validation.issues.clone(),
            warnings: validation.warnings.clone(),
            error: None,
        };
    }

    match extractor.extract(resume_text).await {
        Ok(skills) => ExtractionReport {
            success: true,
            skill_count: skills.len(),
            skills,
            word_count: validation.word_count,
            issues: validation.issues.clone(),
            warnings: validation.warnings.clone(),
            error: None,
        },
        Err(e) => {
            warn!("Skill extraction via {} failed: {e}", extractor.backend());
            let message = e.to_string();
            let mut issues = validation.issues.clone();
            issues.push(format!("Processing error: {message}"));
            ExtractionReport {
                success: false,
                skills: vec![],
                skill_count: 0,
                word_count: validation.word_count,
                issues,
                warnings: validation.warnings.clone(),
                error: Some(message),
            }
        }
    }
}
