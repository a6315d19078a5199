use serde::{Deserialize, Serialize};

const MIN_WORDS: usize = 50;
const MAX_WORDS: usize = 2000;
const MIN_SECTIONS: usize = 2;

const EXPECTED_SECTIONS: &[&str] = &["experience", "skills", "education", "work"];

const TECH_INDICATORS: &[&str] = &[
    "python",
    "javascript",
    "programming",
    "software",
    "development",
    "technical",
];

pub const EMPTY_TEXT_ISSUE: &str = "Resume text is empty";
pub const TOO_SHORT_WARNING: &str = "Resume seems quite short - consider adding more detail";
pub const TOO_LONG_WARNING: &str =
    "Resume is very long - extraction might focus on early sections";
pub const MISSING_SECTIONS_WARNING: &str =
    "Resume might be missing common sections (experience, skills, education)";
pub const NO_TECH_WARNING: &str = "No technical skills detected - results may be limited";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub word_count: usize,
    pub sections_found: Vec<String>,
    pub tech_indicators: usize,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

/// Sanity-checks raw resume text before extraction.
///
/// Only blank text is invalid. Everything else passes with advisory warnings:
/// - fewer than 50 or more than 2000 words
/// - fewer than two of the expected section keywords
/// - no technical indicator words
pub fn validate_resume(resume_text: &str) -> ValidationResult {
    if resume_text.trim().is_empty() {
        return ValidationResult {
            valid: false,
            issues: vec![EMPTY_TEXT_ISSUE.to_string()],
            ..Default::default()
        };
    }

    let mut warnings = Vec::new();

    let word_count = resume_text.split_whitespace().count();
    if word_count < MIN_WORDS {
        warnings.push(TOO_SHORT_WARNING.to_string());
    } else if word_count > MAX_WORDS {
        warnings.push(TOO_LONG_WARNING.to_string());
    }

    let resume_lower = resume_text.to_lowercase();

    let sections_found: Vec<String> = EXPECTED_SECTIONS
        .iter()
        .filter(|section| resume_lower.contains(*section))
        .map(|section| section.to_string())
        .collect();
    if sections_found.len() < MIN_SECTIONS {
        warnings.push(MISSING_SECTIONS_WARNING.to_string());
    }

    let tech_indicators = TECH_INDICATORS
        .iter()
        .filter(|indicator| resume_lower.contains(*indicator))
        .count();
    if tech_indicators == 0 {
        warnings.push(NO_TECH_WARNING.to_string());
    }

    ValidationResult {
        valid: true,
        word_count,
        sections_found,
        tech_indicators,
        issues: vec![],
        warnings,
    }
}
