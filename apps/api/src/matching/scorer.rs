//! Job Scorer — keyword overlap score between one posting and a skill list.
//!
//! Algorithm:
//! 1. searchable text = lower(title) + lower(description)
//! 2. each skill found as a substring earns points:
//!    - ≤ 3 characters (acronyms like "sql", "aws") → 2
//!    - high-value language/framework → 3
//!    - anything else → 1
//! 3. +2 bonus at 3 matched skills, a further +3 at 5

use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

/// Skills weighted above a standard match.
pub const HIGH_VALUE_SKILLS: &[&str] = &["python", "javascript", "java", "react", "django"];

const SHORT_SKILL_MAX_CHARS: usize = 3;
const SHORT_SKILL_POINTS: u32 = 2;
const HIGH_VALUE_POINTS: u32 = 3;
const STANDARD_POINTS: u32 = 1;

const MULTI_MATCH_THRESHOLD: usize = 3;
const MULTI_MATCH_BONUS: u32 = 2;
const BROAD_MATCH_THRESHOLD: usize = 5;
const BROAD_MATCH_BONUS: u32 = 3;

/// Score and matched skills for a single posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub matched_skills: Vec<String>,
}

/// Scores `posting` against `skills`.
///
/// Skills must already be lower-cased and trimmed (see `text::normalize_skills`).
pub fn score_posting(posting: &JobPosting, skills: &[String]) -> ScoreResult {
    let job_text = posting.searchable_text();
    if job_text.trim().is_empty() {
        return ScoreResult::default();
    }

    let mut score = 0;
    let mut matched_skills = Vec::new();

    for skill in skills {
        if job_text.contains(skill.as_str()) {
            score += skill_points(skill);
            matched_skills.push(skill.clone());
        }
    }

    if matched_skills.len() >= MULTI_MATCH_THRESHOLD {
        score += MULTI_MATCH_BONUS;
    }
    if matched_skills.len() >= BROAD_MATCH_THRESHOLD {
        score += BROAD_MATCH_BONUS;
    }

    ScoreResult {
        score,
        matched_skills,
    }
}

/// Points for one matched skill. The length check wins over the high-value set.
fn skill_points(skill: &str) -> u32 {
    if skill.chars().count() <= SHORT_SKILL_MAX_CHARS {
        SHORT_SKILL_POINTS
    } else if HIGH_VALUE_SKILLS.contains(&skill) {
        HIGH_VALUE_POINTS
    } else {
        STANDARD_POINTS
    }
}
