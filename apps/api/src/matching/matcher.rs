//! Job Matcher — ranks a postings table against a skill list.

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::matching::scorer::{score_posting, ScoreResult};
use crate::models::JobPosting;
use crate::text::{normalize_skills, truncate_chars};

pub const DEFAULT_TOP_N: usize = 5;

const DESCRIPTION_PREVIEW_CHARS: usize = 300;
const SALARY_FALLBACK: &str = "Not specified";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The highest-ranked posting. The description is a 300-character preview
/// ending in `...`; a posting without a description yields just `...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    pub job_description: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    /// Postings with a score above zero, not the table size.
    pub total_jobs_analyzed: usize,
    pub reasoning: String,
}

/// A ranked alternative. Carries the full description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    pub job_description: Option<String>,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub reasoning: String,
}

/// Result of a best-match query. `Unavailable` and `NoMatch` are reported
/// conditions, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Found(BestMatch),
    /// Empty postings table or empty skill list.
    Unavailable,
    /// Nothing scored above zero.
    NoMatch,
}

impl MatchOutcome {
    pub fn best(&self) -> Option<&BestMatch> {
        match self {
            MatchOutcome::Found(best) => Some(best),
            _ => None,
        }
    }

    pub fn match_score(&self) -> u32 {
        self.best().map(|b| b.match_score).unwrap_or(0)
    }
}

/// Wire shape for the two not-found conditions: an `error` key plus
/// zero-valued placeholders in the normal fields.
#[derive(Serialize)]
struct NotFoundRecord {
    error: &'static str,
    job_title: &'static str,
    company_name: &'static str,
    location: &'static str,
    match_score: u32,
    matched_skills: [&'static str; 0],
    reasoning: &'static str,
}

impl NotFoundRecord {
    fn unavailable() -> Self {
        Self {
            error: "No jobs available or no skills provided",
            job_title: "No match found",
            company_name: "N/A",
            location: "N/A",
            match_score: 0,
            matched_skills: [],
            reasoning: "Unable to find matches due to missing data",
        }
    }

    fn no_match() -> Self {
        Self {
            error: "No matching jobs found",
            job_title: "No suitable matches",
            company_name: "N/A",
            location: "N/A",
            match_score: 0,
            matched_skills: [],
            reasoning: "No jobs found that match the extracted skills",
        }
    }
}

impl Serialize for MatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchOutcome::Found(best) => best.serialize(serializer),
            MatchOutcome::Unavailable => NotFoundRecord::unavailable().serialize(serializer),
            MatchOutcome::NoMatch => NotFoundRecord::no_match().serialize(serializer),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

struct RankedPosting<'a> {
    posting: &'a JobPosting,
    result: ScoreResult,
}

/// Scores every posting, keeps those above zero and orders them by score
/// descending. The sort is stable, so ties keep table order.
fn rank_postings<'a>(postings: &'a [JobPosting], skills: &[String]) -> Vec<RankedPosting<'a>> {
    let mut ranked: Vec<RankedPosting<'a>> = postings
        .iter()
        .map(|posting| RankedPosting {
            posting,
            result: score_posting(posting, skills),
        })
        .filter(|ranked| ranked.result.score > 0)
        .collect();

    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

/// Finds the single best posting for `skills`.
pub fn find_best_match<S: AsRef<str>>(postings: &[JobPosting], skills: &[S]) -> MatchOutcome {
    let skills = normalize_skills(skills);
    if postings.is_empty() || skills.is_empty() {
        return MatchOutcome::Unavailable;
    }

    let ranked = rank_postings(postings, &skills);
    debug!(
        "Ranked {} of {} postings against {} skills",
        ranked.len(),
        postings.len(),
        skills.len()
    );

    let Some(top) = ranked.first() else {
        return MatchOutcome::NoMatch;
    };

    let posting = top.posting;
    let ScoreResult {
        score,
        matched_skills,
    } = top.result.clone();

    MatchOutcome::Found(BestMatch {
        job_title: posting.title.clone(),
        company_name: posting.company.clone(),
        location: posting.location.clone(),
        salary: salary_or_fallback(posting),
        job_description: description_preview(posting),
        reasoning: best_match_reasoning(score, &matched_skills),
        match_score: score,
        matched_skills,
        total_jobs_analyzed: ranked.len(),
    })
}

/// Returns up to `top_n` ranked postings. Empty when inputs are empty or
/// nothing matched.
pub fn find_alternatives<S: AsRef<str>>(
    postings: &[JobPosting],
    skills: &[S],
    top_n: usize,
) -> Vec<MatchSummary> {
    let skills = normalize_skills(skills);
    if postings.is_empty() || skills.is_empty() {
        return vec![];
    }

    rank_postings(postings, &skills)
        .into_iter()
        .take(top_n)
        .map(|ranked| {
            let posting = ranked.posting;
            let ScoreResult {
                score,
                matched_skills,
            } = ranked.result;
            MatchSummary {
                job_title: posting.title.clone(),
                company_name: posting.company.clone(),
                location: posting.location.clone(),
                salary: salary_or_fallback(posting),
                job_description: posting.description.clone(),
                reasoning: alternative_reasoning(score, &matched_skills),
                match_score: score,
                matched_skills,
            }
        })
        .collect()
}

fn salary_or_fallback(posting: &JobPosting) -> String {
    posting
        .salary
        .clone()
        .unwrap_or_else(|| SALARY_FALLBACK.to_string())
}

/// First 300 characters plus an ellipsis marker. A missing description
/// counts as empty text, so the marker alone remains.
fn description_preview(posting: &JobPosting) -> String {
    let description = posting.description.as_deref().unwrap_or_default();
    format!("{}...", truncate_chars(description, DESCRIPTION_PREVIEW_CHARS))
}

fn best_match_reasoning(score: u32, matched: &[String]) -> String {
    format!(
        "This job scored highest ({score} points) because it matches {} of your key skills: {}. \
         The role appears to be a good fit for your technical background.",
        matched.len(),
        matched.join(", ")
    )
}

fn alternative_reasoning(score: u32, matched: &[String]) -> String {
    format!(
        "Score: {score} - Matches {} skills: {}",
        matched.len(),
        matched.join(", ")
    )
}
