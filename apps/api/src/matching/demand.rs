//! How often each skill shows up across the postings table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::JobPosting;
use crate::text::normalize_skill;

/// Coarse demand bucket derived from the share of postings mentioning a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
    Unknown,
}

impl DemandLevel {
    /// Buckets `count` out of `total` postings. An empty table is `Unknown`.
    pub fn from_counts(count: usize, total: usize) -> Self {
        if total == 0 {
            return DemandLevel::Unknown;
        }
        match share_percent(count, total) {
            p if p >= 50.0 => DemandLevel::VeryHigh,
            p if p >= 25.0 => DemandLevel::High,
            p if p >= 10.0 => DemandLevel::Medium,
            p if p >= 5.0 => DemandLevel::Low,
            _ => DemandLevel::VeryLow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandStat {
    pub jobs_mentioning: usize,
    /// 0.0 – 100.0, one decimal place.
    pub percentage: f64,
    pub demand_level: DemandLevel,
}

/// Skill (as supplied by the caller) → demand, in caller order.
pub type SkillDemand = IndexMap<String, DemandStat>;

/// Counts, for each skill, the postings whose title or description mentions it.
pub fn analyze_demand<S: AsRef<str>>(postings: &[JobPosting], skills: &[S]) -> SkillDemand {
    let total = postings.len();
    let job_texts: Vec<String> = postings.iter().map(JobPosting::searchable_text).collect();

    skills
        .iter()
        .map(|skill| {
            let skill = skill.as_ref();
            let needle = normalize_skill(skill);
            let jobs_mentioning = job_texts
                .iter()
                .filter(|text| text.contains(needle.as_str()))
                .count();

            let stat = DemandStat {
                jobs_mentioning,
                percentage: rounded_percentage(jobs_mentioning, total),
                demand_level: DemandLevel::from_counts(jobs_mentioning, total),
            };
            (skill.to_string(), stat)
        })
        .collect()
}

fn share_percent(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// Percentage at one decimal; 0 for an empty table.
///
/// Rounds the exact decimal value of the share. Scaling by ten first would
/// itself round, turning values just above a `.x5` boundary into ties.
fn rounded_percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let share = share_percent(count, total);
    format!("{share:.1}").parse().unwrap_or(share)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n_python: usize, n_other: usize) -> Vec<JobPosting> {
        let mut postings = Vec::new();
        for i in 0..n_python {
            postings.push(
                JobPosting::new(format!("Python Developer {i}"), "Acme", "Remote")
                    .with_description("Django and PostgreSQL"),
            );
        }
        for i in 0..n_other {
            postings.push(JobPosting::new(format!("Accountant {i}"), "Initech", "Austin"));
        }
        postings
    }

    #[test]
    fn test_empty_table_is_unknown_with_zero_percentage() {
        let demand = analyze_demand(&[], &["python"]);
        let stat = &demand["python"];
        assert_eq!(stat.jobs_mentioning, 0);
        assert_eq!(stat.percentage, 0.0);
        assert_eq!(stat.demand_level, DemandLevel::Unknown);
    }

    #[test]
    fn test_counts_are_case_insensitive_and_keyed_by_input() {
        let demand = analyze_demand(&table(1, 2), &[" Python ", "DJANGO"]);
        assert_eq!(demand[" Python "].jobs_mentioning, 1);
        assert_eq!(demand["DJANGO"].jobs_mentioning, 1);
        assert_eq!(demand["DJANGO"].percentage, 33.3);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(DemandLevel::from_counts(1, 2), DemandLevel::VeryHigh);
        assert_eq!(DemandLevel::from_counts(1, 4), DemandLevel::High);
        assert_eq!(DemandLevel::from_counts(1, 10), DemandLevel::Medium);
        assert_eq!(DemandLevel::from_counts(1, 20), DemandLevel::Low);
        assert_eq!(DemandLevel::from_counts(1, 21), DemandLevel::VeryLow);
        assert_eq!(DemandLevel::from_counts(0, 5), DemandLevel::VeryLow);
        assert_eq!(DemandLevel::from_counts(0, 0), DemandLevel::Unknown);
    }

    #[test]
    fn test_percentage_stays_within_bounds() {
        let postings = table(3, 4);
        let demand = analyze_demand(&postings, &["python", "accountant", "rust", "acme"]);
        for stat in demand.values() {
            assert!((0.0..=100.0).contains(&stat.percentage));
        }
        assert_eq!(demand["python"].percentage, 42.9);
        assert_eq!(demand["rust"].demand_level, DemandLevel::VeryLow);
    }

    #[test]
    fn test_rounded_percentage_one_decimal() {
        assert_eq!(rounded_percentage(1, 3), 33.3);
        assert_eq!(rounded_percentage(2, 3), 66.7);
        assert_eq!(rounded_percentage(1, 8), 12.5);
        assert_eq!(rounded_percentage(3, 0), 0.0);
    }

    #[test]
    fn test_rounding_uses_exact_share_near_half_boundaries() {
        // 1/2000 lands a hair above 0.05, 19/2000 a hair below 0.95
        assert_eq!(rounded_percentage(1, 2000), 0.1);
        assert_eq!(rounded_percentage(19, 2000), 0.9);

        let mut postings = table(0, 1999);
        postings.push(JobPosting::new("Rust Engineer", "Acme", "Remote"));
        let demand = analyze_demand(&postings, &["rust"]);
        assert_eq!(demand["rust"].jobs_mentioning, 1);
        assert_eq!(demand["rust"].percentage, 0.1);
    }

    #[test]
    fn test_output_preserves_skill_order() {
        let demand = analyze_demand(&table(1, 1), &["sql", "python", "django"]);
        let keys: Vec<&str> = demand.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sql", "python", "django"]);
    }

    #[test]
    fn test_demand_level_serializes_with_spaces() {
        let json = serde_json::to_string(&DemandLevel::VeryHigh).unwrap();
        assert_eq!(json, r#""Very High""#);
    }
}
