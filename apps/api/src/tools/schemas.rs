//! JSON input schemas for the toolkit, grouped by the argument shape each
//! tool accepts.

use serde::Serialize;
use serde_json::{json, Map as JsonMap, Value};

pub const VALIDATE_RESUME: &str = "validate_resume";
pub const EXTRACT_SKILLS: &str = "extract_skills";
pub const FIND_BEST_JOB_MATCH: &str = "find_best_job_match";
pub const FIND_ALTERNATIVE_MATCHES: &str = "find_alternative_matches";
pub const GET_SKILL_STATISTICS: &str = "get_skill_statistics";
pub const ANALYZE_RESUME: &str = "analyze_resume";

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    let mut schema = JsonMap::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), properties);
    schema.insert("required".into(), json!(required));
    schema.insert("additionalProperties".into(), json!(false));
    Value::Object(schema)
}

fn resume_text_schema() -> Value {
    object_schema(
        json!({
            "resume_text": {
                "type": "string",
                "description": "Plain text of the resume"
            }
        }),
        &["resume_text"],
    )
}

fn skills_schema() -> Value {
    object_schema(
        json!({
            "skills": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Skill names to match against the posting table"
            }
        }),
        &["skills"],
    )
}

fn alternatives_schema() -> Value {
    object_schema(
        json!({
            "skills": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Skill names to match against the posting table"
            },
            "top_n": {
                "type": "integer",
                "minimum": 0,
                "default": 5,
                "description": "Maximum number of matches to return"
            }
        }),
        &["skills"],
    )
}

/// Every tool the toolkit answers to, in a stable order.
pub fn all_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: VALIDATE_RESUME,
            description: "Check resume text for emptiness, length, common sections and technical content",
            input_schema: resume_text_schema(),
        },
        ToolDescriptor {
            name: EXTRACT_SKILLS,
            description: "Validate a resume and extract its most important technical skills",
            input_schema: resume_text_schema(),
        },
        ToolDescriptor {
            name: FIND_BEST_JOB_MATCH,
            description: "Find the single highest-scoring job posting for a skill list",
            input_schema: skills_schema(),
        },
        ToolDescriptor {
            name: FIND_ALTERNATIVE_MATCHES,
            description: "List the top-N job postings for a skill list, best first",
            input_schema: alternatives_schema(),
        },
        ToolDescriptor {
            name: GET_SKILL_STATISTICS,
            description: "Report how many postings mention each skill and the resulting demand level",
            input_schema: skills_schema(),
        },
        ToolDescriptor {
            name: ANALYZE_RESUME,
            description: "Run validation, extraction, matching and demand statistics in one call",
            input_schema: resume_text_schema(),
        },
    ]
}
