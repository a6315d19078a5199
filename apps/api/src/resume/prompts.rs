// LLM prompt constants for resume skill extraction.
// Reuses the plain-list fragment from llm_client::prompts.

use crate::llm_client::prompts::PLAIN_LIST_SYSTEM;

/// System prompt for skill extraction.
pub const SKILL_EXTRACTION_SYSTEM: &str = PLAIN_LIST_SYSTEM;

/// Skill extraction prompt template. Replace `{top_n}` and `{resume_text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze this resume and extract the top {top_n} most important technical skills.

Focus on:
- Programming languages (Python, JavaScript, etc.)
- Frameworks and libraries (React, Django, etc.)
- Tools and technologies (Git, Docker, AWS, etc.)
- Data analysis tools (Pandas, SQL, etc.)
- Any other technical competencies

Return only the skill names, one per line, without explanations.
Be specific (e.g., "Python" not "programming languages").

RESUME TEXT:
{resume_text}"#;

pub fn build_skill_extraction_prompt(resume_text: &str, top_n: usize) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE
        .replace("{top_n}", &top_n.to_string())
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fills_placeholders() {
        let prompt = build_skill_extraction_prompt("Rust and Tokio", 7);
        assert!(prompt.contains("top 7 most important"));
        assert!(prompt.ends_with("Rust and Tokio"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
