//! Small text helpers shared by extraction, scoring and demand analysis.

use std::collections::HashSet;

/// Lower-cases and trims a single skill.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalizes a caller-supplied skill list: lower-case, trim, drop blanks,
/// de-duplicate keeping the first occurrence.
pub fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    dedup_ordered(
        skills
            .iter()
            .map(|s| normalize_skill(s.as_ref()))
            .filter(|s| !s.is_empty()),
    )
}

/// Removes duplicates while keeping first-seen order.
pub fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so `node.js` becomes `Node.Js` and `ci/cd` becomes `Ci/Cd`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for c in value.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

/// True when the value has at least one letter and no upper-case letters.
pub fn is_all_lowercase(value: &str) -> bool {
    value.chars().any(char::is_alphabetic) && !value.chars().any(char::is_uppercase)
}

/// Returns at most `max_chars` characters of `value`, never splitting a code point.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
