// Shared prompt constants. Feature modules that call the LLM keep their own
// templates next to them and reuse these fragments.

/// System prompt fragment that enforces plain line-oriented output.
pub const PLAIN_LIST_SYSTEM: &str = "You are a precise, structured assistant. \
    Respond with plain text only, one item per line. \
    Do NOT use markdown headings or code fences. \
    Do NOT include explanations or apologies.";
