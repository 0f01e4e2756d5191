// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it and builds on these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text before or after the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that keeps rewrites faithful to the source document.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Do not invent new experiences, employers, dates, degrees or skills. \
    Only rephrase and enhance information that is present in the original resume.";
