// Shared prompt constants.
// Each service that needs oracle calls defines its own prompts.rs alongside it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every prompt that extracts facts from user-provided text.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    CRITICAL: DO NOT INVENT or HALLUCINATE any skills. \
    ONLY extract skills that are EXPLICITLY MENTIONED in the text. \
    If a skill is heavily implied but not stated, DO NOT include it.";
