// Shared prompt fragments. Each module that calls the LLM keeps its own
// prompts.rs alongside it; this file holds cross-cutting pieces only.

/// Instruction that pins the response to a single JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
