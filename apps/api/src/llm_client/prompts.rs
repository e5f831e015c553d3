// Shared prompt fragments.
// Each feature that calls the model defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Closing instruction for every prompt that expects a bare JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond ONLY with the JSON object.";
