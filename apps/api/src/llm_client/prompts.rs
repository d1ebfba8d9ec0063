// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting system instruction sent to every backend.

/// System instruction used by both backends so their outputs are comparable.
pub const ANALYST_SYSTEM: &str = "You are a professional government contract analyst \
    and bid writer with expertise in crafting winning proposals.";
