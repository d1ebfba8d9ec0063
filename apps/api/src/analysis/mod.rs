// Contract analysis: one summary + one proposal outline per (contract, backend).
// All LLM calls go through llm_client — no direct provider calls here.

pub mod prompts;
pub mod requester;

pub use requester::analyze;
