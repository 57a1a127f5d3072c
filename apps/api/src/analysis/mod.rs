// Analysis pipeline: extract → score → prompt → insight → report.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod report;
