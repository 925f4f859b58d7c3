// Profile tuning: prompt, single completion call, result rendering.
// All LLM calls go through llm_client; nothing here speaks HTTP to the provider.

pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod service;
