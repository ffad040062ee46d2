// Reply generation: prompt rendering, the provider call, and completion parsing.
// All LLM calls go through llm_client via the CompletionProvider trait.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod tone;
