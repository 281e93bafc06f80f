//! LLM module for meetflow
//!
//! Turns a meeting transcript into Mermaid flowchart syntax via an
//! OpenAI-compatible chat completion API.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, FlowchartProvider, FlowchartRequest};
pub use openai::OpenAiClient;
pub use prompts::build_flowchart_prompt;
