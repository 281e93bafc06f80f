//! meetflow - Turn meeting transcripts into rendered Mermaid flowcharts
//!
//! Two-stage pipeline: an LLM turns a transcript into Mermaid flowchart
//! syntax, then a Kroki-compatible service renders that syntax to an image.

pub mod cli;
pub mod config;
pub mod llm;
pub mod render;
pub mod transcript;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meetflow";
