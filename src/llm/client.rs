use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// Flowchart generation request payload.
pub struct FlowchartRequest<'a> {
    pub transcript: &'a str,
    pub participants: &'a [String],
}

#[async_trait]
pub trait FlowchartProvider: Send + Sync {
    /// Return Mermaid flowchart syntax for the given transcript.
    async fn generate(&self, request: FlowchartRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn FlowchartProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}
