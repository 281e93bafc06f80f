//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, FlowchartRequest};
use crate::render::{KrokiRenderer, RenderOutcome};
use crate::transcript::Transcript;

/// Run the full pipeline: transcript -> Mermaid source -> rendered image.
pub async fn generate_flowchart(
    settings: &Settings,
    transcript_path: Option<PathBuf>,
    participants: Option<Vec<String>>,
    markdown_path: PathBuf,
    image_path: PathBuf,
) -> Result<()> {
    let transcript = load_transcript(transcript_path.as_deref(), participants)?;

    println!("Generating flowchart from meeting transcript...");

    let provider = build_provider(settings)?;
    let prompt_text = transcript.to_prompt_text();
    let flowchart = provider
        .generate(FlowchartRequest {
            transcript: &prompt_text,
            participants: &transcript.participants,
        })
        .await?;

    println!();
    println!("Generated Mermaid Flowchart:");
    println!("{}", "=".repeat(50));
    println!("{}", flowchart);
    println!("{}", "=".repeat(50));

    write_markdown(&markdown_path, &flowchart)?;
    println!();
    println!("Flowchart saved to '{}'", markdown_path.display());

    let renderer = KrokiRenderer::from_settings(settings)?;
    match renderer.render_to_file(&flowchart, &image_path).await? {
        RenderOutcome::Image(path) => {
            println!();
            println!("Rendered diagram saved to '{}'", path.display());
        }
        RenderOutcome::Fallback { path, status } => {
            println!();
            println!("Error rendering diagram: {}", status);
            println!("Falling back to saving Mermaid code as text file...");
            println!("Mermaid code saved to '{}'", path.display());
            println!(
                "You can copy this code to https://mermaid.live to render the diagram manually."
            );
        }
    }

    Ok(())
}

/// Print the built-in sample transcript in the accepted file format.
pub fn print_sample() {
    print!("{}", Transcript::sample().to_file_format());
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn load_transcript(
    transcript_path: Option<&Path>,
    participants: Option<Vec<String>>,
) -> Result<Transcript> {
    match transcript_path {
        Some(path) => Transcript::from_file(path, participants.unwrap_or_default()),
        None => Ok(Transcript::sample()),
    }
}

/// Write the Mermaid source to a Markdown file with a fenced code block.
fn write_markdown(path: &Path, flowchart: &str) -> Result<()> {
    let content = format!("# Meeting Flowchart\n\n```mermaid\n{}\n```\n", flowchart);
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write flowchart Markdown: {}", path.display()))?;
    Ok(())
}
