//! meetflow - Meeting transcripts to rendered flowcharts
//!
//! Entry point for the meetflow CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meetflow::cli::{Cli, Commands};
use meetflow::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            meetflow::cli::completions::print(shell);
        }
        Commands::Sample => {
            meetflow::cli::commands::print_sample();
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Generate {
                    transcript,
                    participants,
                    markdown,
                    output,
                } => {
                    meetflow::cli::commands::generate_flowchart(
                        &settings,
                        transcript,
                        participants,
                        markdown,
                        output,
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    meetflow::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Sample => unreachable!(),
            }
        }
    }

    Ok(())
}
