use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Settings;
use crate::render::encode_diagram;

/// Extension used for the fallback source file when rendering fails.
const FALLBACK_EXTENSION: &str = "mermaid";

/// Failure modes of a render request.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The service answered with a non-success status. Recoverable: the
    /// caller falls back to writing the raw diagram source.
    #[error("rendering service returned {status}")]
    Status { status: StatusCode },

    /// Connection, DNS, or timeout failure. Not recovered.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// What `render_to_file` wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The rendered image was written to this path.
    Image(PathBuf),

    /// The service rejected the diagram; the raw source was written to this
    /// path instead.
    Fallback { path: PathBuf, status: StatusCode },
}

pub struct KrokiRenderer {
    http: Client,
    endpoint: String,
    diagram_format: String,
    image_format: String,
}

impl KrokiRenderer {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build rendering HTTP client")?,
            endpoint: settings.render.endpoint.trim_end_matches('/').to_string(),
            diagram_format: settings.render.diagram_format.clone(),
            image_format: settings.render.image_format.clone(),
        })
    }

    /// Request URL for a diagram: `<base>/<diagram>/<image>/<base64url(source)>`.
    pub fn request_url(&self, source: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint,
            self.diagram_format,
            self.image_format,
            encode_diagram(source)
        )
    }

    /// Fetch the rendered image bytes for the given diagram source.
    pub async fn render(&self, source: &str) -> std::result::Result<Vec<u8>, RenderError> {
        let response = self.http.get(self.request_url(source)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status { status });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Render the diagram to `image_path`, or write the raw source to a
    /// sibling fallback file if the service rejects it.
    ///
    /// Exactly one file is written per call. Transport failures propagate
    /// without writing anything.
    pub async fn render_to_file(&self, source: &str, image_path: &Path) -> Result<RenderOutcome> {
        match self.render(source).await {
            Ok(bytes) => {
                std::fs::write(image_path, bytes).with_context(|| {
                    format!("Failed to write rendered image: {}", image_path.display())
                })?;
                Ok(RenderOutcome::Image(image_path.to_path_buf()))
            }
            Err(RenderError::Status { status }) => {
                tracing::warn!(%status, "rendering service rejected the diagram");
                let path = fallback_path(image_path);
                std::fs::write(&path, source).with_context(|| {
                    format!("Failed to write fallback diagram source: {}", path.display())
                })?;
                Ok(RenderOutcome::Fallback { path, status })
            }
            Err(err @ RenderError::Transport(_)) => {
                Err(anyhow::Error::new(err).context("Rendering service request failed"))
            }
        }
    }
}

/// Sibling path for the raw diagram source, extension swapped to `.mermaid`.
pub fn fallback_path(image_path: &Path) -> PathBuf {
    image_path.with_extension(FALLBACK_EXTENSION)
}
