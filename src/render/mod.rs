//! Rendering module for meetflow
//!
//! Submits Mermaid source to a Kroki-compatible rendering service and writes
//! the returned image to disk. A non-2xx reply from the service degrades to
//! writing the raw Mermaid source next to the intended image so the user can
//! render it manually.

mod kroki;

pub use kroki::{fallback_path, KrokiRenderer, RenderError, RenderOutcome};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

/// Encode diagram source for the rendering service request path.
///
/// UTF-8 bytes, URL-safe base64 with padding. Kroki accepts this directly in
/// the final path segment.
pub fn encode_diagram(source: &str) -> String {
    URL_SAFE.encode(source.as_bytes())
}
