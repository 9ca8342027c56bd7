//! Rust source snippet for embedding a converted blob in firmware.

use std::path::Path;

/// Options for the embedding snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Name of the image constant; the byte constant gets a `_DATA` suffix.
    pub const_name: String,
    /// Whether to print the snippet at all.
    pub enabled: bool,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            const_name: "EMBEDDED_IMAGE".to_string(),
            enabled: true,
        }
    }
}

/// Render the two constant declarations that embed `output`.
pub fn render_snippet(output: &Path, options: &SnippetOptions) -> String {
    let name = &options.const_name;
    format!(
        "const {name}_DATA: &[u8] = include_bytes!({path:?});\n\
         const {name}: EmbeddedImage = EmbeddedImage::new({name}_DATA);\n",
        path = output.display().to_string(),
    )
}
