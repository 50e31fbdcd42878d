//! Rendering error types.

use std::path::PathBuf;

/// The font asset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The font file could not be read
    #[error("failed to read font {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a usable TrueType/OpenType font
    #[error("invalid font file {}", .path.display())]
    Invalid { path: PathBuf },
}

/// Errors while producing the board image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// PNG encoding failed
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
