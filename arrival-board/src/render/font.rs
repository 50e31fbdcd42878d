//! The board's font asset.

use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use tracing::info;

use super::error::AssetError;

/// Default font location, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "./arial.ttf";

/// A loaded, validated font.
///
/// Loaded once at startup; cloning shares the parsed font.
#[derive(Clone)]
pub struct FontAsset {
    font: FontArc,
    path: PathBuf,
}

impl FontAsset {
    /// Read and parse the font at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;

        let font = FontArc::try_from_vec(bytes).map_err(|_| AssetError::Invalid {
            path: path.clone(),
        })?;

        info!(path = %path.display(), "Loaded font");

        Ok(Self { font, path })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The DejaVu Sans fixture bundled for rendering tests.
#[cfg(test)]
pub(crate) fn test_font() -> FontAsset {
    FontAsset::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/src/render/testdata/DejaVuSans.ttf"
    ))
    .expect("bundled test font loads")
}
