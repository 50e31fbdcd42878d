//! Rendering a snapshot as a PNG board.
//!
//! Rendering happens in two steps: [`board_layout`] turns a snapshot into
//! positioned text, and [`BoardCanvas`] rasterises that text and encodes
//! the image. Only the second step needs a font.

mod canvas;
mod error;
mod font;
mod layout;

pub use canvas::{BACKGROUND, BoardCanvas, FOREGROUND};
pub use error::{AssetError, RenderError};
pub use font::{DEFAULT_FONT_PATH, FontAsset};
pub use layout::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FOOTER_FONT, LARGE_FONT, MAX_PANELS, SMALL_FONT, TextItem,
    board_layout, footer_text, format_timing, panel_anchor, panel_items, timing_row,
};

use crate::domain::Snapshot;

/// Turns a snapshot into image bytes.
///
/// This abstraction allows the web layer to be tested without a font.
pub trait BoardRenderer: Send + Sync {
    /// MIME type of the bytes `render` produces.
    fn content_type(&self) -> &'static str;

    fn render(&self, snapshot: &Snapshot) -> Result<Vec<u8>, RenderError>;
}

/// Renders the board as PNG with a loaded font.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    font: FontAsset,
}

impl PngRenderer {
    pub fn new(font: FontAsset) -> Self {
        Self { font }
    }
}

impl BoardRenderer for PngRenderer {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn render(&self, snapshot: &Snapshot) -> Result<Vec<u8>, RenderError> {
        render_png(snapshot, &self.font)
    }
}

/// Render the snapshot to PNG bytes.
pub fn render_png(snapshot: &Snapshot, font: &FontAsset) -> Result<Vec<u8>, RenderError> {
    let mut canvas = BoardCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    for item in board_layout(snapshot) {
        canvas.draw_text(font.font(), &item, FOREGROUND);
    }

    canvas.encode_png()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use image::RgbImage;

    use crate::domain::{TrackedService, default_tracked_services};
    use crate::render::font::test_font;

    fn snapshot_of(tracked: &[TrackedService]) -> Snapshot {
        let mut snapshot = Snapshot::initial(tracked);
        snapshot.last_updated = Some(Local.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        snapshot
    }

    fn render(snapshot: &Snapshot) -> RgbImage {
        let bytes = PngRenderer::new(test_font()).render(snapshot).unwrap();
        image::load_from_memory(&bytes).unwrap().to_rgb8()
    }

    fn has_ink(image: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| *image.get_pixel(x, y) != BACKGROUND)
    }

    /// First and last rows with ink inside the window.
    fn ink_rows(image: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> (u32, u32) {
        let rows: Vec<u32> = ys
            .filter(|&y| has_ink(image, xs.clone(), y..y + 1))
            .collect();
        (rows[0], rows[rows.len() - 1])
    }

    #[test]
    fn renders_full_board() {
        let renderer = PngRenderer::new(test_font());
        assert_eq!(renderer.content_type(), "image/png");

        let image = render(&snapshot_of(&default_tracked_services()));

        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        for index in 0..MAX_PANELS {
            let (x, y) = panel_anchor(index).unwrap();
            let (x, y) = (x as u32, y as u32);
            assert!(
                has_ink(&image, x - 60..x + 60, y - 40..y + 40),
                "no ink near panel {index} at ({x}, {y})"
            );
        }
        // Footer, bottom left.
        assert!(has_ink(&image, 0..300, 760..800));
    }

    #[test]
    fn service_number_is_centred_on_its_anchor() {
        let image = render(&snapshot_of(&default_tracked_services()));

        // Between the label (baseline 74) and the timing row (top ~188).
        let (top, bottom) = ink_rows(&image, 60..240, 82..186);
        let centre = (top + bottom) as f32 / 2.0;

        assert!((centre - 128.0).abs() <= 6.0, "ink rows {top}..={bottom}");
    }

    #[test]
    fn seventh_service_is_not_drawn() {
        let six = default_tracked_services();
        let mut seven = six.clone();
        seven.push("extra:01012:7".parse().unwrap());

        let with_six = render(&snapshot_of(&six));
        let with_seven = render(&snapshot_of(&seven));

        assert_eq!(with_seven.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert!(with_six.as_raw() == with_seven.as_raw());
    }
}
