//! Rasterising laid-out text and encoding the result.

use std::io::Cursor;

use ab_glyph::{Font, FontArc, PxScale, PxScaleFont, ScaleFont};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use super::error::RenderError;
use super::layout::TextItem;

pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// An RGB drawing surface for the board.
pub struct BoardCanvas {
    image: RgbImage,
}

impl BoardCanvas {
    /// A canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Draw one text item, honouring its anchor.
    ///
    /// `item.size` is an em size, while `PxScale` is the ascent-to-descent
    /// height, so the scale is widened by `height / units_per_em`.
    /// `imageproc` positions text by the top of its line box, so the anchor
    /// is converted to a baseline first and then lifted by the font ascent.
    pub fn draw_text(&mut self, font: &FontArc, item: &TextItem, color: Rgb<u8>) {
        let scale = em_scale(font, item.size);
        let scaled = font.as_scaled(scale);

        let left = item.x - item.anchor_x * advance_width(&scaled, &item.text);
        let top = item.baseline() - scaled.ascent();

        draw_text_mut(
            &mut self.image,
            color,
            left.round() as i32,
            top.round() as i32,
            scale,
            font,
            &item.text,
        );
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// The `PxScale` whose em square is `size` pixels.
fn em_scale(font: &FontArc, size: f32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(size * height / units_per_em)
}

/// Sum of glyph advances, with kerning.
fn advance_width(font: &PxScaleFont<&FontArc>, text: &str) -> f32 {
    let mut width = 0.0;
    let mut previous = None;
    for c in text.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            width += font.kern(prev, id);
        }
        width += font.h_advance(id);
        previous = Some(id);
    }
    width
}
