//! Board layout: where each piece of text goes.
//!
//! The board is a 600×800 canvas holding a 2-column, 3-row grid of service
//! panels and a footer. Layout is pure so it can be checked without a font.

use chrono::{DateTime, FixedOffset, Local};

use crate::domain::{MAX_TIMINGS, ServiceTiming, Snapshot};

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 800;

/// Panels that fit on the canvas. Further services are not drawn.
pub const MAX_PANELS: usize = 6;

const COLUMNS: usize = 2;
const FIRST_X: f32 = 150.0;
const COLUMN_STEP: f32 = 300.0;
const FIRST_Y: f32 = 128.0;
const ROW_STEP: f32 = 256.0;

pub const SMALL_FONT: f32 = 24.0;
pub const LARGE_FONT: f32 = 96.0;
pub const FOOTER_FONT: f32 = 16.0;

const FOOTER_X: f32 = 16.0;
const FOOTER_Y: f32 = 780.0;

/// Hour without leading zero, two-digit minute. There is no AM/PM marker:
/// 20:15 and 08:15 both render as `8:15`.
const TIMING_FORMAT: &str = "%-I:%M";
const FOOTER_FORMAT: &str = "%a, %-d %b %Y %I:%M:%S %p";
const PLACEHOLDER: &str = "-";
const SEPARATOR: &str = "   ";

/// A string positioned on the canvas.
///
/// `(x, y)` is the anchor point and `size` is the em size in pixels. The
/// text is shifted left by `anchor_x * width`, and its baseline sits at
/// `y + anchor_y * 0.75 * size`, where `0.75 * size` approximates the line
/// height used for anchoring. `(0.5, 0.5)` centres the text on the point,
/// `(0.5, 1.0)` hangs it below, `(0.0, 0.0)` puts the baseline on the point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

/// Line height used for vertical anchoring, as a fraction of the em size.
/// Point-to-pixel ratio at 72/96 dpi.
const ANCHOR_LINE_HEIGHT: f32 = 72.0 / 96.0;

impl TextItem {
    /// Baseline y after applying the vertical anchor.
    pub fn baseline(&self) -> f32 {
        self.y + self.anchor_y * ANCHOR_LINE_HEIGHT * self.size
    }
}

/// Anchor point of the panel at `index`, or `None` past the last panel.
pub fn panel_anchor(index: usize) -> Option<(f32, f32)> {
    if index >= MAX_PANELS {
        return None;
    }
    let column = (index % COLUMNS) as f32;
    let row = (index / COLUMNS) as f32;
    Some((FIRST_X + column * COLUMN_STEP, FIRST_Y + row * ROW_STEP))
}

pub fn format_timing(t: &DateTime<FixedOffset>) -> String {
    t.format(TIMING_FORMAT).to_string()
}

/// The three timing slots, with `-` for each missing one.
pub fn timing_row(timings: &[DateTime<FixedOffset>]) -> String {
    (0..MAX_TIMINGS)
        .map(|i| {
            timings
                .get(i)
                .map(format_timing)
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn footer_text(last_updated: Option<&DateTime<Local>>) -> String {
    match last_updated {
        Some(t) => format!("Last updated: {}", t.format(FOOTER_FORMAT)),
        None => "Last updated: never".to_string(),
    }
}

/// Label, service number and timing row for one panel.
pub fn panel_items(entry: &ServiceTiming, x: f32, y: f32) -> [TextItem; 3] {
    let gap = LARGE_FONT / 2.0 + SMALL_FONT;
    [
        TextItem {
            text: entry.service.label.clone(),
            size: SMALL_FONT,
            x,
            y: y - gap,
            anchor_x: 0.5,
            anchor_y: 1.0,
        },
        TextItem {
            text: entry.service.service_no.to_string(),
            size: LARGE_FONT,
            x,
            y,
            anchor_x: 0.5,
            anchor_y: 0.5,
        },
        TextItem {
            text: timing_row(entry.timings()),
            size: SMALL_FONT,
            x,
            y: y + gap + SMALL_FONT / 4.0,
            anchor_x: 0.5,
            anchor_y: 0.0,
        },
    ]
}

/// Every text item for the snapshot: up to six panels, then the footer.
pub fn board_layout(snapshot: &Snapshot) -> Vec<TextItem> {
    let mut items: Vec<TextItem> = snapshot
        .services
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| panel_anchor(i).map(|(x, y)| panel_items(entry, x, y)))
        .flatten()
        .collect();

    items.push(TextItem {
        text: footer_text(snapshot.last_updated.as_ref()),
        size: FOOTER_FONT,
        x: FOOTER_X,
        y: FOOTER_Y,
        anchor_x: 0.0,
        anchor_y: 0.0,
    });

    items
}
