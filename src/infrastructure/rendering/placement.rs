//! Where the chunk view lands in the canvas for one frame.

use crate::domain::chart::{ContentRect, EdgeSide};
use crate::domain::errors::{RenderError, RenderResult};

/// Geometry the placement is resolved from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    pub viewport_x: f64,
    pub viewport_width: f64,
    pub live_leftmost_label_width: f64,
    pub live_content_width: f64,
    /// Content to the left of the chunk, in pixels.
    pub left_offset: f64,
    pub inherent_width: f64,
    pub tooth_size: f64,
    pub line_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// All live content is narrower than the viewport; the chunk is stretched
    /// over `[x, x + width)`.
    Stretched { x: f64, width: f64 },
    /// Part of the chunk is visible. `region_left`/`region_width` are chunk
    /// pixels; `canvas_x` is where `region_left` lands.
    Visible { region_left: f64, region_width: f64, canvas_x: f64 },
    /// The chunk is just past an edge: nothing is drawn but a region is
    /// reported so the jagged edge keeps rendering.
    Emulated(ContentRect),
    OffScreen,
}

impl Placement {
    pub fn resolve(input: &PlacementInput) -> Self {
        let viewport_width = input.viewport_width;
        if input.live_content_width + input.live_leftmost_label_width < viewport_width {
            return Placement::Stretched {
                x: input.live_leftmost_label_width,
                width: viewport_width - input.live_leftmost_label_width,
            };
        }

        let chunk_left = input.left_offset + input.live_leftmost_label_width - input.viewport_x;
        let chunk_end = chunk_left + input.inherent_width;

        let tolerance = input.tooth_size + input.line_width;
        let emulated_width = input.tooth_size * 2.0;
        if chunk_left > viewport_width {
            if chunk_left > viewport_width + tolerance {
                return Placement::OffScreen;
            }
            return Placement::Emulated(ContentRect::new(chunk_left, emulated_width));
        } else if chunk_end < 0.0 {
            if chunk_end < -tolerance {
                return Placement::OffScreen;
            }
            return Placement::Emulated(ContentRect::new(
                chunk_end - emulated_width,
                emulated_width,
            ));
        }

        let region_left = chunk_left.max(0.0) - chunk_left;
        let region_end = viewport_width.min(chunk_end) - chunk_left;
        Placement::Visible {
            region_left,
            region_width: region_end - region_left,
            canvas_x: region_left + chunk_left,
        }
    }
}

/// Checks a chunk view offset before any geometry is derived from it.
pub fn validate_offset(side: EdgeSide, value: f64) -> RenderResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RenderError::InvalidChunkOffset { side, value })
    }
}

/// Horizontal shift applied to the label gutter so it slides out of view
/// together with content leaving either side of the viewport.
pub fn label_offset(
    content: ContentRect,
    gutter_width: f64,
    viewport_width: f64,
    tolerance: f64,
) -> f64 {
    let right = content.right();
    if right < gutter_width - tolerance {
        gutter_width - tolerance - right
    } else if content.left > viewport_width - gutter_width {
        content.left - (viewport_width - gutter_width)
    } else {
        0.0
    }
}
