use crate::domain::canvas::DrawingContext;
use crate::domain::chart::ContentRect;
use crate::domain::errors::RenderResult;

/// Renderer for one segment of time-series content.
///
/// Implemented outside this crate by the curve/chunk styles. Offsets are the
/// amount of content, in pixels, that exists beyond this chunk on each side;
/// they must be finite and non-negative.
pub trait ChunkView {
    /// Draws the pixel sub-range `[region_left, region_left + region_width)`
    /// of the chunk with its left edge at `canvas_x`.
    #[allow(clippy::too_many_arguments)]
    fn draw(
        &self,
        region_left: f64,
        region_width: f64,
        canvas_x: f64,
        y: f64,
        height: f64,
        max_value: f64,
        ctx: &mut dyn DrawingContext,
    ) -> RenderResult<()>;

    /// Draws the whole chunk stretched to the given box and reports the
    /// region it covered.
    fn draw_stretched(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        max_value: f64,
        ctx: &mut dyn DrawingContext,
    ) -> RenderResult<ContentRect>;

    fn left_offset(&self) -> f64;
    fn right_offset(&self) -> f64;
    fn inherent_width(&self) -> f64;
}
