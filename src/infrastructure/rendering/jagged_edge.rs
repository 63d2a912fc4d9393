//! Zig-zag edges marking content that continues past the viewport.

use crate::domain::chart::EdgeSide;
use crate::domain::errors::{RenderError, RenderResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertices of a jagged edge anchored at `x`, spanning `top_y..=bottom_y`.
///
/// The left edge runs top to bottom with its teeth pointing left. The right
/// edge visits the same vertices bottom to top with its teeth pointing
/// right, so appending it to the left edge closes a well-formed polygon.
pub fn edge_path(
    x: f64,
    side: EdgeSide,
    top_y: f64,
    bottom_y: f64,
    tooth_size: f64,
) -> RenderResult<Vec<PathPoint>> {
    if !(x.is_finite() && top_y.is_finite() && bottom_y.is_finite()) {
        return Err(RenderError::NonFiniteGeometry("jagged edge anchor"));
    }
    if !(tooth_size.is_finite() && tooth_size > 0.0) {
        return Err(RenderError::NonFiniteGeometry("jagged edge tooth size"));
    }
    if top_y > bottom_y {
        return Err(RenderError::InvalidEdgeRange { top: top_y, bottom: bottom_y });
    }

    // (outward, y) pairs; outward is 0 on the anchor line and 1 on a tooth tip.
    let mut vertices = vec![(0.0, top_y)];
    let mut y = top_y;
    while y <= bottom_y {
        vertices.push((1.0, y + tooth_size));
        vertices.push((0.0, y + 2.0 * tooth_size));
        y += 2.0 * tooth_size;
    }

    let points = match side {
        EdgeSide::Left => vertices
            .into_iter()
            .map(|(out, y)| PathPoint { x: x - out * tooth_size, y })
            .collect(),
        EdgeSide::Right => vertices
            .into_iter()
            .rev()
            .map(|(out, y)| PathPoint { x: x + out * tooth_size, y })
            .collect(),
    };
    Ok(points)
}
