use derive_more::Display;

use crate::domain::chart::EdgeSide;

/// Contract violations that abort the current frame.
///
/// Degenerate geometry (no usable height, empty label sets, content fully
/// off-screen) is never reported here; it just produces an empty frame.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderError {
    #[display(fmt = "Chunk view reported an invalid {} offset: {}", side, value)]
    InvalidChunkOffset { side: EdgeSide, value: f64 },
    #[display(fmt = "Jagged edge range is inverted: top {} > bottom {}", top, bottom)]
    InvalidEdgeRange { top: f64, bottom: f64 },
    #[display(fmt = "Non-finite geometry: {}", _0)]
    NonFiniteGeometry(&'static str),
    #[display(fmt = "Canvas Error: {}", _0)]
    Canvas(String),
}

impl std::error::Error for RenderError {}

pub type RenderResult<T> = Result<T, RenderError>;
