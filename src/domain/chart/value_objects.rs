use derive_more::Display;

/// Value Object - side of the content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EdgeSide {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

/// Value Object - pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Value Object - a viewport rectangle.
///
/// Used both for the scrolled window inside the full content and for the
/// absolute ("positive") pixel rectangle of the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    pub viewport_x: f64,
    pub viewport_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl ViewportRect {
    pub fn new(
        viewport_x: f64,
        viewport_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self { viewport_x, viewport_y, viewport_width, viewport_height }
    }

    /// Height left for content once the vertical margins are taken out.
    pub fn usable_height(&self, top_margin: f64, bottom_margin: f64) -> f64 {
        self.viewport_height - (top_margin + bottom_margin)
    }
}

/// Value Object - horizontal extent of drawn content in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentRect {
    pub left: f64,
    pub width: f64,
}

impl ContentRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}
