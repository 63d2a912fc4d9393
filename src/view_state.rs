use std::rc::Rc;

use crate::domain::chart::ViewportRect;
use crate::domain::chunk_view::ChunkView;
use crate::domain::labels::LabelSet;

/// The in-flight part of a rescale animation.
#[derive(Clone)]
pub struct RescaleAnimation {
    /// Fraction done, in `[0, 1]`.
    pub progress: f64,
    /// Labels of the scale being faded out.
    pub start_y_labels: LabelSet,
    /// Chunk view that interpolates content between the two scales.
    pub animating_chunk_view: Rc<dyn ChunkView>,
}

/// Per-frame snapshot the drawer renders.
///
/// Geometry fields are expected to be mutually consistent; the drawer does
/// not re-derive them.
#[derive(Clone)]
pub struct ViewState {
    /// Visible window inside the full content.
    pub viewport: ViewportRect,
    /// Absolute pixel rectangle of the viewport.
    pub positive: ViewportRect,
    pub live_leftmost_label_width: f64,
    pub live_content_width: f64,
    /// Labels of the current (or target, while animating) scale.
    pub y_labels: LabelSet,
    pub chunk_view: Rc<dyn ChunkView>,
    pub animation: Option<RescaleAnimation>,
}

impl ViewState {
    pub fn new(positive: ViewportRect, y_labels: LabelSet, chunk_view: Rc<dyn ChunkView>) -> Self {
        Self {
            viewport: positive,
            positive,
            live_leftmost_label_width: y_labels.width(),
            live_content_width: chunk_view.inherent_width(),
            y_labels,
            chunk_view,
            animation: None,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportRect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_live_widths(mut self, leftmost_label_width: f64, content_width: f64) -> Self {
        self.live_leftmost_label_width = leftmost_label_width;
        self.live_content_width = content_width;
        self
    }

    pub fn with_animation(mut self, animation: RescaleAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Progress of the running animation, `1.0` when idle.
    pub fn animation_progress(&self) -> f64 {
        self.animation.as_ref().map_or(1.0, |a| a.progress)
    }

    /// The chunk view that draws this frame.
    pub fn active_chunk_view(&self) -> &Rc<dyn ChunkView> {
        match &self.animation {
            Some(animation) => &animation.animating_chunk_view,
            None => &self.chunk_view,
        }
    }
}
