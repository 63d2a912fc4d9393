#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ylcv_canvas::domain::canvas::DrawingContext;
use ylcv_canvas::domain::chart::{ContentRect, ViewportRect};
use ylcv_canvas::domain::labels::{LabelConfig, LabelLayout, LabelSet, format_fixed, round_to_step};
use ylcv_canvas::{ChunkView, RecordingContext, RenderResult, ViewState};

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 300.0;
pub const TOP_MARGIN: f64 = 10.0;
pub const BOTTOM_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ChunkCall {
    Draw {
        region_left: f64,
        region_width: f64,
        canvas_x: f64,
        y: f64,
        height: f64,
        max_value: f64,
    },
    Stretched { x: f64, y: f64, width: f64, height: f64, max_value: f64 },
}

/// Chunk view that only records how it was asked to draw.
pub struct StubChunk {
    pub left_offset: f64,
    pub right_offset: f64,
    pub inherent_width: f64,
    pub calls: RefCell<Vec<ChunkCall>>,
}

impl StubChunk {
    pub fn new(left_offset: f64, right_offset: f64, inherent_width: f64) -> Rc<Self> {
        Rc::new(Self { left_offset, right_offset, inherent_width, calls: RefCell::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<ChunkCall> {
        self.calls.borrow().clone()
    }
}

impl ChunkView for StubChunk {
    fn draw(
        &self,
        region_left: f64,
        region_width: f64,
        canvas_x: f64,
        y: f64,
        height: f64,
        max_value: f64,
        _ctx: &mut dyn DrawingContext,
    ) -> RenderResult<()> {
        self.calls.borrow_mut().push(ChunkCall::Draw {
            region_left,
            region_width,
            canvas_x,
            y,
            height,
            max_value,
        });
        Ok(())
    }

    fn draw_stretched(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        max_value: f64,
        _ctx: &mut dyn DrawingContext,
    ) -> RenderResult<ContentRect> {
        self.calls.borrow_mut().push(ChunkCall::Stretched { x, y, width, height, max_value });
        Ok(ContentRect::new(x, width))
    }

    fn left_offset(&self) -> f64 {
        self.left_offset
    }

    fn right_offset(&self) -> f64 {
        self.right_offset
    }

    fn inherent_width(&self) -> f64 {
        self.inherent_width
    }
}

/// Margins match the drawer's; five 20-unit steps fit into 270px for a
/// data max of 100.
pub fn label_config() -> LabelConfig {
    LabelConfig::new(
        LabelLayout {
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
            top_label_space: 0.0,
            min_spacing: 50.0,
            ..LabelLayout::default()
        },
        round_to_step(10.0),
        format_fixed(0),
    )
}

pub fn labels_for(data_max: f64) -> LabelSet {
    LabelSet::create_labels(&label_config(), VIEW_HEIGHT, data_max, &RecordingContext::new())
}

pub fn positive(viewport_x: f64) -> ViewportRect {
    ViewportRect::new(viewport_x, 0.0, VIEW_WIDTH, VIEW_HEIGHT)
}

pub fn state_with(chunk: Rc<StubChunk>, viewport_x: f64, data_max: f64) -> ViewState {
    ViewState::new(positive(viewport_x), labels_for(data_max), chunk)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
