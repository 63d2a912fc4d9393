//! A [`DrawingContext`] that records instead of rasterizing.
//!
//! Every drawing call becomes a [`DrawCommand`] carrying the state it was
//! issued under, so frames can be inspected, compared and snapshotted on any
//! target.

use serde::Serialize;

use crate::domain::canvas::{
    CompositeOperation, DrawingContext, TextAlign, TextBaseline, TextMeasurer,
};
use crate::domain::errors::RenderResult;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: f64,
    pub shadow_color: String,
    pub shadow_blur: f64,
    pub global_alpha: f64,
    pub composite: CompositeOperation,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    /// Number of clips applied since the matching `save`.
    pub clip_depth: usize,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
            shadow_color: "rgba(0, 0, 0, 0)".to_string(),
            shadow_blur: 0.0,
            global_alpha: 1.0,
            composite: CompositeOperation::SourceOver,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
            clip_depth: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    Save,
    Restore,
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Clip,
    Fill { color: String, alpha: f64, composite: CompositeOperation },
    Stroke { color: String, line_width: f64, alpha: f64, composite: CompositeOperation },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: String,
        color: String,
        alpha: f64,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    state: DrawState,
    stack: Vec<DrawState>,
    char_width: f64,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::with_char_width(6.0)
    }

    /// Text is measured as `char_width` pixels per character.
    pub fn with_char_width(char_width: f64) -> Self {
        Self {
            commands: Vec::new(),
            state: DrawState::default(),
            stack: Vec::new(),
            char_width,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Number of `save` calls not yet restored.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Text draws that would leave a visible mark.
    pub fn visible_texts(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillText { alpha, .. } if *alpha > 0.0))
            .collect()
    }

    pub fn strokes(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .collect()
    }
}

impl TextMeasurer for RecordingContext {
    fn measure_text(&self, text: &str, _font: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

impl DrawingContext for RecordingContext {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.state.clip_depth = 0;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restores are ignored, as on a real canvas.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }

    fn clip(&mut self) {
        self.state.clip_depth += 1;
        self.commands.push(DrawCommand::Clip);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill {
            color: self.state.fill_style.clone(),
            alpha: self.state.global_alpha,
            composite: self.state.composite,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke {
            color: self.state.stroke_style.clone(),
            line_width: self.state.line_width,
            alpha: self.state.global_alpha,
            composite: self.state.composite,
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.state.shadow_color = color.to_string();
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow_blur = blur;
    }

    fn global_alpha(&self) -> f64 {
        self.state.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.global_alpha = alpha;
    }

    fn composite_operation(&self) -> CompositeOperation {
        self.state.composite
    }

    fn set_composite_operation(&mut self, op: CompositeOperation) -> RenderResult<()> {
        self.state.composite = op;
        Ok(())
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderResult<()> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: self.state.font.clone(),
            color: self.state.fill_style.clone(),
            alpha: self.state.global_alpha,
            align: self.state.text_align,
            baseline: self.state.text_baseline,
        });
        Ok(())
    }
}
