use std::str::FromStr;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::canvas::{
    CompositeOperation, DrawingContext, TextAlign, TextBaseline, TextMeasurer,
};
use crate::domain::chart::SurfaceSize;
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::drawer::Drawer;
use crate::infrastructure::rendering::theme::DrawerTheme;
use crate::view_state::ViewState;
use crate::{log_debug, log_warn};

fn js_error(context: &str, err: JsValue) -> RenderError {
    RenderError::Canvas(format!("{}: {:?}", context, err))
}

/// Canvas 2D backend - draws frames into an `HtmlCanvasElement`
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    theme: DrawerTheme,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> RenderResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| js_error("Failed to get 2D context", e))?
            .ok_or_else(|| RenderError::Canvas("Canvas has no 2D context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| js_error("Failed to cast to 2D context", e.into()))?;

        Ok(Self { canvas, context, theme: DrawerTheme::default() })
    }

    pub fn with_theme(mut self, theme: DrawerTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Update canvas dimensions
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Render one frame of `state`.
    pub fn render_frame(
        &mut self,
        state: &ViewState,
        top_margin: f64,
        bottom_margin: f64,
    ) -> RenderResult<()> {
        let surface = self.surface_size();
        let theme = self.theme.clone();
        let result = Drawer::new(top_margin, bottom_margin, surface, self, state)
            .with_theme(theme)
            .draw();

        match &result {
            Ok(()) => {
                log_debug!(
                    LogComponent::Infrastructure("CanvasRenderer"),
                    "Frame drawn on {}x{} canvas",
                    surface.width,
                    surface.height
                );
            }
            Err(err) => {
                log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "Frame dropped: {}", err);
            }
        }
        result
    }
}

impl TextMeasurer for CanvasRenderer {
    fn measure_text(&self, text: &str, font: &str) -> f64 {
        let old_font = self.context.font();
        self.context.set_font(font);
        let width = self.context.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
        self.context.set_font(&old_font);
        width
    }
}

impl DrawingContext for CanvasRenderer {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rect(x, y, width, height);
    }

    fn clip(&mut self) {
        self.context.clip();
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.context.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.context.set_shadow_color(color);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.context.set_shadow_blur(blur);
    }

    fn global_alpha(&self) -> f64 {
        self.context.global_alpha()
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn composite_operation(&self) -> CompositeOperation {
        self.context
            .global_composite_operation()
            .ok()
            .and_then(|op| CompositeOperation::from_str(&op).ok())
            .unwrap_or_default()
    }

    fn set_composite_operation(&mut self, op: CompositeOperation) -> RenderResult<()> {
        self.context
            .set_global_composite_operation(op.as_ref())
            .map_err(|e| js_error("Failed to set composite operation", e))
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.as_ref());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context.set_text_baseline(baseline.as_ref());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderResult<()> {
        self.context
            .fill_text(text, x, y)
            .map_err(|e| js_error("Failed to draw text", e))
    }
}
