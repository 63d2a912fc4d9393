use crate::domain::canvas::{DrawingContext, TextAlign, TextBaseline, TextMeasurer};
use crate::domain::errors::RenderResult;

/// Attributes a [`Label`] is built from. A missing `width` is measured from
/// `text` and `font`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAttrs {
    pub text: String,
    pub value: f64,
    pub opacity: f64,
    pub font: String,
    pub color: String,
    pub width: Option<f64>,
}

/// One y-axis label. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    value: f64,
    opacity: f64,
    font: String,
    color: String,
    width: f64,
}

impl Label {
    pub fn new(attrs: LabelAttrs, measurer: &dyn TextMeasurer) -> Self {
        let width = match attrs.width {
            Some(width) => width,
            None => measurer.measure_text(&attrs.text, &attrs.font),
        };
        Self {
            text: attrs.text,
            value: attrs.value,
            opacity: attrs.opacity,
            font: attrs.font,
            color: attrs.color,
            width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn copy_with_opacity(&self, opacity: f64) -> Self {
        Self { opacity, ..self.clone() }
    }

    /// Draws the label centered on `(x, y)`.
    pub fn draw(&self, ctx: &mut dyn DrawingContext, x: f64, y: f64) -> RenderResult<()> {
        ctx.set_text_baseline(TextBaseline::Middle);
        ctx.set_text_align(TextAlign::Center);
        ctx.set_font(&self.font);
        ctx.set_fill_style(&self.color);

        let old_alpha = ctx.global_alpha();
        ctx.set_global_alpha(old_alpha * self.opacity);
        let result = ctx.fill_text(&self.text, x, y);
        ctx.set_global_alpha(old_alpha);
        result
    }
}
