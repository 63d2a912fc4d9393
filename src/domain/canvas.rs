//! The 2D drawing capability the renderer draws through.
//!
//! Modelled on the browser `CanvasRenderingContext2d`: path construction,
//! fill/stroke, shadow, global alpha, compositing, save/restore, clipping and
//! text. Backends live in `infrastructure::rendering`.

use serde::Serialize;
use strum::{AsRefStr, EnumString};

use crate::domain::errors::RenderResult;

/// Canvas `globalCompositeOperation` values used by the renderer and its
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOperation {
    #[default]
    #[strum(serialize = "source-over")]
    SourceOver,
    #[strum(serialize = "destination-over")]
    DestinationOver,
    #[strum(serialize = "source-atop")]
    SourceAtop,
    #[strum(serialize = "destination-out")]
    DestinationOut,
    #[strum(serialize = "copy")]
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "center")]
    Center,
    #[strum(serialize = "right")]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBaseline {
    #[default]
    #[strum(serialize = "alphabetic")]
    Alphabetic,
    #[strum(serialize = "top")]
    Top,
    #[strum(serialize = "middle")]
    Middle,
    #[strum(serialize = "bottom")]
    Bottom,
}

/// Measures rendered text width in pixels.
///
/// Injected wherever a label needs its width, so no process-wide measuring
/// surface exists.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font: &str) -> f64;
}

/// Immediate-mode 2D drawing context.
pub trait DrawingContext: TextMeasurer {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Intersects the clip region with the current path.
    fn clip(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow_color(&mut self, color: &str);
    fn set_shadow_blur(&mut self, blur: f64);

    fn global_alpha(&self) -> f64;
    fn set_global_alpha(&mut self, alpha: f64);
    fn composite_operation(&self) -> CompositeOperation;
    fn set_composite_operation(&mut self, op: CompositeOperation) -> RenderResult<()>;

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> RenderResult<()>;
}
