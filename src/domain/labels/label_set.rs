use crate::domain::canvas::{DrawingContext, TextMeasurer};
use crate::domain::errors::RenderResult;
use crate::domain::labels::config::LabelConfig;
use crate::domain::labels::label::{Label, LabelAttrs};
use crate::domain::logging::LogComponent;
use crate::{log_trace, log_warn};

/// The y-axis labels for one scale.
///
/// Labels are kept in ascending value order. `top_y`/`bottom_y` bound the
/// vertical pixel range `max_value` and `0` map to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSet {
    labels: Vec<Label>,
    max_value: f64,
    top_y: f64,
    bottom_y: f64,
}

impl LabelSet {
    pub fn new(labels: Vec<Label>, max_value: f64, top_y: f64, bottom_y: f64) -> Self {
        Self { labels, max_value, top_y, bottom_y }
    }

    /// Lays out evenly spaced, round-valued labels for a view of
    /// `view_height` pixels showing values up to `data_max`.
    pub fn create_labels(
        config: &LabelConfig,
        view_height: f64,
        data_max: f64,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let layout = &config.layout;
        let usable_height = view_height - (layout.top_margin + layout.bottom_margin);
        if !usable_height.is_finite() || usable_height <= 0.0 {
            return Self::default();
        }
        if !(layout.min_spacing.is_finite() && layout.min_spacing > 0.0) {
            log_warn!(
                LogComponent::Domain("LabelSet"),
                "Ignoring label layout with min spacing {}",
                layout.min_spacing
            );
            return Self::default();
        }

        // Leave headroom so the top label never reaches the reserved space.
        let fraction_over_max = layout.top_label_space / usable_height;
        let real_max = if fraction_over_max < 1.0 {
            data_max / (1.0 - fraction_over_max)
        } else {
            data_max
        };
        let count = (usable_height / layout.min_spacing).floor().max(0.0) as usize;

        let division = if count == 0 {
            0.0
        } else {
            let rounded = config.round_value(real_max / count as f64);
            if rounded.is_finite() && rounded > 0.0 { rounded } else { 1.0 }
        };

        let labels = (0..=count)
            .map(|i| {
                let value = division * i as f64;
                Label::new(
                    LabelAttrs {
                        text: config.format_value(value),
                        value,
                        opacity: 1.0,
                        font: layout.label_font.clone(),
                        color: layout.label_color.clone(),
                        width: None,
                    },
                    measurer,
                )
            })
            .collect::<Vec<_>>();

        log_trace!(
            LogComponent::Domain("LabelSet"),
            "{} labels, division {} (data max {}, usable height {})",
            labels.len(),
            division,
            data_max,
            usable_height
        );

        Self::new(
            labels,
            division * count as f64,
            layout.top_margin,
            view_height - layout.bottom_margin,
        )
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn top_y(&self) -> f64 {
        self.top_y
    }

    pub fn bottom_y(&self) -> f64 {
        self.bottom_y
    }

    /// Widest label, which is the width the gutter needs.
    pub fn width(&self) -> f64 {
        self.labels.iter().map(Label::width).fold(0.0, f64::max)
    }

    pub fn opacity_for_label(&self, index: usize) -> f64 {
        self.labels[index].opacity()
    }

    pub fn y_for_label(&self, index: usize) -> f64 {
        self.y_for_label_in(index, self.top_y, self.bottom_y)
    }

    /// Like [`y_for_label`](Self::y_for_label) but mapping onto another
    /// vertical range.
    pub fn y_for_label_in(&self, index: usize, top_y: f64, bottom_y: f64) -> f64 {
        self.y_for_value_in(self.labels[index].value(), top_y, bottom_y)
    }

    pub fn y_for_value_in(&self, value: f64, top_y: f64, bottom_y: f64) -> f64 {
        if self.max_value <= 0.0 {
            return bottom_y;
        }
        bottom_y - (value / self.max_value) * (bottom_y - top_y)
    }

    pub fn draw(&self, ctx: &mut dyn DrawingContext, x: f64) -> RenderResult<()> {
        self.draw_in_range(ctx, x, self.top_y, self.bottom_y)
    }

    /// Draws every label centered in a column of [`width`](Self::width)
    /// pixels starting at `x`, with `max_value` at `top_y`.
    pub fn draw_in_range(
        &self,
        ctx: &mut dyn DrawingContext,
        x: f64,
        top_y: f64,
        bottom_y: f64,
    ) -> RenderResult<()> {
        let center_x = x + self.width() / 2.0;
        for (i, label) in self.labels.iter().enumerate() {
            let y = self.y_for_label_in(i, top_y, bottom_y);
            label.draw(ctx, center_x, y)?;
        }
        Ok(())
    }

    /// A transient set for one frame of a cross-fade towards `end`.
    ///
    /// Geometry is interpolated; labels of both sets are kept with their
    /// opacities scaled by the remaining and elapsed fractions.
    pub fn transition_frame(&self, end: &LabelSet, fraction_done: f64) -> LabelSet {
        let lerp = |from: f64, to: f64| fraction_done * to + (1.0 - fraction_done) * from;

        let labels = self
            .labels
            .iter()
            .map(|label| label.copy_with_opacity(label.opacity() * (1.0 - fraction_done)))
            .chain(
                end.labels
                    .iter()
                    .map(|label| label.copy_with_opacity(label.opacity() * fraction_done)),
            )
            .collect();

        LabelSet::new(
            labels,
            lerp(self.max_value, end.max_value),
            lerp(self.top_y, end.top_y),
            lerp(self.bottom_y, end.bottom_y),
        )
    }
}
