use std::rc::Rc;

use crate::domain::canvas::{CompositeOperation, DrawingContext};
use crate::domain::chart::{ContentRect, EdgeSide, SurfaceSize};
use crate::domain::chunk_view::ChunkView;
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::labels::LabelSet;
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, get_logger};
use crate::infrastructure::rendering::jagged_edge::edge_path;
use crate::infrastructure::rendering::placement::{
    Placement, PlacementInput, label_offset, validate_offset,
};
use crate::infrastructure::rendering::theme::DrawerTheme;
use crate::view_state::ViewState;
use crate::{log_debug, log_error, log_trace};

/// Presents one [`ViewState`] on a 2D drawing context.
///
/// Built fresh for every frame. The gutter width, the max value content is
/// scaled to and the chunk view to draw are resolved at construction; while
/// a rescale animation runs the first two are interpolated between the start
/// and target label sets.
pub struct Drawer<'a> {
    top_margin: f64,
    bottom_margin: f64,
    surface: SurfaceSize,
    ctx: &'a mut dyn DrawingContext,
    state: &'a ViewState,
    theme: DrawerTheme,
    y_label_width: f64,
    max_value: f64,
    chunk_view: Rc<dyn ChunkView>,
}

impl<'a> Drawer<'a> {
    pub fn new(
        top_margin: f64,
        bottom_margin: f64,
        surface: SurfaceSize,
        ctx: &'a mut dyn DrawingContext,
        state: &'a ViewState,
    ) -> Self {
        let (y_label_width, max_value) = match &state.animation {
            Some(animation) => {
                let p = animation.progress;
                (
                    (1.0 - p) * animation.start_y_labels.width() + p * state.y_labels.width(),
                    (1.0 - p) * animation.start_y_labels.max_value()
                        + p * state.y_labels.max_value(),
                )
            }
            None => (state.y_labels.width(), state.y_labels.max_value()),
        };

        Self {
            top_margin,
            bottom_margin,
            surface,
            ctx,
            state,
            theme: DrawerTheme::default(),
            y_label_width,
            max_value,
            chunk_view: Rc::clone(state.active_chunk_view()),
        }
    }

    pub fn with_theme(mut self, theme: DrawerTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn y_label_width(&self) -> f64 {
        self.y_label_width
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Renders the frame. On error the context is left with balanced
    /// save/restore calls and the frame should be considered not drawn.
    pub fn draw(&mut self) -> RenderResult<()> {
        if !(self.max_value.is_finite() && self.y_label_width.is_finite()) {
            log_error!(
                LogComponent::Infrastructure("Drawer"),
                "Refusing frame with max value {} and gutter width {}",
                self.max_value,
                self.y_label_width
            );
            return Err(RenderError::NonFiniteGeometry("label scale"));
        }

        self.ctx.clear_rect(0.0, 0.0, self.surface.width, self.surface.height);

        self.ctx.save();
        self.clip_away_y_labels();
        let content = self.draw_chunk_view().and_then(|region| {
            if let Some(rect) = region {
                self.draw_edges_and_lines(rect)?;
            }
            Ok(region)
        });
        self.ctx.restore();

        if let Some(rect) = content? {
            self.draw_y_axis_labels(rect)?;
        }
        Ok(())
    }

    fn clip_away_y_labels(&mut self) {
        let positive = &self.state.positive;
        self.ctx.begin_path();
        self.ctx.rect(
            self.y_label_width,
            0.0,
            positive.viewport_width - self.y_label_width,
            positive.viewport_height,
        );
        self.ctx.clip();
        self.ctx.close_path();
    }

    fn draw_chunk_view(&mut self) -> RenderResult<Option<ContentRect>> {
        let chunk_view = Rc::clone(&self.chunk_view);
        let left_offset = self.checked_offset(EdgeSide::Left, chunk_view.left_offset())?;
        self.checked_offset(EdgeSide::Right, chunk_view.right_offset())?;

        let state = self.state;
        let height = state.positive.usable_height(self.top_margin, self.bottom_margin);
        let y = self.top_margin;

        let placement = Placement::resolve(&PlacementInput {
            viewport_x: state.positive.viewport_x,
            viewport_width: state.positive.viewport_width,
            live_leftmost_label_width: state.live_leftmost_label_width,
            live_content_width: state.live_content_width,
            left_offset,
            inherent_width: chunk_view.inherent_width(),
            tooth_size: self.theme.edge.tooth_size,
            line_width: self.theme.edge.line_width,
        });
        log_trace!(LogComponent::Infrastructure("Drawer"), "Chunk placement: {:?}", placement);

        match placement {
            Placement::Stretched { x, width } => {
                let rect = chunk_view.draw_stretched(
                    x,
                    y,
                    width,
                    height,
                    self.max_value,
                    &mut *self.ctx,
                )?;
                Ok(Some(rect))
            }
            Placement::Visible { region_left, region_width, canvas_x } => {
                chunk_view.draw(
                    region_left,
                    region_width,
                    canvas_x,
                    y,
                    height,
                    self.max_value,
                    &mut *self.ctx,
                )?;
                Ok(Some(ContentRect::new(canvas_x, region_width)))
            }
            Placement::Emulated(rect) => Ok(Some(rect)),
            Placement::OffScreen => {
                log_debug!(
                    LogComponent::Infrastructure("Drawer"),
                    "Chunk is off-screen, skipping content"
                );
                Ok(None)
            }
        }
    }

    fn checked_offset(&self, side: EdgeSide, value: f64) -> RenderResult<f64> {
        validate_offset(side, value).inspect_err(|err| {
            get_logger().log(LogEntry::new_with_metadata(
                LogLevel::Error,
                LogComponent::Infrastructure("Drawer"),
                &err.to_string(),
                &format!("side={} value={}", side, value),
            ));
        })
    }

    fn draw_edges_and_lines(&mut self, content: ContentRect) -> RenderResult<()> {
        let edge = self.theme.edge.clone();
        let viewport_width = self.state.positive.viewport_width;

        let left_x = if self.chunk_view.left_offset() > 0.0 {
            content.left
        } else {
            -edge.line_width
        };

        let mut right_x = viewport_width + edge.line_width;
        if self.chunk_view.right_offset() > 0.0
            && content.right() < viewport_width - edge.line_width
        {
            right_x = content.right();
        }

        let top_y = -edge.tooth_size;
        let bottom_y = self.state.positive.viewport_height + edge.line_width;
        let left = edge_path(left_x, EdgeSide::Left, top_y, bottom_y, edge.tooth_size)?;
        let right = edge_path(right_x, EdgeSide::Right, top_y, bottom_y, edge.tooth_size)?;

        self.ctx.save();

        self.ctx.set_line_width(edge.line_width);
        self.ctx.set_stroke_style(&edge.color);
        self.ctx.begin_path();
        let mut points = left.iter().chain(right.iter());
        if let Some(first) = points.next() {
            self.ctx.move_to(first.x, first.y);
        }
        for point in points {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.close_path();
        self.ctx.stroke();
        self.ctx.clip();

        let state = self.state;
        let result = match &state.animation {
            Some(animation) => self
                .draw_horizontal_lines(&animation.start_y_labels, 1.0 - animation.progress)
                .and_then(|_| self.draw_horizontal_lines(&state.y_labels, animation.progress)),
            None => self.draw_horizontal_lines(&state.y_labels, 1.0),
        };

        self.ctx.restore();
        result
    }

    /// Gridlines behind already drawn content, one per label.
    fn draw_horizontal_lines(&mut self, labels: &LabelSet, opacity: f64) -> RenderResult<()> {
        if labels.is_empty() {
            return Ok(());
        }

        let positive = self.state.positive;
        let max_height = positive.usable_height(self.top_margin, self.bottom_margin);
        let height = max_height * self.scale_ratio(labels.max_value());
        let bottom_y = positive.viewport_height - self.bottom_margin;

        let old_alpha = self.ctx.global_alpha();
        let old_composite = self.ctx.composite_operation();
        self.ctx.set_global_alpha(opacity);
        self.ctx.set_composite_operation(CompositeOperation::DestinationOver)?;

        self.ctx.set_stroke_style(&self.theme.grid.color);
        self.ctx.set_line_width(self.theme.grid.line_width);

        self.ctx.begin_path();
        for i in 0..labels.count() {
            let y = labels.y_for_label_in(i, bottom_y - height, bottom_y).round();
            self.ctx.move_to(0.0, y);
            self.ctx.line_to(positive.viewport_width, y);
        }
        self.ctx.stroke();
        self.ctx.close_path();

        self.ctx.set_global_alpha(old_alpha);
        self.ctx.set_composite_operation(old_composite)
    }

    fn draw_y_axis_labels(&mut self, content: ContentRect) -> RenderResult<()> {
        let state = self.state;
        let positive = state.positive;
        let offset = label_offset(
            content,
            self.y_label_width,
            positive.viewport_width,
            self.theme.edge.tolerance(),
        );

        let max_height = positive.usable_height(self.top_margin, self.bottom_margin);
        let bottom = positive.viewport_height - self.bottom_margin;

        self.ctx.save();
        let result = match &state.animation {
            Some(animation) => {
                let progress = animation.progress;
                let new_height = max_height * self.scale_ratio(state.y_labels.max_value());
                let old_height =
                    max_height * self.scale_ratio(animation.start_y_labels.max_value());

                self.ctx.set_global_alpha(progress);
                state
                    .y_labels
                    .draw_in_range(&mut *self.ctx, -offset, bottom - new_height, bottom)
                    .and_then(|_| {
                        self.ctx.set_global_alpha(1.0 - progress);
                        animation
                            .start_y_labels
                            .draw_in_range(&mut *self.ctx, -offset, bottom - old_height, bottom)
                    })
            }
            None => state.y_labels.draw_in_range(
                &mut *self.ctx,
                -offset,
                bottom - max_height,
                bottom,
            ),
        };
        self.ctx.restore();
        result
    }

    /// A label set's height relative to the interpolated scale.
    fn scale_ratio(&self, max_value: f64) -> f64 {
        if self.max_value > 0.0 {
            max_value / self.max_value
        } else {
            1.0
        }
    }
}
