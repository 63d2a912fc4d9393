use std::rc::Rc;

use crate::domain::canvas::TextMeasurer;
use crate::domain::chart::ViewportRect;
use crate::domain::chunk_view::ChunkView;
use crate::domain::labels::{LabelConfig, LabelSet};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::view_state::{RescaleAnimation, ViewState};

pub const DEFAULT_RESCALE_DURATION_MS: f64 = 300.0;

#[derive(Debug, Clone)]
struct ActiveRescale {
    start: LabelSet,
    elapsed_ms: f64,
}

/// Decides when the y-axis scale changes and drives the cross-fade.
///
/// Labels are regenerated on every [`update`](Self::update); a rescale
/// animation only starts when the regenerated set differs from the current
/// one. Frames advance it with [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct RescaleCoordinator {
    config: LabelConfig,
    duration_ms: f64,
    labels: Option<LabelSet>,
    active: Option<ActiveRescale>,
}

impl RescaleCoordinator {
    pub fn new(config: LabelConfig) -> Self {
        Self::with_duration(config, DEFAULT_RESCALE_DURATION_MS)
    }

    pub fn with_duration(config: LabelConfig, duration_ms: f64) -> Self {
        Self { config, duration_ms: duration_ms.max(0.0), labels: None, active: None }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Current labels, or the target labels while animating.
    pub fn labels(&self) -> Option<&LabelSet> {
        self.labels.as_ref()
    }

    pub fn start_labels(&self) -> Option<&LabelSet> {
        self.active.as_ref().map(|a| &a.start)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Eased progress of the running animation.
    pub fn progress(&self) -> Option<f64> {
        self.active.as_ref().map(|a| {
            if self.duration_ms <= 0.0 {
                1.0
            } else {
                ease_in_out((a.elapsed_ms / self.duration_ms).clamp(0.0, 1.0))
            }
        })
    }

    /// Regenerates the labels for a new view height or data maximum.
    /// Returns `true` when this started a rescale animation.
    pub fn update(&mut self, view_height: f64, data_max: f64, measurer: &dyn TextMeasurer) -> bool {
        let next = LabelSet::create_labels(&self.config, view_height, data_max, measurer);
        match self.labels.take() {
            Some(current) if current == next => {
                self.labels = Some(current);
                false
            }
            Some(current) => {
                log_debug!(
                    LogComponent::Application("Rescale"),
                    "Rescaling y-axis from {} to {}",
                    current.max_value(),
                    next.max_value()
                );
                self.labels = Some(next);
                if self.duration_ms <= 0.0 {
                    self.active = None;
                    return false;
                }
                self.active = Some(ActiveRescale { start: current, elapsed_ms: 0.0 });
                true
            }
            None => {
                self.labels = Some(next);
                false
            }
        }
    }

    /// Moves the animation forward. Returns `true` while it still runs.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.elapsed_ms += delta_ms.max(0.0);
        if active.elapsed_ms >= self.duration_ms {
            self.active = None;
            log_debug!(LogComponent::Application("Rescale"), "Rescale animation finished");
            return false;
        }
        true
    }

    /// Assembles the frame input. `animating_chunk_view` is used while a
    /// rescale runs and falls back to `chunk_view`.
    pub fn view_state(
        &self,
        positive: ViewportRect,
        chunk_view: Rc<dyn ChunkView>,
        animating_chunk_view: Option<Rc<dyn ChunkView>>,
    ) -> ViewState {
        let labels = self.labels.clone().unwrap_or_default();
        let state = ViewState::new(positive, labels, Rc::clone(&chunk_view));
        match (&self.active, self.progress()) {
            (Some(active), Some(progress)) => state.with_animation(RescaleAnimation {
                progress,
                start_y_labels: active.start.clone(),
                animating_chunk_view: animating_chunk_view.unwrap_or(chunk_view),
            }),
            _ => state,
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
