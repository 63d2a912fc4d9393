mod common;

use std::rc::Rc;

use common::*;
use ylcv_canvas::domain::chart::SurfaceSize;
use ylcv_canvas::{ChunkView, DrawCommand, Drawer, RecordingContext, RescaleCoordinator};

#[test]
fn rescale_runs_from_update_to_settled_frame() {
    let measurer = RecordingContext::new();
    let surface = SurfaceSize::new(VIEW_WIDTH, VIEW_HEIGHT);
    let mut rescale = RescaleCoordinator::with_duration(label_config(), 200.0);
    let settled = StubChunk::new(0.0, 0.0, 350.0);
    let animating = StubChunk::new(0.0, 0.0, 350.0);
    let animating_view: Rc<dyn ChunkView> = animating.clone();

    assert!(!rescale.update(VIEW_HEIGHT, 100.0, &measurer));
    assert!(rescale.update(VIEW_HEIGHT, 200.0, &measurer));
    assert!(rescale.advance(100.0));

    let state = rescale.view_state(
        positive(0.0),
        settled.clone(),
        Some(Rc::clone(&animating_view)),
    );
    assert_eq!(state.animation_progress(), 0.5);
    assert_eq!(state.y_labels.max_value(), 200.0);

    let mut ctx = RecordingContext::new();
    Drawer::new(TOP_MARGIN, BOTTOM_MARGIN, surface, &mut ctx, &state)
        .draw()
        .expect("frame draws");
    assert_eq!(animating.calls().len(), 1);
    assert!(settled.calls().is_empty());
    assert_eq!(ctx.visible_texts().len(), 12);

    assert!(!rescale.advance(100.0));
    let state = rescale.view_state(positive(0.0), settled.clone(), Some(animating_view));
    assert!(!state.is_animating());

    let mut ctx = RecordingContext::new();
    Drawer::new(TOP_MARGIN, BOTTOM_MARGIN, surface, &mut ctx, &state)
        .draw()
        .expect("frame draws");
    assert_eq!(settled.calls().len(), 1);
    let texts: Vec<&str> = ctx
        .visible_texts()
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["0", "40", "80", "120", "160", "200"]);
}

#[test]
fn idle_coordinator_builds_a_plain_state() {
    let rescale = RescaleCoordinator::new(label_config());
    let chunk = StubChunk::new(0.0, 0.0, 350.0);
    let state = rescale.view_state(positive(0.0), chunk, None);

    assert!(!state.is_animating());
    assert!(state.y_labels.is_empty());
}
