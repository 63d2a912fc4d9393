mod common;

use quickcheck_macros::quickcheck;
use ylcv_canvas::domain::canvas::DrawingContext;
use ylcv_canvas::domain::labels::{
    Label, LabelAttrs, LabelConfig, LabelLayout, LabelSet, format_compact, format_fixed,
    round_to_nice, round_to_step,
};
use ylcv_canvas::{DrawCommand, RecordingContext};

fn config(min_spacing: f64) -> LabelConfig {
    LabelConfig::new(
        LabelLayout { min_spacing, ..LabelLayout::default() },
        round_to_nice,
        format_compact,
    )
}

#[quickcheck]
fn label_count_follows_min_spacing(height: u16, spacing: u8, data_max: u32) -> bool {
    let spacing = 10.0 + spacing as f64 % 90.0;
    let height = height as f64 % 2000.0;
    let measurer = RecordingContext::new();
    let set = LabelSet::create_labels(&config(spacing), height, data_max as f64, &measurer);

    let usable = height - 20.0;
    if usable <= 0.0 {
        return set.is_empty() && set.max_value() == 0.0;
    }
    set.count() == (usable / spacing).floor() as usize + 1
}

#[quickcheck]
fn label_values_start_at_zero_and_increase(height: u16, data_max: u32) -> bool {
    let height = 60.0 + height as f64 % 2000.0;
    let measurer = RecordingContext::new();
    let set = LabelSet::create_labels(&config(40.0), height, data_max as f64, &measurer);
    let values: Vec<f64> = set.labels().iter().map(|l| l.value()).collect();

    values[0] == 0.0
        && values.windows(2).all(|w| w[0] < w[1])
        && values.last().copied() == Some(set.max_value())
}

#[quickcheck]
fn higher_values_map_higher_on_screen(height: u16, data_max: u32) -> bool {
    let height = 60.0 + height as f64 % 2000.0;
    let measurer = RecordingContext::new();
    let set = LabelSet::create_labels(&config(40.0), height, 1.0 + data_max as f64, &measurer);
    let ys: Vec<f64> = (0..set.count()).map(|i| set.y_for_label(i)).collect();

    ys[0] == set.bottom_y()
        && ys.windows(2).all(|w| w[0] > w[1])
        && (ys[ys.len() - 1] - set.top_y()).abs() < 1e-6
}

#[test]
fn round_steps_of_twenty() {
    let config = LabelConfig::new(
        LabelLayout {
            top_margin: 10.0,
            bottom_margin: 10.0,
            top_label_space: 10.0,
            min_spacing: 40.0,
            ..LabelLayout::default()
        },
        round_to_step(10.0),
        format_fixed(0),
    );
    // 180px usable, 4 steps; 75 * 18/17 / 4 = 19.85 rounds to 20
    let set = LabelSet::create_labels(&config, 200.0, 75.0, &RecordingContext::new());
    let texts: Vec<&str> = set.labels().iter().map(|l| l.text()).collect();

    insta::assert_snapshot!(texts.join(","), @"0,20,40,60,80");
    assert_eq!(set.max_value(), 80.0);
    assert_eq!(set.top_y(), 10.0);
    assert_eq!(set.bottom_y(), 190.0);
    assert_eq!(set.width(), 12.0);
}

#[test]
fn no_margins_divide_the_full_height() {
    let config = LabelConfig::new(
        LabelLayout {
            top_margin: 0.0,
            bottom_margin: 0.0,
            top_label_space: 0.0,
            min_spacing: 50.0,
            ..LabelLayout::default()
        },
        round_to_step(10.0),
        format_fixed(0),
    );
    // 90 / 4 = 22.5 rounds to 20
    let set = LabelSet::create_labels(&config, 200.0, 90.0, &RecordingContext::new());
    let values: Vec<f64> = set.labels().iter().map(|l| l.value()).collect();

    assert_eq!(values, [0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_eq!(set.max_value(), 80.0);
    assert_eq!(set.y_for_label(0), 200.0);
    assert_eq!(set.y_for_label(4), 0.0);
}

#[test]
fn label_draws_centered_text_at_its_opacity() {
    let mut ctx = RecordingContext::new();
    let label = Label::new(
        LabelAttrs {
            text: "120".to_string(),
            value: 120.0,
            opacity: 0.5,
            font: "12px sans-serif".to_string(),
            color: "#999999".to_string(),
            width: None,
        },
        &ctx,
    );
    assert_eq!(label.width(), 18.0);

    label.draw(&mut ctx, 9.0, 20.0).expect("recording never fails");
    assert_eq!(ctx.global_alpha(), 1.0);
    insta::assert_json_snapshot!(ctx.commands(), @r##"
    [
      {
        "op": "fill_text",
        "text": "120",
        "x": 9.0,
        "y": 20.0,
        "font": "12px sans-serif",
        "color": "#999999",
        "alpha": 0.5,
        "align": "center",
        "baseline": "middle"
      }
    ]
    "##);
}

#[test]
fn gutter_width_is_widest_label() {
    let set = common::labels_for(100.0);
    // "100" at 6px per char
    assert_eq!(set.width(), 18.0);
}

fn drawn_texts(set: &LabelSet) -> Vec<(String, f64, f64)> {
    let mut ctx = RecordingContext::new();
    set.draw(&mut ctx, 0.0).expect("recording never fails");
    ctx.visible_texts()
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::FillText { text, y, alpha, .. } => Some((text.clone(), *y, *alpha)),
            _ => None,
        })
        .collect()
}

#[test]
fn transition_endpoints_match_the_sets() {
    let start = common::labels_for(100.0);
    let end = common::labels_for(200.0);

    assert_eq!(drawn_texts(&start.transition_frame(&end, 0.0)), drawn_texts(&start));
    assert_eq!(drawn_texts(&start.transition_frame(&end, 1.0)), drawn_texts(&end));
}

#[test]
fn transition_midpoint_fades_both_sets() {
    let start = common::labels_for(100.0);
    let end = common::labels_for(200.0);
    let frame = start.transition_frame(&end, 0.5);

    assert_eq!(frame.count(), start.count() + end.count());
    assert_eq!(frame.max_value(), 150.0);
    assert!(frame.labels().iter().all(|l| l.opacity() == 0.5));
}

#[test]
fn zero_spacing_from_json_gives_no_labels() {
    let json = r#"{"min_spacing": 0.0}"#;
    let config = LabelConfig::from_json(json, round_to_step(10.0), format_fixed(0))
        .expect("valid layout");
    let set = LabelSet::create_labels(&config, 200.0, 90.0, &RecordingContext::new());

    assert!(set.is_empty());
    assert_eq!(set.max_value(), 0.0);
}

#[test]
fn layout_reads_from_json() {
    let json = r#"{"min_spacing": 25.0}"#;
    let config = LabelConfig::from_json(json, round_to_step(5.0), format_fixed(1))
        .expect("valid layout");
    assert_eq!(config.layout.min_spacing, 25.0);
    assert_eq!(config.layout.top_margin, 10.0);
    assert_eq!(config.format_value(2.0), "2.0");
}
