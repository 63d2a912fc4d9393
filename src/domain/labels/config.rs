//! Label generation settings and the stock value functions.

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

pub type RoundFn = Rc<dyn Fn(f64) -> f64>;
pub type FormatFn = Rc<dyn Fn(f64) -> String>;

/// Serializable part of the label configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    pub top_margin: f64,
    pub bottom_margin: f64,
    /// Pixels kept free above the topmost label.
    pub top_label_space: f64,
    pub min_spacing: f64,
    pub label_font: String,
    pub label_color: String,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            top_margin: 10.0,
            bottom_margin: 10.0,
            top_label_space: 10.0,
            min_spacing: 40.0,
            label_font: "12px sans-serif".to_string(),
            label_color: "#999999".to_string(),
        }
    }
}

/// Everything `LabelSet::create_labels` needs besides the view height and
/// the data maximum.
#[derive(Clone)]
pub struct LabelConfig {
    pub layout: LabelLayout,
    round_value: RoundFn,
    format_value: FormatFn,
}

impl LabelConfig {
    pub fn new(
        layout: LabelLayout,
        round_value: impl Fn(f64) -> f64 + 'static,
        format_value: impl Fn(f64) -> String + 'static,
    ) -> Self {
        Self {
            layout,
            round_value: Rc::new(round_value),
            format_value: Rc::new(format_value),
        }
    }

    /// Reads the layout from JSON; missing fields take their defaults.
    pub fn from_json(
        json: &str,
        round_value: impl Fn(f64) -> f64 + 'static,
        format_value: impl Fn(f64) -> String + 'static,
    ) -> Result<Self, serde_json::Error> {
        let layout: LabelLayout = serde_json::from_str(json)?;
        Ok(Self::new(layout, round_value, format_value))
    }

    pub fn round_value(&self, value: f64) -> f64 {
        (self.round_value)(value)
    }

    pub fn format_value(&self, value: f64) -> String {
        (self.format_value)(value)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::new(LabelLayout::default(), round_to_nice, format_compact)
    }
}

impl fmt::Debug for LabelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelConfig")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Rounds to the nearest multiple of `step`.
pub fn round_to_step(step: f64) -> impl Fn(f64) -> f64 + Clone {
    move |value| (value / step).round() * step
}

/// Rounds to the nearest 1, 2 or 5 times a power of ten.
pub fn round_to_nice(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return value;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Fixed number of decimals.
pub fn format_fixed(decimals: usize) -> impl Fn(f64) -> String + Clone {
    move |value| format!("{:.*}", decimals, value)
}

/// Short form with `k`/`M`/`B` suffixes, e.g. `1500 -> "1.5k"`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };
    let text = format!("{:.1}", scaled);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}
