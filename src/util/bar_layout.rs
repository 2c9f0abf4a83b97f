//! Proportional bar layout for the chart component.
//!
//! DESIGN
//! ======
//! The component never does arithmetic in the view. It hands the samples and
//! a [`ChartConfig`] to [`layout_bars`] and renders the resulting
//! [`ChartLayout`] as-is. Bars are keyed by their position in the input, so
//! repeated labels stay distinct.

#[cfg(test)]
#[path = "bar_layout_test.rs"]
mod bar_layout_test;

use serde::{Deserialize, Serialize};

use crate::util::samples::Sample;

pub const DEFAULT_MAX_BAR_HEIGHT: f64 = 150.0;
pub const DEFAULT_BAR_WIDTH: f64 = 40.0;
pub const DEFAULT_BAR_GAP: f64 = 16.0;

/// Sizing knobs for the chart, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Height of the bar holding the largest value.
    pub max_bar_height: f64,
    pub bar_width: f64,
    pub bar_gap: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_bar_height: DEFAULT_MAX_BAR_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_gap: DEFAULT_BAR_GAP,
        }
    }
}

impl ChartConfig {
    /// Replace negative or non-finite dimensions with zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            max_bar_height: non_negative(self.max_bar_height),
            bar_width: non_negative(self.bar_width),
            bar_gap: non_negative(self.bar_gap),
        }
    }
}

/// One positioned bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarView {
    /// Index of the source sample; stable list identity.
    pub key: usize,
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub height: f64,
}

/// Immutable view model consumed by the chart component.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<BarView>,
    pub max_value: f64,
    /// Samples whose value was NaN, infinite or negative and drew as zero.
    pub ignored_values: usize,
    pub config: ChartConfig,
}

impl ChartLayout {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Width of the bar row including gaps.
    #[allow(clippy::cast_precision_loss)]
    pub fn content_width(&self) -> f64 {
        if self.bars.is_empty() {
            return 0.0;
        }
        let count = self.bars.len() as f64;
        count * self.config.bar_width + (count - 1.0) * self.config.bar_gap
    }
}

/// Compute bar heights for `samples`.
///
/// Heights scale linearly so the largest value reaches
/// `config.max_bar_height`. When every value is zero (or the input is empty)
/// all bars sit at zero height.
pub fn layout_bars(samples: &[Sample], config: &ChartConfig) -> ChartLayout {
    let config = config.sanitized();
    let max = max_value(samples);
    let bars = samples
        .iter()
        .enumerate()
        .map(|(key, sample)| BarView {
            key,
            label: sample.label.clone(),
            value: sample.value,
            value_label: format_value(sample.value),
            height: bar_height(sample.value, max, config.max_bar_height),
        })
        .collect();

    ChartLayout {
        bars,
        max_value: max,
        ignored_values: samples.iter().filter(|s| !s.is_valid()).count(),
        config,
    }
}

/// Largest drawable value, or `0.0` for an empty sequence.
pub fn max_value(samples: &[Sample]) -> f64 {
    samples
        .iter()
        .map(|s| drawable_value(s.value))
        .fold(0.0, f64::max)
}

/// Height of a single bar given the sequence maximum.
pub fn bar_height(value: f64, max: f64, scale: f64) -> f64 {
    let scale = non_negative(scale);
    let value = drawable_value(value);
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    // Ratio first: exactly 1.0 for the maximum, never above 1.0.
    (value / max * scale).clamp(0.0, scale)
}

/// Display text for a bar value: integers without a decimal point, other
/// values with at most two decimals.
#[allow(clippy::float_cmp)]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        if rounded == 0.0 {
            return "0".to_owned();
        }
        return format!("{rounded:.0}");
    }
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_owned() } else { trimmed.to_owned() }
}

fn drawable_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
