//! Proportional vertical bar chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a `ChartLayout` produced by `util::bar_layout`. The component owns
//! no state; it re-derives the layout whenever the `samples` signal changes.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;

use crate::util::bar_layout::{BarView, ChartConfig, ChartLayout, layout_bars};
use crate::util::class_list::merge_classes;
use crate::util::samples::Sample;

const FRAME_CLASSES: &str = "bar-chart flex flex-row items-end";
const COLUMN_CLASSES: &str = "bar-chart__column flex flex-col items-center";
const BAR_CLASSES: &str = "bar-chart__bar rounded-t bg-primary";
const LABEL_CLASSES: &str = "bar-chart__label mt-2 text-xs text-muted-foreground";
const VALUE_CLASSES: &str = "bar-chart__value text-xs font-medium";

/// Vertical bar chart, one bar per sample, heights relative to the largest value.
#[component]
pub fn BarChart(
    #[prop(into)] samples: Signal<Vec<Sample>>,
    #[prop(optional)] config: ChartConfig,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let layout = Memo::new(move |_| layout_bars(&samples.get(), &config));

    Effect::new(move || {
        let ignored = layout.with(|l| l.ignored_values);
        if ignored > 0 {
            leptos::logging::warn!("bar chart: {ignored} sample(s) with invalid values drawn at zero height");
        }
    });

    let frame_class = merge_classes(FRAME_CLASSES, class.as_deref());

    view! {
        <div
            class=frame_class
            data-slot="bar-chart"
            data-empty=move || layout.with(ChartLayout::is_empty).to_string()
            style:height=move || px(layout.with(|l| l.config.max_bar_height))
            style:column-gap=move || px(layout.with(|l| l.config.bar_gap))
            style:min-width=move || px(layout.with(ChartLayout::content_width))
        >
            {move || layout.with(|l| l.bars.iter().map(|bar| bar_column(bar, l)).collect::<Vec<_>>())}
        </div>
    }
}

fn bar_column(bar: &BarView, layout: &ChartLayout) -> AnyView {
    let width = px(layout.config.bar_width);
    let bar_width = width.clone();
    let height = px(bar.height);
    let title = bar_title(bar);

    view! {
        <div class=COLUMN_CLASSES data-key=bar.key.to_string() style:width=width>
            <div class=BAR_CLASSES title=title style:width=bar_width style:height=height></div>
            <span class=LABEL_CLASSES>{bar.label.clone()}</span>
            <span class=VALUE_CLASSES>{bar.value_label.clone()}</span>
        </div>
    }
    .into_any()
}

/// Hover text for a bar.
fn bar_title(bar: &BarView) -> String {
    format!("{}: {}", bar.label, bar.value_label)
}

/// Format a pixel length for inline styles.
fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}px")
}
