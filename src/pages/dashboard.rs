//! Dashboard page showing the monthly chart with a details sheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the chart and sheet components. The page owns the sheet's open
//! flag and edge through the `UiState` context.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::sheet::{
    Sheet, SheetClose, SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetSide, SheetTitle,
    SheetTrigger,
};
use crate::state::ui::UiState;
use crate::util::bar_layout::format_value;
use crate::util::samples::{Sample, parse_samples};

const DEMO_SAMPLES: &str = r#"[
    {"label": "Jan", "value": 10},
    {"label": "Feb", "value": 15},
    {"label": "Mar", "value": 5}
]"#;

/// Built-in chart data. Falls back to an empty chart if decoding fails.
pub fn demo_samples() -> Vec<Sample> {
    match parse_samples(DEMO_SAMPLES) {
        Ok(samples) => samples,
        Err(e) => {
            leptos::logging::warn!("demo samples rejected: {e}");
            Vec::new()
        }
    }
}

/// Sum of all sample values, for the sheet summary line.
pub fn total_value(samples: &[Sample]) -> f64 {
    samples.iter().filter(|s| s.is_valid()).map(|s| s.value).sum()
}

/// Dashboard page: chart plus a details sheet.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let samples = RwSignal::new(demo_samples());

    let open = Signal::derive(move || ui.with(|u| u.sheet_open));
    let side = Memo::new(move |_| ui.with(|u| u.sheet_side));

    let on_open = Callback::new(move |()| {
        ui.update(UiState::open_sheet);
        leptos::logging::log!("details sheet opened on {} edge", side.get_untracked().edge());
    });
    let on_close = Callback::new(move |()| ui.update(UiState::close_sheet));
    let on_clear = move |_| samples.update(|rows| rows.iter_mut().for_each(|s| s.value = 0.0));
    let on_reset = move |_| samples.set(demo_samples());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Monthly totals"</h1>
                <Sheet>
                    <SheetTrigger on_activate=on_open class="btn btn--primary">
                        "Details"
                    </SheetTrigger>
                    {move || {
                        let side = side.get();
                        view! {
                            <SheetContent open=open side=side on_close=on_close>
                                <SheetHeader>
                                    <SheetTitle>"Sample details"</SheetTitle>
                                    <SheetDescription>
                                        {move || samples.with(|rows| summary_line(rows))}
                                    </SheetDescription>
                                </SheetHeader>
                                <ul class="dashboard-page__samples">
                                    {move || {
                                        samples
                                            .get()
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <li>
                                                        <span>{s.label}</span>
                                                        " "
                                                        <span>{format_value(s.value)}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                                <SheetFooter>
                                    {SheetSide::ALL
                                        .iter()
                                        .map(|&edge| {
                                            view! {
                                                <button
                                                    class="btn"
                                                    class:btn--active=move || side == edge
                                                    on:click=move |_| ui.update(|u| u.set_sheet_side(edge))
                                                >
                                                    {edge.edge()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                    <SheetClose on_activate=on_close class="btn">
                                        "Done"
                                    </SheetClose>
                                </SheetFooter>
                            </SheetContent>
                        }
                    }}
                </Sheet>
            </header>

            <BarChart samples=samples class="dashboard-page__chart"/>

            <div class="dashboard-page__actions">
                <button class="btn" on:click=on_clear>"Zero values"</button>
                <button class="btn" on:click=on_reset>"Reset"</button>
            </div>
        </div>
    }
}

fn summary_line(samples: &[Sample]) -> String {
    format!("{} samples, total {}", samples.len(), format_value(total_value(samples)))
}
