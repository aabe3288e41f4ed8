use amff_core::page::{COMPARISON_CHARTS, COMPARISON_HEADING};
use leptos::prelude::*;

use super::charts::ChartCard;
use super::WebDashboard;

#[component]
pub fn ComparisonSection(dashboard: RwSignal<WebDashboard>) -> impl IntoView {
    // Active marking is derived from the view state on every change.
    let tabs = move || {
        dashboard
            .with(|d| d.state().tab_indicators())
            .into_iter()
            .map(|indicator| {
                let class = if indicator.active { "toggle-btn active" } else { "toggle-btn" };
                let label = indicator.tab.label().to_string();
                let tab = indicator.tab;
                view! {
                    <button
                        class=class
                        on:click=move |_| dashboard.update(|d| d.select_comparison_tab(tab.clone()))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let [left, right] = COMPARISON_CHARTS;

    view! {
        <div class="interactive-section">
            <h2>{COMPARISON_HEADING}</h2>
            {tabs}
        </div>
        <div class="main-content">
            <ChartCard spec=left />
            <ChartCard spec=right />
        </div>
    }
}
