use amff_core::DetailSection;
use leptos::prelude::*;

use super::charts::ChartCard;
use super::WebDashboard;

#[component]
pub fn DetailSectionView(dashboard: RwSignal<WebDashboard>, section: DetailSection) -> impl IntoView {
    let buttons = section
        .buttons
        .iter()
        .map(|button| {
            let (kind, category) = (button.kind, button.category);
            view! {
                <button
                    class="toggle-btn"
                    on:click=move |_| dashboard.with_untracked(|d| d.notify_detail(kind, category))
                >
                    {button.label}
                </button>
            }
        })
        .collect_view();

    let [left, right] = section.charts;

    view! {
        <div class="interactive-section">
            <h2>{section.heading}</h2>
            {buttons}
        </div>
        <div class="main-content">
            <ChartCard spec=left />
            <ChartCard spec=right />
        </div>
    }
}
