use amff_core::{PulseTarget, STAT_CARDS};
use leptos::prelude::*;

use super::{pulse_class, start_pulse, WebDashboard};

#[component]
pub fn StatsGrid(dashboard: RwSignal<WebDashboard>) -> impl IntoView {
    let cards = STAT_CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let target = PulseTarget::StatCard(index);
            view! {
                <div
                    class=move || pulse_class(dashboard, "stat-card", target)
                    on:click=move |_| start_pulse(dashboard, target)
                >
                    <div class="stat-value">{card.value}</div>
                    <div class="stat-label">{card.label}</div>
                    <div class="stat-sublabel">{card.sublabel}</div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="stats-grid">{cards}</div> }
}
