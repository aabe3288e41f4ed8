use amff_core::{PulseTarget, DEFECT_TYPES};
use leptos::prelude::*;

use super::{pulse_class, start_pulse, WebDashboard};

#[component]
pub fn DefectGrid(dashboard: RwSignal<WebDashboard>) -> impl IntoView {
    let cards = DEFECT_TYPES
        .iter()
        .enumerate()
        .map(|(index, defect)| {
            let target = PulseTarget::DefectCard(index);
            view! {
                <div
                    class=move || pulse_class(dashboard, "defect-card", target)
                    on:click=move |_| start_pulse(dashboard, target)
                >
                    <span class="defect-icon">{defect.icon}</span>
                    <h3>{defect.name}</h3>
                    <p>{defect.description}</p>
                    <div class="defect-accuracy">{format!("AMFF-CNN: {}", defect.accuracy)}</div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="defect-types">{cards}</div> }
}
