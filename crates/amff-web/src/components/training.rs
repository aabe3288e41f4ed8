use amff_core::page::TRAINING_HEADING;
use amff_core::EPOCHS;
use leptos::prelude::*;

use super::WebDashboard;

#[component]
pub fn EpochGrid(dashboard: RwSignal<WebDashboard>) -> impl IntoView {
    let cards = EPOCHS
        .iter()
        .map(|record| {
            let epoch = record.epoch;
            let status_class = format!("epoch-status {}", record.tier.css_class());
            view! {
                <div
                    class="epoch-card"
                    on:click=move |_| dashboard.with_untracked(|d| d.notify_epoch_selected(epoch))
                >
                    <div class="epoch-number">{format!("Epoch {}", epoch)}</div>
                    <div class="epoch-accuracy">{record.accuracy}</div>
                    <div class="epoch-loss">{format!("Loss: {}", record.loss)}</div>
                    <div class=status_class>{record.status}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="training-progress">
            <h2 class="section-heading">{TRAINING_HEADING}</h2>
            <div class="epoch-grid">{cards}</div>
        </div>
    }
}
