use amff_core::page::ARCHITECTURE_HEADING;
use amff_core::ARCH_BLOCKS;
use leptos::prelude::*;

use super::WebDashboard;

#[component]
pub fn ArchitectureDiagram(dashboard: RwSignal<WebDashboard>) -> impl IntoView {
    let blocks = ARCH_BLOCKS
        .iter()
        .map(|block| {
            let id = block.id;
            view! {
                <div
                    class="arch-block"
                    on:click=move |_| dashboard.update(|d| {
                        d.show_architecture_info(id);
                    })
                >
                    {block.title}
                    <br />
                    {block.caption}
                </div>
            }
        })
        .collect_view();

    let info = move || dashboard.with(|d| d.state().arch_info().to_string());

    view! {
        <div class="architecture-section">
            <h2 class="section-heading">{ARCHITECTURE_HEADING}</h2>
            <div class="architecture-diagram">{blocks}</div>
            <div class="arch-info">{info}</div>
        </div>
    }
}
