use amff_core::page::SPECS_HEADING;
use amff_core::TECHNICAL_SPECS;
use leptos::prelude::*;

#[component]
pub fn SpecGrid() -> impl IntoView {
    let items = TECHNICAL_SPECS
        .iter()
        .map(|spec| {
            view! {
                <div class="spec-item">
                    <div class="spec-label">{spec.label}</div>
                    <div class="spec-value">{spec.value}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="technical-specs">
            <h2 class="section-heading">{SPECS_HEADING}</h2>
            <div class="specs-grid">{items}</div>
        </div>
    }
}
