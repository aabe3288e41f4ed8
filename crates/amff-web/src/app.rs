use amff_core::{generate_particles, Dashboard, DashboardConfig, DETAIL_SECTIONS};
use leptos::prelude::*;

use crate::components::architecture::ArchitectureDiagram;
use crate::components::comparison::ComparisonSection;
use crate::components::defects::DefectGrid;
use crate::components::details::DetailSectionView;
use crate::components::header::{Footer, Header};
use crate::components::particles::Particles;
use crate::components::pulse_stat_cards;
use crate::components::specs::SpecGrid;
use crate::components::stats::StatsGrid;
use crate::components::training::EpochGrid;
use crate::notify::AlertNotifier;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();
    let dashboard = RwSignal::new(Dashboard::with_config(&config, AlertNotifier));
    let particles = generate_particles(&config.particles, &mut rand::thread_rng());
    pulse_stat_cards(dashboard);

    let sections = DETAIL_SECTIONS
        .iter()
        .map(|section| view! { <DetailSectionView dashboard section=*section /> })
        .collect_view();

    view! {
        <div class="app">
            <Particles particles />
            <div class="container">
                <Header />
                <StatsGrid dashboard />
                <EpochGrid dashboard />
                <ComparisonSection dashboard />
                <SpecGrid />
                <ArchitectureDiagram dashboard />
                <DefectGrid dashboard />
                {sections}
                <Footer />
            </div>
        </div>
    }
}
