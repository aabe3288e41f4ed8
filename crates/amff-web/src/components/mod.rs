pub mod architecture;
pub mod charts;
pub mod comparison;
pub mod defects;
pub mod details;
pub mod header;
pub mod particles;
pub mod specs;
pub mod stats;
pub mod training;

use std::time::Duration;

use amff_core::{Dashboard, PulseTarget, STAT_CARDS};
use leptos::prelude::*;

use crate::notify::AlertNotifier;

pub type WebDashboard = Dashboard<AlertNotifier>;

/// Wall-clock time as an offset from the epoch; only differences matter.
fn now() -> Duration {
    Duration::from_secs_f64(js_sys::Date::now() / 1000.0)
}

/// Pulse `target` and schedule its removal after the pulse duration.
///
/// The timer only ends the pulse it started; a later click keeps its own
/// full window.
pub fn start_pulse(dashboard: RwSignal<WebDashboard>, target: PulseTarget) {
    let started = now();
    dashboard.update(|d| d.decorate_pulse(target, started));
    schedule_finish(dashboard, target, started);
}

/// Pulse every stat card when the page first renders.
pub fn pulse_stat_cards(dashboard: RwSignal<WebDashboard>) {
    let started = now();
    dashboard.update(|d| d.pulse_stat_cards(started));
    for index in 0..STAT_CARDS.len() {
        schedule_finish(dashboard, PulseTarget::StatCard(index), started);
    }
}

fn schedule_finish(dashboard: RwSignal<WebDashboard>, target: PulseTarget, started: Duration) {
    let duration = dashboard.with_untracked(|d| d.pulse_duration());
    set_timeout(
        move || dashboard.update(|d| d.finish_pulse(target, started)),
        duration,
    );
}

/// `base` plus ` pulse` while `target` is pulsing.
pub fn pulse_class(dashboard: RwSignal<WebDashboard>, base: &'static str, target: PulseTarget) -> String {
    if dashboard.with(|d| d.is_pulsing(target, now())) {
        format!("{} pulse", base)
    } else {
        base.to_string()
    }
}
