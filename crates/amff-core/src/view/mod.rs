//! The dashboard view model: per-instance state plus the UI commands.

mod notify;
mod pulse;
mod state;

use std::time::Duration;

use serde::Serialize;

pub use notify::{FnNotifier, LogNotifier, Notification, Notifier, QueueNotifier};
pub use pulse::{PulseTarget, PulseTracker};
pub use state::{ComparisonTab, TabIndicator, ViewState};

use crate::config::DashboardConfig;
use crate::metrics::ChartSpec;
use crate::page::{DetailSection, COMPARISON_CHARTS, DETAIL_SECTIONS};
use crate::research::{
    ArchBlock, DefectType, EpochRecord, SpecEntry, StatCard, ARCH_BLOCKS, DEFECT_TYPES, EPOCHS,
    STAT_CARDS, TECHNICAL_SPECS,
};

/// One dashboard view instance. Owns its state exclusively; dropping it
/// discards the state and any pending pulses.
#[derive(Debug, Clone)]
pub struct Dashboard<N: Notifier = LogNotifier> {
    state: ViewState,
    pulses: PulseTracker,
    notifier: N,
}

impl<N: Notifier> Dashboard<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_config(&DashboardConfig::default(), notifier)
    }

    pub fn with_config(config: &DashboardConfig, notifier: N) -> Self {
        Self {
            state: ViewState::new(),
            pulses: PulseTracker::new(config.pulse.duration()),
            notifier,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn select_comparison_tab(&mut self, tab: impl Into<ComparisonTab>) {
        let tab = tab.into();
        tracing::debug!("Comparison tab selected: {}", tab);
        self.state.select_tab(tab);
    }

    pub fn show_architecture_info(&mut self, block_id: &str) -> &str {
        tracing::debug!("Architecture info requested: {}", block_id);
        self.state.show_arch_info(block_id)
    }

    pub fn notify_epoch_selected(&self, epoch: u32) {
        self.notifier.notify(Notification::EpochSelected { epoch });
    }

    pub fn notify_detail(&self, kind: &str, category: &str) {
        self.notifier.notify(Notification::Detail {
            kind: kind.to_string(),
            category: category.to_string(),
        });
    }

    pub fn decorate_pulse(&mut self, target: PulseTarget, now: Duration) {
        tracing::debug!("Pulse on {:?}", target);
        self.pulses.trigger(target, now);
    }

    pub fn end_pulse(&mut self, target: PulseTarget) {
        self.pulses.end(target);
    }

    /// Timer-driven removal of the pulse started at `started`. Does nothing if
    /// the pulse was restarted since.
    pub fn finish_pulse(&mut self, target: PulseTarget, started: Duration) {
        if !self.pulses.end_started_at(target, started) {
            tracing::debug!("Pulse on {:?} was restarted; keeping it", target);
        }
    }

    /// Pulse every stat card, as the page does when it first renders.
    pub fn pulse_stat_cards(&mut self, now: Duration) {
        for index in 0..STAT_CARDS.len() {
            self.pulses.trigger(PulseTarget::StatCard(index), now);
        }
    }

    pub fn is_pulsing(&self, target: PulseTarget, now: Duration) -> bool {
        self.pulses.is_pulsing(target, now)
    }

    pub fn pulse_progress(&self, target: PulseTarget, now: Duration) -> Option<f32> {
        self.pulses.progress(target, now)
    }

    pub fn pulse_duration(&self) -> Duration {
        self.pulses.duration()
    }

    /// Expire finished pulses. Returns whether any pulse is still live.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.pulses.prune(now)
    }

    /// Everything the view displays, as one serializable value.
    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            state: &self.state,
            tabs: self.state.tab_indicators(),
            stats: &STAT_CARDS,
            epochs: &EPOCHS,
            comparison_charts: &COMPARISON_CHARTS,
            specs: &TECHNICAL_SPECS,
            architecture: &ARCH_BLOCKS,
            defects: &DEFECT_TYPES,
            sections: &DETAIL_SECTIONS,
        }
    }
}

impl Default for Dashboard<LogNotifier> {
    fn default() -> Self {
        Self::new(LogNotifier)
    }
}

#[derive(Debug, Serialize)]
pub struct PageSnapshot<'a> {
    pub state: &'a ViewState,
    pub tabs: Vec<TabIndicator>,
    pub stats: &'static [StatCard],
    pub epochs: &'static [EpochRecord],
    pub comparison_charts: &'static [ChartSpec],
    pub specs: &'static [SpecEntry],
    pub architecture: &'static [ArchBlock],
    pub defects: &'static [DefectType],
    pub sections: &'static [DetailSection],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::{ARCH_INFO_FALLBACK, ARCH_INFO_PROMPT};

    fn dashboard() -> Dashboard {
        Dashboard::new(LogNotifier)
    }

    fn snapshot_json<N: Notifier>(dashboard: &Dashboard<N>) -> String {
        serde_json::to_string(&dashboard.snapshot()).unwrap()
    }

    #[test]
    fn test_select_tab() {
        let mut dashboard = dashboard();
        dashboard.select_comparison_tab(ComparisonTab::Loss);
        assert_eq!(dashboard.state().active_tab(), &ComparisonTab::Loss);

        dashboard.select_comparison_tab("roc");
        assert_eq!(dashboard.state().active_tab(), &ComparisonTab::Other("roc".to_string()));
    }

    #[test]
    fn test_arch_info_for_every_block() {
        let mut dashboard = dashboard();
        for block in &ARCH_BLOCKS {
            assert_eq!(dashboard.show_architecture_info(block.id), block.info);
            assert_eq!(dashboard.state().arch_info(), block.info);
        }
        assert_eq!(dashboard.show_architecture_info("softmax"), ARCH_INFO_FALLBACK);
    }

    #[test]
    fn test_notifications_leave_state_alone() {
        let queue = QueueNotifier::new();
        let dashboard = Dashboard::new(queue.clone());
        let before = dashboard.state().clone();

        dashboard.notify_epoch_selected(80);
        dashboard.notify_detail("inference", "examples");

        assert_eq!(dashboard.state(), &before);
        assert_eq!(queue.dismiss().unwrap().message(), "Showing details for Epoch 80");
        assert_eq!(queue.dismiss().unwrap().message(), "Showing inference examples details");
    }

    #[test]
    fn test_pulse_lasts_two_seconds() {
        let mut dashboard = dashboard();
        let card = PulseTarget::StatCard(4);
        dashboard.decorate_pulse(card, Duration::from_secs(10));
        assert!(dashboard.is_pulsing(card, Duration::from_millis(11_999)));
        assert!(!dashboard.is_pulsing(card, Duration::from_secs(12)));
        assert!(!dashboard.tick(Duration::from_secs(12)));
    }

    #[test]
    fn test_end_pulse() {
        let mut dashboard = dashboard();
        let card = PulseTarget::DefectCard(1);
        dashboard.decorate_pulse(card, Duration::ZERO);
        dashboard.end_pulse(card);
        assert!(!dashboard.is_pulsing(card, Duration::ZERO));
    }

    #[test]
    fn test_retrigger_survives_first_timer() {
        let mut dashboard = dashboard();
        let card = PulseTarget::DefectCard(2);
        dashboard.decorate_pulse(card, Duration::ZERO);
        dashboard.decorate_pulse(card, Duration::from_millis(1500));

        // First click's timer fires at 2s.
        dashboard.finish_pulse(card, Duration::ZERO);
        assert!(dashboard.is_pulsing(card, Duration::from_millis(2500)));

        dashboard.finish_pulse(card, Duration::from_millis(1500));
        assert!(!dashboard.is_pulsing(card, Duration::from_millis(2500)));
    }

    #[test]
    fn test_stat_cards_pulse_on_load() {
        let mut dashboard = dashboard();
        let start = Duration::from_secs(3);
        dashboard.pulse_stat_cards(start);
        for index in 0..STAT_CARDS.len() {
            assert!(dashboard.is_pulsing(PulseTarget::StatCard(index), start));
            assert!(!dashboard.is_pulsing(PulseTarget::StatCard(index), Duration::from_secs(5)));
        }
        assert!(!dashboard.is_pulsing(PulseTarget::DefectCard(0), start));
    }

    #[test]
    fn test_configured_pulse_duration() {
        let mut config = DashboardConfig::default();
        config.pulse.duration_ms = 500;
        let dashboard = Dashboard::with_config(&config, LogNotifier);
        assert_eq!(dashboard.pulse_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_instances_render_identically() {
        assert_eq!(snapshot_json(&dashboard()), snapshot_json(&dashboard()));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut first = dashboard();
        let second = dashboard();
        first.select_comparison_tab(ComparisonTab::Confusion);
        first.show_architecture_info("fusion");

        assert_eq!(second.state().active_tab(), &ComparisonTab::Accuracy);
        assert_eq!(second.state().arch_info(), ARCH_INFO_PROMPT);
        assert_ne!(snapshot_json(&first), snapshot_json(&second));

        drop(first);
        assert_eq!(snapshot_json(&second), snapshot_json(&dashboard()));
    }
}
