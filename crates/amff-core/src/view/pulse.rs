//! Temporary pulse highlight on clicked cards.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

/// Elements that pulse when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PulseTarget {
    StatCard(usize),
    DefectCard(usize),
}

/// Tracks pulse start times on a host-supplied clock.
///
/// `now` is any monotonic offset, e.g. seconds since the view was created.
/// A pulse is live on `[started, started + duration)`.
#[derive(Debug, Clone)]
pub struct PulseTracker {
    duration: Duration,
    started: HashMap<PulseTarget, Duration>,
}

impl PulseTracker {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: HashMap::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start (or restart) the pulse on `target`.
    pub fn trigger(&mut self, target: PulseTarget, now: Duration) {
        self.started.insert(target, now);
    }

    pub fn is_pulsing(&self, target: PulseTarget, now: Duration) -> bool {
        self.progress(target, now).is_some()
    }

    /// Elapsed share of the pulse in `0.0..1.0`, or `None` when not pulsing.
    pub fn progress(&self, target: PulseTarget, now: Duration) -> Option<f32> {
        let started = *self.started.get(&target)?;
        let elapsed = now.checked_sub(started)?;
        if elapsed >= self.duration {
            return None;
        }
        Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Remove the pulse on `target` regardless of time, for hosts that end
    /// pulses from a timer callback.
    pub fn end(&mut self, target: PulseTarget) -> bool {
        self.started.remove(&target).is_some()
    }

    /// Remove the pulse on `target` only if it is still the one started at
    /// `started`. A timer scheduled by an earlier trigger leaves a restarted
    /// pulse alone.
    pub fn end_started_at(&mut self, target: PulseTarget, started: Duration) -> bool {
        if self.started.get(&target) != Some(&started) {
            return false;
        }
        self.started.remove(&target);
        true
    }

    /// Drop expired pulses. Returns whether any pulse is still live.
    pub fn prune(&mut self, now: Duration) -> bool {
        let duration = self.duration;
        self.started
            .retain(|_, started| now.checked_sub(*started).map_or(true, |e| e < duration));
        !self.started.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.started.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_expires_after_duration() {
        let mut tracker = PulseTracker::new(Duration::from_secs(2));
        let card = PulseTarget::StatCard(0);
        tracker.trigger(card, secs(1.0));

        assert!(tracker.is_pulsing(card, secs(1.0)));
        assert!(tracker.is_pulsing(card, secs(2.999)));
        assert!(!tracker.is_pulsing(card, secs(3.0)));
        assert!(!tracker.is_pulsing(PulseTarget::StatCard(1), secs(1.5)));
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut tracker = PulseTracker::new(Duration::from_secs(2));
        let card = PulseTarget::DefectCard(3);
        tracker.trigger(card, secs(0.0));
        tracker.trigger(card, secs(1.5));
        assert!(tracker.is_pulsing(card, secs(3.0)));
        assert!(!tracker.is_pulsing(card, secs(3.5)));
    }

    #[test]
    fn test_stale_timer_keeps_restarted_pulse() {
        let mut tracker = PulseTracker::new(Duration::from_secs(2));
        let card = PulseTarget::StatCard(1);
        tracker.trigger(card, secs(0.0));
        tracker.trigger(card, secs(1.5));

        assert!(!tracker.end_started_at(card, secs(0.0)));
        assert!(tracker.is_pulsing(card, secs(2.5)));

        assert!(tracker.end_started_at(card, secs(1.5)));
        assert!(!tracker.is_pulsing(card, secs(2.5)));
    }

    #[test]
    fn test_progress() {
        let mut tracker = PulseTracker::new(Duration::from_secs(2));
        let card = PulseTarget::StatCard(2);
        tracker.trigger(card, secs(0.0));
        let progress = tracker.progress(card, secs(0.5)).unwrap();
        assert!((progress - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_prune_and_end() {
        let mut tracker = PulseTracker::new(Duration::from_secs(2));
        tracker.trigger(PulseTarget::StatCard(0), secs(0.0));
        tracker.trigger(PulseTarget::DefectCard(0), secs(1.0));

        assert!(tracker.prune(secs(2.5)));
        assert_eq!(tracker.active_count(), 1);
        assert!(tracker.end(PulseTarget::DefectCard(0)));
        assert!(!tracker.end(PulseTarget::DefectCard(0)));
        assert!(!tracker.prune(secs(2.5)));
    }
}
