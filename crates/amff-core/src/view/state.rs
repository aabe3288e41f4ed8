use std::fmt;

use serde::Serialize;

use crate::research::{arch_info, ARCH_INFO_PROMPT};

/// Comparison tab selected in the interactive analysis section.
///
/// Identifiers outside the five known tabs are kept verbatim in `Other` so they
/// can still be stored and shown as the active tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonTab {
    #[default]
    Accuracy,
    Metrics,
    Training,
    Loss,
    Confusion,
    Other(String),
}

impl ComparisonTab {
    pub fn known() -> [ComparisonTab; 5] {
        [
            ComparisonTab::Accuracy,
            ComparisonTab::Metrics,
            ComparisonTab::Training,
            ComparisonTab::Loss,
            ComparisonTab::Confusion,
        ]
    }

    pub fn parse(id: &str) -> Self {
        match id {
            "accuracy" => ComparisonTab::Accuracy,
            "metrics" => ComparisonTab::Metrics,
            "training" => ComparisonTab::Training,
            "loss" => ComparisonTab::Loss,
            "confusion" => ComparisonTab::Confusion,
            other => ComparisonTab::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ComparisonTab::Accuracy => "accuracy",
            ComparisonTab::Metrics => "metrics",
            ComparisonTab::Training => "training",
            ComparisonTab::Loss => "loss",
            ComparisonTab::Confusion => "confusion",
            ComparisonTab::Other(id) => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ComparisonTab::Accuracy => "Accuracy Comparison",
            ComparisonTab::Metrics => "Detailed Metrics",
            ComparisonTab::Training => "Training Curves",
            ComparisonTab::Loss => "Loss Analysis",
            ComparisonTab::Confusion => "Confusion Matrix",
            ComparisonTab::Other(id) => id,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComparisonTab::Other(_))
    }
}

impl From<&str> for ComparisonTab {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl fmt::Display for ComparisonTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A tab control and whether it renders as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabIndicator {
    pub tab: ComparisonTab,
    pub active: bool,
}

/// Mutable state of one dashboard view instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    active_tab: ComparisonTab,
    arch_info: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: ComparisonTab::default(),
            arch_info: ARCH_INFO_PROMPT.to_string(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> &ComparisonTab {
        &self.active_tab
    }

    pub fn arch_info(&self) -> &str {
        &self.arch_info
    }

    /// Select `tab`; an `Other` carrying a known id becomes that known tab.
    pub fn select_tab(&mut self, tab: ComparisonTab) {
        self.active_tab = match tab {
            ComparisonTab::Other(id) => ComparisonTab::parse(&id),
            known => known,
        };
    }

    /// Store the description for `block_id` and return it.
    pub fn show_arch_info(&mut self, block_id: &str) -> &str {
        self.arch_info = arch_info(block_id).to_string();
        &self.arch_info
    }

    pub fn is_active(&self, tab: &ComparisonTab) -> bool {
        &self.active_tab == tab
    }

    /// Tab controls to render, derived from the active tab.
    ///
    /// Always the five known tabs; an unrecognized active tab is appended so
    /// that exactly one indicator is active.
    pub fn tab_indicators(&self) -> Vec<TabIndicator> {
        let mut indicators: Vec<TabIndicator> = ComparisonTab::known()
            .into_iter()
            .map(|tab| TabIndicator {
                active: self.is_active(&tab),
                tab,
            })
            .collect();

        if !self.active_tab.is_known() {
            indicators.push(TabIndicator {
                tab: self.active_tab.clone(),
                active: true,
            });
        }
        indicators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::ARCH_INFO_FALLBACK;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), &ComparisonTab::Accuracy);
        assert_eq!(state.arch_info(), ARCH_INFO_PROMPT);
    }

    #[test]
    fn test_exactly_one_active_for_known_tabs() {
        let mut state = ViewState::new();
        for tab in ComparisonTab::known() {
            state.select_tab(tab.clone());
            let indicators = state.tab_indicators();
            assert_eq!(indicators.len(), 5);
            let active: Vec<&TabIndicator> = indicators.iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, tab);
        }
    }

    #[test]
    fn test_unknown_tab_is_stored_and_active() {
        let mut state = ViewState::new();
        state.select_tab(ComparisonTab::parse("heatmap"));
        assert_eq!(state.active_tab().id(), "heatmap");

        let indicators = state.tab_indicators();
        assert_eq!(indicators.len(), 6);
        let active: Vec<&TabIndicator> = indicators.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab.label(), "heatmap");
    }

    #[test]
    fn test_other_with_known_id_selects_known_tab() {
        let mut state = ViewState::new();
        state.select_tab(ComparisonTab::Other("loss".to_string()));
        assert_eq!(state.active_tab(), &ComparisonTab::Loss);

        let indicators = state.tab_indicators();
        assert_eq!(indicators.len(), 5);
        let active: Vec<&TabIndicator> = indicators.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab.label(), "Loss Analysis");
    }

    #[test]
    fn test_parse_round_trips_ids() {
        for tab in ComparisonTab::known() {
            assert_eq!(ComparisonTab::parse(tab.id()), tab);
        }
        assert_eq!(ComparisonTab::from("loss"), ComparisonTab::Loss);
        assert_eq!(ComparisonTab::Confusion.to_string(), "confusion");
    }

    #[test]
    fn test_show_arch_info() {
        let mut state = ViewState::new();
        assert_eq!(state.show_arch_info("seam"), "Spatial Attention Module for feature enhancement.");
        assert_eq!(state.show_arch_info("nope"), ARCH_INFO_FALLBACK);
        assert_eq!(state.arch_info(), ARCH_INFO_FALLBACK);
    }
}
