//! Page copy and section layout shared by the front-ends.

use serde::Serialize;

use crate::metrics::{
    ChartSpec, ACCURACY_CHART, INFERENCE_CHART, LOSS_CHART, PARAMETER_CHART, PERFORMANCE_CHART,
    RADAR_CHART, TRAINING_CHART, VALIDATION_CHART,
};

pub const TITLE: &str = "AMFF-CNN Research Dashboard";
pub const TAGLINE: &str = "Advanced Multi-scale Feature Fusion for Steel Surface Defect Detection";
pub const SUBTITLE: &str = "Attention-Enhanced Convolutional Neural Network Architecture";

pub const TRAINING_HEADING: &str = "Training Progression Analysis";
pub const COMPARISON_HEADING: &str = "Interactive Model Analysis";
pub const SPECS_HEADING: &str = "Technical Specifications";
pub const ARCHITECTURE_HEADING: &str = "AMFF-CNN Architecture";

pub const FOOTER_COPYRIGHT: &str = "© 2023 AMFF-CNN Research Team. All rights reserved.";
pub const CONTACT_EMAIL: &str = "amff-cnn@example.com";

/// Charts under the comparison tabs.
pub const COMPARISON_CHARTS: [ChartSpec; 2] = [ACCURACY_CHART, RADAR_CHART];

/// A button that only acknowledges the click with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailButton {
    pub kind: &'static str,
    pub category: &'static str,
    pub label: &'static str,
}

/// A heading, a row of detail buttons, and two charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailSection {
    pub heading: &'static str,
    pub buttons: &'static [DetailButton],
    pub charts: [ChartSpec; 2],
}

const fn button(kind: &'static str, category: &'static str, label: &'static str) -> DetailButton {
    DetailButton {
        kind,
        category,
        label,
    }
}

pub const DETAIL_SECTIONS: [DetailSection; 3] = [
    DetailSection {
        heading: "Model Architecture Overview",
        buttons: &[
            button("architecture", "amff", "AMFF-CNN Architecture"),
            button("architecture", "base", "Base CNN Architecture"),
            button("architecture", "comparison", "Architecture Comparison"),
        ],
        charts: [PARAMETER_CHART, LOSS_CHART],
    },
    DetailSection {
        heading: "Model Training and Evaluation",
        buttons: &[
            button("training", "training", "Training Curves"),
            button("training", "validation", "Validation Curves"),
            button("training", "confusion", "Confusion Matrix"),
            button("training", "detailed", "Detailed Metrics"),
        ],
        charts: [TRAINING_CHART, VALIDATION_CHART],
    },
    DetailSection {
        heading: "Model Inference and Results",
        buttons: &[
            button("inference", "results", "Inference Results"),
            button("inference", "examples", "Example Images"),
            button("inference", "metrics", "Detailed Metrics"),
        ],
        charts: [INFERENCE_CHART, PERFORMANCE_CHART],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_buttons_per_section() {
        let counts: Vec<usize> = DETAIL_SECTIONS.iter().map(|s| s.buttons.len()).collect();
        assert_eq!(counts, vec![3, 4, 3]);
    }

    #[test]
    fn test_chart_ids_unique() {
        let mut ids: Vec<&str> = COMPARISON_CHARTS
            .iter()
            .chain(DETAIL_SECTIONS.iter().flat_map(|s| s.charts.iter()))
            .map(|c| c.id)
            .collect();
        assert_eq!(ids.len(), 8);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
