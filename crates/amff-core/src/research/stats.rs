use serde::Serialize;

/// Headline figure at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
}

pub const STAT_CARDS: [StatCard; 6] = [
    StatCard {
        value: "99.65%",
        label: "AMFF-CNN Peak Accuracy",
        sublabel: "Achieved at Epoch 100",
    },
    StatCard {
        value: "93.75%",
        label: "Base CNN Accuracy",
        sublabel: "Standard Architecture",
    },
    StatCard {
        value: "+5.9%",
        label: "Performance Gain",
        sublabel: "Significant Improvement",
    },
    StatCard {
        value: "6",
        label: "Defect Categories",
        sublabel: "NEU Steel Dataset",
    },
    StatCard {
        value: "99.3%",
        label: "Mean Average Precision",
        sublabel: "Multi-class Detection",
    },
    StatCard {
        value: "12ms",
        label: "Inference Time",
        sublabel: "Per 128×128 Image",
    },
];
