use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TECHNICAL_SPECS: [SpecEntry; 8] = [
    SpecEntry {
        label: "Dataset",
        value: "NEU Steel Surface Defect Database",
    },
    SpecEntry {
        label: "Input Resolution",
        value: "128 × 128 × 3 RGB Images",
    },
    SpecEntry {
        label: "Training Samples",
        value: "1,800 Images (300 per class)",
    },
    SpecEntry {
        label: "Validation Split",
        value: "80% Training, 20% Validation",
    },
    SpecEntry {
        label: "Optimizer",
        value: "Adam (lr=0.001, β₁=0.9, β₂=0.999)",
    },
    SpecEntry {
        label: "Batch Size",
        value: "32 samples per batch",
    },
    SpecEntry {
        label: "SEAM Dilation Rates",
        value: "[1, 2, 3, 4] Multi-scale Feature Extraction",
    },
    SpecEntry {
        label: "Model Parameters",
        value: "~2.1M trainable parameters",
    },
];
