use serde::Serialize;

/// Text shown before any block has been clicked.
pub const ARCH_INFO_PROMPT: &str = "Click on architecture blocks to learn more about each component";

/// Text shown for a block id outside [`ARCH_BLOCKS`].
pub const ARCH_INFO_FALLBACK: &str = "No information available.";

/// One stage of the architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchBlock {
    pub id: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub info: &'static str,
}

pub const ARCH_BLOCKS: [ArchBlock; 6] = [
    ArchBlock {
        id: "input",
        title: "Input Layer",
        caption: "128×128×3",
        info: "Input layer with 128x128x3 RGB images.",
    },
    ArchBlock {
        id: "conv1",
        title: "Conv2D Block",
        caption: "32 filters",
        info: "First convolutional block with 32 filters.",
    },
    ArchBlock {
        id: "seam",
        title: "SEAM Module",
        caption: "Spatial Attention",
        info: "Spatial Attention Module for feature enhancement.",
    },
    ArchBlock {
        id: "ceam",
        title: "CEAM Module",
        caption: "Cross-scale Fusion",
        info: "Cross-scale Feature Fusion Module.",
    },
    ArchBlock {
        id: "fusion",
        title: "Feature Fusion",
        caption: "Multi-scale",
        info: "Multi-scale feature fusion layer.",
    },
    ArchBlock {
        id: "classifier",
        title: "Classifier",
        caption: "6 Classes",
        info: "Final classifier for 6 defect classes.",
    },
];

/// Description of an architecture block, or [`ARCH_INFO_FALLBACK`].
pub fn arch_info(block_id: &str) -> &'static str {
    ARCH_BLOCKS
        .iter()
        .find(|block| block.id == block_id)
        .map(|block| block.info)
        .unwrap_or(ARCH_INFO_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_blocks() {
        assert_eq!(arch_info("input"), "Input layer with 128x128x3 RGB images.");
        assert_eq!(arch_info("conv1"), "First convolutional block with 32 filters.");
        assert_eq!(arch_info("seam"), "Spatial Attention Module for feature enhancement.");
        assert_eq!(arch_info("ceam"), "Cross-scale Feature Fusion Module.");
        assert_eq!(arch_info("fusion"), "Multi-scale feature fusion layer.");
        assert_eq!(arch_info("classifier"), "Final classifier for 6 defect classes.");
    }

    #[test]
    fn test_unknown_block_falls_back() {
        for id in ["", "Input", "conv2", "decoder", " seam"] {
            assert_eq!(arch_info(id), ARCH_INFO_FALLBACK);
        }
    }

    #[test]
    fn test_block_ids_unique() {
        let mut ids: Vec<&str> = ARCH_BLOCKS.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ARCH_BLOCKS.len());
    }
}
