use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl StatusTier {
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Poor => "Poor",
            StatusTier::Fair => "Fair",
            StatusTier::Good => "Good",
            StatusTier::Excellent => "Excellent",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTier::Poor => "status-poor",
            StatusTier::Fair => "status-fair",
            StatusTier::Good => "status-good",
            StatusTier::Excellent => "status-excellent",
        }
    }
}

/// Snapshot of one training checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochRecord {
    pub epoch: u32,
    pub accuracy: &'static str,
    pub loss: f64,
    pub status: &'static str,
    pub tier: StatusTier,
}

const fn record(
    epoch: u32,
    accuracy: &'static str,
    loss: f64,
    status: &'static str,
    tier: StatusTier,
) -> EpochRecord {
    EpochRecord {
        epoch,
        accuracy,
        loss,
        status,
        tier,
    }
}

pub const EPOCHS: [EpochRecord; 8] = [
    record(10, "78.2%", 0.8543, "Initial Learning", StatusTier::Poor),
    record(20, "85.4%", 0.4721, "Fair Progress", StatusTier::Fair),
    record(30, "90.1%", 0.3156, "Improving", StatusTier::Fair),
    record(40, "93.8%", 0.2094, "Good Performance", StatusTier::Good),
    record(50, "96.2%", 0.1487, "Better Results", StatusTier::Good),
    record(60, "97.5%", 0.1129, "Very Good", StatusTier::Good),
    record(80, "98.7%", 0.0743, "Excellent", StatusTier::Excellent),
    record(100, "99.65%", 0.0421, "Best Result", StatusTier::Excellent),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_order() {
        let epochs: Vec<u32> = EPOCHS.iter().map(|r| r.epoch).collect();
        assert_eq!(epochs, vec![10, 20, 30, 40, 50, 60, 80, 100]);
    }

    #[test]
    fn test_loss_strictly_decreasing() {
        assert!(EPOCHS.windows(2).all(|w| w[1].loss < w[0].loss));
    }

    #[test]
    fn test_tiers_never_regress() {
        assert!(EPOCHS.windows(2).all(|w| w[0].tier as u8 <= w[1].tier as u8));
        assert_eq!(EPOCHS[0].tier, StatusTier::Poor);
        assert_eq!(EPOCHS[7].tier.css_class(), "status-excellent");
    }
}
