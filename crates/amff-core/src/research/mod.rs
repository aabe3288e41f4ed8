//! Literal research tables shown on the dashboard.

mod architecture;
mod defects;
mod epochs;
mod specs;
mod stats;

pub use architecture::{arch_info, ArchBlock, ARCH_BLOCKS, ARCH_INFO_FALLBACK, ARCH_INFO_PROMPT};
pub use defects::{DefectType, DEFECT_TYPES};
pub use epochs::{EpochRecord, StatusTier, EPOCHS};
pub use specs::{SpecEntry, TECHNICAL_SPECS};
pub use stats::{StatCard, STAT_CARDS};
