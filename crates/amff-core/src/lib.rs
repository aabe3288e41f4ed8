// Domain modules
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod metrics;
pub mod page;
pub mod particles;
pub mod research;
pub mod view;

pub use chart::{
    bar_layout, line_layout, radar_layout, radar_rings, tick_label, value_ticks, BarRect,
};
pub use color::Rgba;
pub use config::{
    DashboardConfig, ParticleConfig, PulseConfig, WindowConfig, CONFIG_ENV_VAR, MAX_PARTICLES,
};
pub use error::{DashboardError, Result};
pub use metrics::{ChartKind, ChartSpec, MetricSeries, Palette};
pub use page::{DetailButton, DetailSection, COMPARISON_CHARTS, DETAIL_SECTIONS};
pub use particles::{generate_particles, Particle};
pub use research::{
    arch_info, ArchBlock, DefectType, EpochRecord, SpecEntry, StatCard, StatusTier, ARCH_BLOCKS,
    ARCH_INFO_FALLBACK, ARCH_INFO_PROMPT, DEFECT_TYPES, EPOCHS, STAT_CARDS, TECHNICAL_SPECS,
};
pub use view::{
    ComparisonTab, Dashboard, FnNotifier, LogNotifier, Notification, Notifier, PageSnapshot,
    PulseTarget, PulseTracker, QueueNotifier, TabIndicator, ViewState,
};
