use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "AMFF_DASHBOARD_CONFIG";

/// Upper bound on decorative particles.
pub const MAX_PARTICLES: usize = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub pulse: PulseConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded dashboard config from {}", path.display());
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.particles;
        if p.count > MAX_PARTICLES {
            return Err(DashboardError::Config(format!(
                "particle count {} exceeds the limit of {}",
                p.count, MAX_PARTICLES
            )));
        }
        if !(p.min_size_px >= 0.0 && p.min_size_px <= p.max_size_px) {
            return Err(DashboardError::Config(format!(
                "particle size range is invalid: {}..{}",
                p.min_size_px, p.max_size_px
            )));
        }
        if p.max_delay_secs < 0.0 {
            return Err(DashboardError::Config(
                "particle delay must not be negative".to_string(),
            ));
        }
        if self.pulse.duration_ms == 0 {
            return Err(DashboardError::Config(
                "pulse duration must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_size_px: f32,
    pub max_size_px: f32,
    pub max_delay_secs: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            min_size_px: 2.0,
            max_size_px: 7.0,
            max_delay_secs: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub duration_ms: u64,
}

impl PulseConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 900.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.particles.count, 100);
        assert_eq!(config.particles.min_size_px, 2.0);
        assert_eq!(config.particles.max_size_px, 7.0);
        assert_eq!(config.pulse.duration(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DashboardConfig::from_json(r#"{"particles": {"count": 12}}"#).unwrap();
        assert_eq!(config.particles.count, 12);
        assert_eq!(config.particles.max_size_px, 7.0);
        assert_eq!(config.pulse, PulseConfig::default());
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_rejects_inverted_size_range() {
        let err = DashboardConfig::from_json(
            r#"{"particles": {"min_size_px": 9.0, "max_size_px": 3.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_particle_count_limit() {
        let at_limit = format!(r#"{{"particles": {{"count": {}}}}}"#, MAX_PARTICLES);
        assert!(DashboardConfig::from_json(&at_limit).is_ok());

        let err = DashboardConfig::from_json(r#"{"particles": {"count": 1000000000}}"#)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_pulse() {
        let err = DashboardConfig::from_json(r#"{"pulse": {"duration_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DashboardConfig::load(Path::new("/nonexistent/amff-dashboard.json")).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
