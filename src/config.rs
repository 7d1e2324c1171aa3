//! Configuration loading and validation.
//!
//! Settings live in a TOML file (`newsimpact.toml` by default). Every section
//! has sensible defaults, so a missing file yields a fully usable config; a
//! present-but-invalid file is a startup failure.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::domain::ImpactWeights;
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub pipeline: PipelineConfig,
    pub scheduler: SchedulerConfig,
    pub logging: LoggingConfig,
}

/// Impact-scoring weights. Must sum to 1.0; anything else silently distorts
/// every downstream score, so it is rejected at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sentiment_weight: f64,
    pub movement_weight: f64,
    pub volume_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sentiment_weight: 0.45,
            movement_weight: 0.35,
            volume_weight: 0.20,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> ImpactWeights {
        ImpactWeights {
            sentiment: self.sentiment_weight,
            movement: self.movement_weight,
            volume: self.volume_weight,
        }
    }
}

/// Snapshot file locations, following the original `data/` layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub news_file: String,
    pub market_file: String,
    pub output_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            news_file: "data/news_processed.json".into(),
            market_file: "data/market_data.json".into(),
            output_file: "data/analysis_output.json".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Seconds between pipeline passes in `watch` mode.
    pub interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { interval_secs: 600 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        for (field, value) in [
            ("sentiment_weight", s.sentiment_weight),
            ("movement_weight", s.movement_weight),
            ("volume_weight", s.volume_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be in [0, 1], got {value}"),
                }
                .into());
            }
        }

        let sum = s.sentiment_weight + s.movement_weight + s.volume_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidValue {
                field: "scoring",
                reason: format!("weights must sum to 1.0, got {sum}"),
            }
            .into());
        }

        if self.scheduler.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be at least 1 second".into(),
            }
            .into());
        }

        if self.pipeline.output_file.is_empty() {
            return Err(ConfigError::MissingField {
                field: "output_file",
            }
            .into());
        }

        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_weights_sum_to_one() {
        let s = ScoringConfig::default();
        let sum = s.sentiment_weight + s.movement_weight + s.volume_weight;
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let toml = r#"
            [scoring]
            sentiment_weight = 0.6
            movement_weight = 0.4
            volume_weight = 0.2
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        let toml = r#"
            [scoring]
            sentiment_weight = 1.2
            movement_weight = -0.4
            volume_weight = 0.2
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let toml = r#"
            [scheduler]
            interval_secs = 0
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let toml = r#"
            [logging]
            level = "debug"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.scheduler.interval_secs, 600);
        assert_eq!(config.pipeline.news_file, "data/news_processed.json");
    }
}
