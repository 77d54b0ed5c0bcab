//! Configuration Module
//! Chart dimensions, margins and transition timing, optionally loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default animated transition length in milliseconds.
pub const DEFAULT_TRANSITION_MS: f64 = 750.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid {chart} config: {reason}")]
    Invalid { chart: &'static str, reason: String },
}

/// Space between the surface edge and the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

impl Margins {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Construction-time parameters for a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub transition_ms: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            margins: Margins::default(),
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl ChartConfig {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Width of the plotting area inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plotting area inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    fn validate(&self, chart: &'static str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid { chart, reason };

        let m = &self.margins;
        if [m.top, m.bottom, m.left, m.right].iter().any(|v| *v < 0.0) {
            return Err(invalid("margins must not be negative".to_string()));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(invalid(format!(
                "{}x{} leaves no room inside the margins",
                self.width, self.height
            )));
        }
        if self.transition_ms.is_nan() || self.transition_ms < 0.0 {
            return Err(invalid(format!(
                "transition_ms must be >= 0, got {}",
                self.transition_ms
            )));
        }
        Ok(())
    }
}

/// Configuration for the three charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bar: ChartConfig,
    pub line: ChartConfig,
    pub pie: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bar: ChartConfig::sized(500.0, 300.0),
            line: ChartConfig::sized(500.0, 300.0),
            pie: ChartConfig::sized(300.0, 300.0),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bar.validate("bar")?;
        self.line.validate("line")?;
        self.pie.validate("pie")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_sizes() {
        let config = AppConfig::default();
        assert_eq!(config.bar.width, 500.0);
        assert_eq!(config.line.height, 300.0);
        assert_eq!(config.pie.width, 300.0);
        assert_eq!(config.pie.margins, Margins::uniform(30.0));
        assert_eq!(config.bar.transition_ms, 750.0);
        assert_eq!(config.bar.inner_width(), 440.0);
        assert_eq!(config.bar.inner_height(), 240.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            AppConfig::from_json(r#"{ "pie": { "width": 400, "margins": { "top": 10 } } }"#)
                .unwrap();
        assert_eq!(config.pie.width, 400.0);
        assert_eq!(config.pie.height, 300.0);
        assert_eq!(config.pie.margins.top, 10.0);
        assert_eq!(config.pie.margins.left, 30.0);
        assert_eq!(config.bar, AppConfig::default().bar);
    }

    #[test]
    fn rejects_margins_larger_than_surface() {
        let err = AppConfig::from_json(r#"{ "line": { "width": 50 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { chart: "line", .. }));
    }

    #[test]
    fn rejects_negative_duration() {
        let err = AppConfig::from_json(r#"{ "bar": { "transition_ms": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { chart: "bar", .. }));
    }

    #[test]
    fn reports_parse_errors() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
