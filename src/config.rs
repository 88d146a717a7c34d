//! Configuration file handling for the blob estimation pipeline.
//!
//! Loads configuration from a TOML file; every field has a default so a
//! missing file or a partial file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pipeline::region::ExpandParams;

/// Configuration for the blob estimator.
///
/// ```toml
/// [detection]
/// peak_fraction = 0.2
/// fill_fraction = 0.3
/// kernel_reach = 10
///
/// [annotate]
/// enabled = true
/// line_width = 2
///
/// [output]
/// prefix = "frame0"
/// trace = true
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub annotate: AnnotateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Thresholds and kernel size for peak windowing and flood fill.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Fraction of the histogram peak value that bounds the candidate
    /// window (0, 1]
    #[serde(default = "default_peak_fraction")]
    pub peak_fraction: f64,
    /// Fraction of the seed intensity a neighbor must exceed to join the
    /// cluster (0, 1]
    #[serde(default = "default_fill_fraction")]
    pub fill_fraction: f64,
    /// Chebyshev reach of the flood-fill neighbor kernel
    #[serde(default = "default_kernel_reach")]
    pub kernel_reach: u32,
}

/// Rectangle annotation of the detected region.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Edge strip thickness in pixels
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

/// Report artifacts written per frame.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Histogram dumps go to `<prefix>-histrawx.dat` / `<prefix>-histrawy.dat`;
    /// no dumps are written when unset
    #[serde(default)]
    pub prefix: Option<String>,
    /// Blank the red/green channels of clustered pixels for visual
    /// debugging
    #[serde(default = "default_true")]
    pub trace: bool,
}

fn default_peak_fraction() -> f64 {
    0.2
}

fn default_fill_fraction() -> f64 {
    0.3
}

fn default_kernel_reach() -> u32 {
    10
}

fn default_line_width() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            peak_fraction: default_peak_fraction(),
            fill_fraction: default_fill_fraction(),
            kernel_reach: default_kernel_reach(),
        }
    }
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            line_width: default_line_width(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            trace: true,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed, or if a
    /// value is out of range.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = |field, value: f64| {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be in (0, 1], got {}", value),
                })
            }
        };
        fraction("detection.peak_fraction", self.detection.peak_fraction)?;
        fraction("detection.fill_fraction", self.detection.fill_fraction)?;
        if self.detection.kernel_reach == 0 {
            return Err(ConfigError::InvalidValue {
                field: "detection.kernel_reach",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.annotate.enabled && self.annotate.line_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "annotate.line_width",
                reason: "must be at least 1 when annotation is enabled".to_string(),
            });
        }
        Ok(())
    }

    /// The expansion parameters this configuration selects.
    pub fn expand_params(&self) -> ExpandParams {
        ExpandParams {
            peak_fraction: self.detection.peak_fraction,
            fill_fraction: self.detection.fill_fraction,
            kernel_reach: self.detection.kernel_reach,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}
