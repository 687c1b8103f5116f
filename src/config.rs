//! Configuration management for orgmark.
//!
//! Settings come from an optional TOML file, then environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ClassifierConfig;
use crate::models::LabelScheme;
use crate::services::annotation::{AnnotationError, AnnotationOptions, MarkerConfig, MarkerPair};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Marker literals inserted around organizations.
    #[serde(default)]
    pub markers: MarkerConfig,
    /// Model label interpretation.
    #[serde(default)]
    pub labels: LabelScheme,
    /// Remote classifier.
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Settings {
    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `ORGMARK_OPEN_MARKER`, `ORGMARK_CLOSE_MARKER`
    /// - `ORGMARK_BEGIN_LABEL`, `ORGMARK_INSIDE_LABEL`
    /// - `ORGMARK_CONTINUATION_PREFIX`
    /// - `ORGMARK_CLASSIFIER_ENDPOINT`
    /// - `ORGMARK_CLASSIFIER_API_KEY` (falls back to `HF_TOKEN`)
    /// - `ORGMARK_CLASSIFIER_TIMEOUT_SECS`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ORGMARK_OPEN_MARKER") {
            self.markers.open = val;
        }
        if let Some(val) = lookup("ORGMARK_CLOSE_MARKER") {
            self.markers.close = val;
        }
        if let Some(val) = lookup("ORGMARK_BEGIN_LABEL") {
            self.labels.begin_label = val;
        }
        if let Some(val) = lookup("ORGMARK_INSIDE_LABEL") {
            self.labels.inside_label = val;
        }
        if let Some(val) = lookup("ORGMARK_CONTINUATION_PREFIX") {
            self.labels.continuation_prefix = val;
        }
        if let Some(val) = lookup("ORGMARK_CLASSIFIER_ENDPOINT") {
            self.classifier.endpoint = Some(val);
        }

        // Explicit key wins over the generic Hugging Face token
        if let Some(val) = lookup("ORGMARK_CLASSIFIER_API_KEY") {
            self.classifier.api_key = Some(val);
        } else if self.classifier.api_key.is_none() {
            self.classifier.api_key = lookup("HF_TOKEN");
        }

        if let Some(val) = lookup("ORGMARK_CLASSIFIER_TIMEOUT_SECS") {
            match val.parse() {
                Ok(secs) => self.classifier.timeout_secs = secs,
                Err(_) => tracing::warn!(
                    "Ignoring ORGMARK_CLASSIFIER_TIMEOUT_SECS={:?}: not a number",
                    val
                ),
            }
        }
        self
    }

    /// Validated pipeline options.
    ///
    /// Bad marker literals surface as `AnnotationError::Markers`.
    pub fn annotation_options(&self) -> Result<AnnotationOptions, AnnotationError> {
        Ok(AnnotationOptions {
            markers: MarkerPair::try_from(&self.markers)?,
            labels: self.labels.clone(),
        })
    }

    /// Copy safe to print: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.classifier.api_key.is_some() {
            copy.classifier.api_key = Some("********".to_string());
        }
        copy
    }
}

/// Load settings from `path`, or defaults when no path is given.
///
/// Environment overrides are not applied here.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
