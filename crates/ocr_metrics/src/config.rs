use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};

/// Which optional stripping steps the normalizer runs.
///
/// NFC composition, Jawi letter folding and whitespace collapsing always run;
/// these flags only control the destructive steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Strip Unicode punctuation and symbols (categories `P*` and `S*`).
    /// Defaults to `true`.
    #[serde(default = "default_true")]
    pub remove_punctuation: bool,
    /// Strip decimal digits (category `Nd`, ASCII and Arabic-Indic alike).
    /// Defaults to `true`.
    #[serde(default = "default_true")]
    pub remove_numbers: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            remove_numbers: true,
        }
    }
}

impl NormalizationConfig {
    pub fn with_remove_punctuation(mut self, remove: bool) -> Self {
        self.remove_punctuation = remove;
        self
    }

    pub fn with_remove_numbers(mut self, remove: bool) -> Self {
        self.remove_numbers = remove;
        self
    }
}

/// Options for [`cer`](crate::cer) and [`wer`](crate::wer).
///
/// `MetricOptions::default()` normalizes both texts and strips punctuation
/// and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOptions {
    /// Run the normalizer before tokenizing. When `false` the raw text is
    /// compared and `normalization` is ignored.
    #[serde(default = "default_true")]
    pub normalize: bool,
    #[serde(flatten)]
    pub normalization: NormalizationConfig,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            normalization: NormalizationConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RootOptionsToml {
    #[serde(default)]
    metrics: Option<MetricOptions>,
}

impl MetricOptions {
    /// Compare the texts exactly as given.
    pub fn raw() -> Self {
        Self {
            normalize: false,
            ..Self::default()
        }
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_remove_punctuation(mut self, remove: bool) -> Self {
        self.normalization.remove_punctuation = remove;
        self
    }

    pub fn with_remove_numbers(mut self, remove: bool) -> Self {
        self.normalization.remove_numbers = remove;
        self
    }

    /// Parse options from TOML text, either as top-level keys or under a
    /// `[metrics]` table. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let root: RootOptionsToml = toml::from_str(text)
            .map_err(|e| MetricsError::InvalidConfig(format!("failed to parse metric options: {e}")))?;
        if let Some(opts) = root.metrics {
            return Ok(opts);
        }
        toml::from_str(text)
            .map_err(|e| MetricsError::InvalidConfig(format!("failed to parse metric options: {e}")))
    }
}

impl From<NormalizationConfig> for MetricOptions {
    fn from(normalization: NormalizationConfig) -> Self {
        Self {
            normalize: true,
            normalization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MetricOptions::default();
        assert!(opts.normalize);
        assert!(opts.normalization.remove_punctuation);
        assert!(opts.normalization.remove_numbers);
        assert!(!MetricOptions::raw().normalize);
    }

    #[test]
    fn test_toml_top_level() {
        let opts = MetricOptions::from_toml_str("remove_numbers = false\n").unwrap();
        assert!(opts.normalize);
        assert!(opts.normalization.remove_punctuation);
        assert!(!opts.normalization.remove_numbers);
    }

    #[test]
    fn test_toml_metrics_table() {
        let text = r#"
            [metrics]
            normalize = false
            remove_punctuation = false
        "#;
        let opts = MetricOptions::from_toml_str(text).unwrap();
        assert_eq!(opts, MetricOptions::raw().with_remove_punctuation(false));
    }

    #[test]
    fn test_toml_empty_is_default() {
        assert_eq!(MetricOptions::from_toml_str("").unwrap(), MetricOptions::default());
    }

    #[test]
    fn test_toml_wrong_type() {
        let err = MetricOptions::from_toml_str("normalize = \"yes\"").unwrap_err();
        assert!(matches!(err, MetricsError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_syntax_error_message() {
        let err = MetricOptions::from_toml_str("remove_numbers = ").unwrap_err();
        match err {
            MetricsError::InvalidConfig(msg) => {
                assert!(msg.starts_with("failed to parse metric options"), "{msg}");
                assert!(!msg.contains("[metrics]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
