use crate::config::{MetricOptions, NormalizationConfig};
use crate::distance::edit_distance;
use crate::error::{MetricsError, Result};
use crate::normalize::normalize;
use crate::text::IntoText;
use serde::Serialize;

/// Edit count and lengths behind an error rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorStats {
    /// Minimum insertions + deletions + substitutions.
    pub edits: usize,
    /// Reference length in tokens (chars for CER, words for WER).
    pub reference_len: usize,
    pub hypothesis_len: usize,
    /// `edits / reference_len`. Can exceed 1.0.
    pub rate: f64,
}

impl ErrorStats {
    fn from_tokens<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Result<Self> {
        if reference.is_empty() {
            return Err(MetricsError::EmptyReference);
        }
        let edits = edit_distance(reference, hypothesis);
        Ok(Self {
            edits,
            reference_len: reference.len(),
            hypothesis_len: hypothesis.len(),
            rate: edits as f64 / reference.len() as f64,
        })
    }

    /// `1 - rate`, floored at zero.
    pub fn accuracy(&self) -> f64 {
        (1.0 - self.rate).max(0.0)
    }
}

fn prepare<R, H>(reference: R, hypothesis: H, options: &MetricOptions) -> Result<(String, String)>
where
    R: IntoText,
    H: IntoText,
{
    let reference = reference.into_text()?.into_string();
    let hypothesis = hypothesis.into_text()?.into_string();
    if !options.normalize {
        return Ok((reference, hypothesis));
    }
    Ok((
        normalize(&reference, &options.normalization),
        normalize(&hypothesis, &options.normalization),
    ))
}

/// Character error rate with its underlying counts.
pub fn cer_stats<R, H>(reference: R, hypothesis: H, options: &MetricOptions) -> Result<ErrorStats>
where
    R: IntoText,
    H: IntoText,
{
    let (reference, hypothesis) = prepare(reference, hypothesis, options)?;
    let ref_chars: Vec<char> = reference.chars().collect();
    let hyp_chars: Vec<char> = hypothesis.chars().collect();
    let stats = ErrorStats::from_tokens(&ref_chars, &hyp_chars)?;
    log::debug!(
        "[CER] edits={} ref_chars={} hyp_chars={} cer={:.4}",
        stats.edits,
        stats.reference_len,
        stats.hypothesis_len,
        stats.rate
    );
    Ok(stats)
}

/// Word error rate with its underlying counts.
pub fn wer_stats<R, H>(reference: R, hypothesis: H, options: &MetricOptions) -> Result<ErrorStats>
where
    R: IntoText,
    H: IntoText,
{
    let (reference, hypothesis) = prepare(reference, hypothesis, options)?;
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();
    let stats = ErrorStats::from_tokens(&ref_words, &hyp_words)?;
    log::debug!(
        "[WER] edits={} ref_words={} hyp_words={} wer={:.4}",
        stats.edits,
        stats.reference_len,
        stats.hypothesis_len,
        stats.rate
    );
    Ok(stats)
}

/// Character Error Rate: `(S + D + I) / reference chars`.
///
/// 0.0 is a perfect match; values above 1.0 mean the hypothesis is much
/// longer than, or very different from, the reference.
///
/// # Errors
///
/// [`MetricsError::InvalidText`] if either input is not text, and
/// [`MetricsError::EmptyReference`] if the reference has no characters after
/// optional normalization.
///
/// ```
/// use ocr_metrics::{cer, MetricOptions};
///
/// let opts = MetricOptions::default();
/// assert_eq!(cer("hello", "hallo", &opts).unwrap(), 0.2);
/// assert_eq!(cer("a", "aaaa", &opts).unwrap(), 3.0);
/// ```
pub fn cer<R, H>(reference: R, hypothesis: H, options: &MetricOptions) -> Result<f64>
where
    R: IntoText,
    H: IntoText,
{
    cer_stats(reference, hypothesis, options).map(|s| s.rate)
}

/// Word Error Rate: `(S + D + I) / reference words`, words being
/// whitespace-separated runs.
///
/// Fails under the same conditions as [`cer`].
///
/// ```
/// use ocr_metrics::{wer, MetricOptions};
///
/// let rate = wer("hello world", "hello earth", &MetricOptions::default()).unwrap();
/// assert_eq!(rate, 0.5);
/// ```
pub fn wer<R, H>(reference: R, hypothesis: H, options: &MetricOptions) -> Result<f64>
where
    R: IntoText,
    H: IntoText,
{
    wer_stats(reference, hypothesis, options).map(|s| s.rate)
}

/// Normalize `text` for evaluation; see [`normalize`](crate::normalize()).
///
/// ```
/// use ocr_metrics::{normalize_text, NormalizationConfig};
///
/// let out = normalize_text("Hello, World! 123", &NormalizationConfig::default()).unwrap();
/// assert_eq!(out, "Hello World");
/// ```
pub fn normalize_text<T: IntoText>(text: T, config: &NormalizationConfig) -> Result<String> {
    let text = text.into_text()?;
    Ok(normalize(text.as_str(), config))
}
