//! OCR Metrics - CER and WER evaluation for Jawi OCR
//!
//! Character Error Rate and Word Error Rate between a reference transcription
//! and an OCR hypothesis, with Unicode normalization tuned for Jawi and other
//! Arabic-script text.
//!
//! ```
//! use ocr_metrics::{cer, wer, MetricOptions};
//!
//! let opts = MetricOptions::default();
//! assert_eq!(cer("سلام عليكم", "سلام عليكم", &opts).unwrap(), 0.0);
//! assert_eq!(wer("hello world", "hello earth", &opts).unwrap(), 0.5);
//! ```

mod config;
mod distance;
mod error;
mod jawi;
mod metrics;
mod normalize;
mod text;

pub use config::{MetricOptions, NormalizationConfig};
pub use distance::{distance_matrix, edit_distance};
pub use error::{MetricsError, Result};
pub use jawi::fold_jawi;
pub use metrics::{cer, cer_stats, normalize_text, wer, wer_stats, ErrorStats};
pub use normalize::normalize;
pub use text::{IntoText, Text};

// Older callers know the pairwise functions by these names.
pub use metrics::{cer as cer_pair, wer as wer_pair};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
