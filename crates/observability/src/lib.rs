//! Tracing/logging (shared setup).

use serde::{Deserialize, Serialize};

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Compact human-readable lines.
    Text,
}

/// Unrecognised log format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format `{0}` (expected `json` or `text`)")]
pub struct UnknownLogFormat(pub String);

impl core::str::FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

/// Initialize process-wide tracing with the default (JSON) format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::default());
}

/// Initialize process-wide tracing with an explicit format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
