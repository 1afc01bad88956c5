use crate::models::Language;
use thiserror::Error;

/// Errors produced by the analysis core.
///
/// Detection failures are recoverable (callers default to English);
/// scorer failures propagate, since retrying a pure function on the same
/// input cannot succeed; a missing scorer registration is a setup bug.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("language detection failed: {0}")]
    LanguageDetection(String),

    #[error("{analyzer} sentiment analysis failed: {message}")]
    SentimentAnalysis { analyzer: String, message: String },

    #[error("no scorer registered for language '{0}' and no english fallback available")]
    Configuration(Language),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
