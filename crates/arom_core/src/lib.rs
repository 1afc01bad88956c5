//! # arom core
//!
//! Language-aware sentiment analysis for short social-media text that may
//! be English, Thai, or a mixture of both, without being told the language
//! in advance.
//!
//! ## Pipeline
//!
//! 1. [`LanguageDetector`] classifies the text into
//!    {English, Thai, Mixed, Unknown} from character composition and
//!    curated-word cues.
//! 2. [`SentimentDispatcher`] routes the text to a registered scorer for
//!    that tag, falling back to the English scorer when no exact match is
//!    registered.
//! 3. [`ThaiLexiconScorer`] scores Thai/mixed text from word lexicons with
//!    negation parity, intensity windows, phrase bonuses, and emoji
//!    sentiment; [`EnhancedVaderScorer`] augments VADER's English compound
//!    score with emoji and capitalization signals.
//!
//! Every component is a pure function of the input text once constructed;
//! instances can be shared read-only across threads.

pub mod config;
pub mod detect;
pub mod dispatch;
pub mod english;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod thai;

pub use config::{AnalysisConfig, AromConfig, ExportConfig};
pub use detect::{Detection, LanguageDetector};
pub use dispatch::{SentimentDispatcher, SentimentScorer};
pub use english::EnhancedVaderScorer;
pub use error::{AnalyzerError, Result};
pub use models::{
    AnalysisReport, AnalyzedText, Comment, Language, LanguageBreakdown, Post, SentimentLabel,
    SentimentScore,
};
pub use thai::ThaiLexiconScorer;

/// Detect the language of a text together with confidence and a
/// percentage breakdown.
pub fn detect_language(text: &str) -> Detection {
    let detector = LanguageDetector::new();
    let language = detector.detect(text).unwrap_or(Language::Unknown);
    Detection {
        language,
        confidence: detector.confidence(text),
        breakdown: detector.breakdown(text),
    }
}

/// Build the standard dispatcher: VADER-enhanced scoring for English, the
/// Thai lexicon scorer for Thai. Mixed and unknown text reaches the
/// English scorer through the fallback policy.
pub fn default_dispatcher(config: &AromConfig) -> SentimentDispatcher {
    let mut dispatcher = SentimentDispatcher::new(LanguageDetector::new());
    dispatcher.register(
        Language::English,
        Box::new(EnhancedVaderScorer::new(
            config.analysis.enable_emoji_boost,
            config.analysis.enable_caps_boost,
        )),
    );
    dispatcher.register(Language::Thai, Box::new(ThaiLexiconScorer::new()));
    dispatcher
}
