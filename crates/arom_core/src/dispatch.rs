//! Language-aware dispatch: detect, pick a registered scorer (falling back
//! to English), and stamp the result with which path produced it.

use crate::detect::LanguageDetector;
use crate::english::EnhancedVaderScorer;
use crate::error::{AnalyzerError, Result};
use crate::models::{Language, SentimentScore};
use crate::thai::ThaiLexiconScorer;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Common interface over the per-language scorers.
///
/// A closed set of implementations selected through the dispatcher's
/// registry; no further hierarchy behind it.
pub trait SentimentScorer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<SentimentScore>;
    fn name(&self) -> &'static str;
    fn supported_languages(&self) -> &'static [Language];
}

impl SentimentScorer for ThaiLexiconScorer {
    fn analyze(&self, text: &str) -> Result<SentimentScore> {
        ThaiLexiconScorer::analyze(self, text)
    }

    fn name(&self) -> &'static str {
        crate::thai::ANALYZER_NAME
    }

    fn supported_languages(&self) -> &'static [Language] {
        &[Language::Thai, Language::Mixed]
    }
}

impl SentimentScorer for EnhancedVaderScorer {
    fn analyze(&self, text: &str) -> Result<SentimentScore> {
        EnhancedVaderScorer::analyze(self, text)
    }

    fn name(&self) -> &'static str {
        crate::english::ANALYZER_NAME
    }

    fn supported_languages(&self) -> &'static [Language] {
        &[Language::English]
    }
}

/// Registry of {language → scorer} driven by the language detector.
///
/// Scorers are read-only after registration, so a dispatcher can be shared
/// across threads for batch work without synchronization.
pub struct SentimentDispatcher {
    detector: LanguageDetector,
    scorers: HashMap<Language, Box<dyn SentimentScorer>>,
}

impl SentimentDispatcher {
    pub fn new(detector: LanguageDetector) -> Self {
        Self {
            detector,
            scorers: HashMap::new(),
        }
    }

    /// Register a scorer for a language tag, replacing any previous one.
    /// Registering outside the scorer's declared support is allowed (the
    /// fallback policy depends on it) but logged.
    pub fn register(&mut self, language: Language, scorer: Box<dyn SentimentScorer>) {
        if !scorer.supported_languages().contains(&language) {
            warn!(
                %language,
                scorer = scorer.name(),
                "registering scorer outside its declared language support"
            );
        }
        self.scorers.insert(language, scorer);
    }

    pub fn registered_languages(&self) -> Vec<Language> {
        self.scorers.keys().copied().collect()
    }

    /// Detect the language, route to a scorer, and stamp provenance.
    ///
    /// Lookup is exact tag first, then the English scorer as fallback; only
    /// when neither exists does this fail, and that failure is a setup bug
    /// (`AnalyzerError::Configuration`), not a transient condition.
    pub fn analyze(&self, text: &str) -> Result<SentimentScore> {
        let language = match self.detector.detect(text) {
            Ok(language) => language,
            Err(e) => {
                // Detection failure is non-fatal; English is the default path.
                warn!("language detection failed, defaulting to english: {e}");
                Language::English
            }
        };

        let scorer = self
            .scorers
            .get(&language)
            .or_else(|| {
                if language != Language::English {
                    self.scorers.get(&Language::English)
                } else {
                    None
                }
            })
            .ok_or(AnalyzerError::Configuration(language))?;

        debug!(%language, scorer = scorer.name(), "dispatching sentiment analysis");

        let mut score = scorer.analyze(text)?;
        score.analyzer_used = format!("{}_{}", scorer.name(), language);
        Ok(score)
    }

    /// Analyze each text independently; one failure never aborts the
    /// batch, and output order matches input order.
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Result<SentimentScore>> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dispatcher() -> SentimentDispatcher {
        let mut d = SentimentDispatcher::new(LanguageDetector::new());
        d.register(Language::English, Box::new(EnhancedVaderScorer::default()));
        d.register(Language::Thai, Box::new(ThaiLexiconScorer::new()));
        d
    }

    #[test]
    fn thai_text_routes_to_thai_scorer() {
        let score = full_dispatcher().analyze("ดีมาก").unwrap();
        assert_eq!(score.analyzer_used, "thai_lexicon_thai");
        assert!(score.compound > 0.0);
    }

    #[test]
    fn english_text_routes_to_vader() {
        let score = full_dispatcher().analyze("I love this so much!").unwrap();
        assert_eq!(score.analyzer_used, "vader_enhanced_english");
        assert!(score.compound > 0.0);
    }

    #[test]
    fn mixed_text_falls_back_to_english_scorer() {
        // No MIXED registration, so the English scorer takes it.
        let score = full_dispatcher()
            .analyze("Pretty good mix สวย nice เด็ด!")
            .unwrap();
        assert_eq!(score.analyzer_used, "vader_enhanced_mixed");
    }

    #[test]
    fn thai_text_falls_back_when_only_english_registered() {
        let mut d = SentimentDispatcher::new(LanguageDetector::new());
        d.register(Language::English, Box::new(EnhancedVaderScorer::default()));
        let score = d.analyze("แย่มาก เกลียดเลย ไม่ชอบ").unwrap();
        assert_eq!(score.analyzer_used, "vader_enhanced_thai");
    }

    #[test]
    fn empty_registry_is_a_configuration_error() {
        let d = SentimentDispatcher::new(LanguageDetector::new());
        let err = d.analyze("hello").unwrap_err();
        match err {
            AnalyzerError::Configuration(language) => assert_eq!(language, Language::English),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn missing_english_fallback_names_detected_language() {
        let mut d = SentimentDispatcher::new(LanguageDetector::new());
        d.register(Language::Thai, Box::new(ThaiLexiconScorer::new()));
        let err = d.analyze("hello world, this is english").unwrap_err();
        match err {
            AnalyzerError::Configuration(language) => assert_eq!(language, Language::English),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn empty_text_dispatches_with_unknown_tag() {
        let score = full_dispatcher().analyze("").unwrap();
        assert_eq!(score.analyzer_used, "vader_enhanced_unknown");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neutral, 1.0);
        assert_eq!(score.confidence, 1.0);
    }

    #[test]
    fn batch_preserves_order_and_isolates_items() {
        let d = full_dispatcher();
        let texts = ["ดีมาก", "", "I hate this"];
        let results = d.analyze_batch(&texts);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.is_ok()));
        let scores: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();
        assert!(scores[0].compound > 0.0);
        assert_eq!(scores[1].compound, 0.0);
        assert!(scores[2].compound < 0.0);
    }

    #[test]
    fn analysis_is_idempotent() {
        let d = full_dispatcher();
        let text = "Pretty good mix สวย nice เด็ด! 😊";
        assert_eq!(d.analyze(text).unwrap(), d.analyze(text).unwrap());
    }
}
