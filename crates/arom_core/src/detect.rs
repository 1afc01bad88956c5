//! Rule-based language detection for Thai/English social-media text.
//!
//! Combines character-set composition (Thai Unicode block vs ASCII letters)
//! with curated common-word hits. No model, no external service; pure
//! function of the input text.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::{COMMON_ENGLISH_WORDS, COMMON_THAI_WORDS};
use crate::models::{Language, LanguageBreakdown};
use std::collections::HashSet;

/// Weight of character composition vs curated-word hits in the combined
/// per-language score.
const CHAR_WEIGHT: f64 = 0.7;
const WORD_WEIGHT: f64 = 0.3;

fn is_thai_char(c: char) -> bool {
    // Thai Unicode block: U+0E00–U+0E7F
    ('\u{0e00}'..='\u{0e7f}').contains(&c)
}

/// Detection outcome with its diagnostics, as returned by
/// [`crate::detect_language`].
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub language: Language,
    pub confidence: f64,
    pub breakdown: LanguageBreakdown,
}

/// Classifies text into {English, Thai, Mixed, Unknown}.
///
/// Stateless beyond the immutable curated word sets; safe to share across
/// threads and reuse across calls.
pub struct LanguageDetector {
    common_thai: HashSet<&'static str>,
    common_english: HashSet<&'static str>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            common_thai: COMMON_THAI_WORDS.iter().copied().collect(),
            common_english: COMMON_ENGLISH_WORDS.iter().copied().collect(),
        }
    }

    /// Detect the primary language of the text.
    ///
    /// Empty or whitespace-only text is [`Language::Unknown`]. Errors are
    /// recoverable; callers may default to English for dispatch.
    pub fn detect(&self, text: &str) -> Result<Language> {
        if text.trim().is_empty() {
            return Ok(Language::Unknown);
        }

        let (thai_score, english_score) = self.language_scores(text)?;

        // Evaluated in this exact order; reordering changes the semantics.
        let language = if thai_score >= 0.3 && english_score >= 0.3 {
            Language::Mixed
        } else if thai_score > english_score && thai_score >= 0.2 {
            Language::Thai
        } else if english_score > thai_score && english_score >= 0.3 {
            Language::English
        } else if thai_score > 0.1 || english_score > 0.1 {
            // Some bilingual signal, but too weak to commit either way
            Language::Mixed
        } else {
            Language::Unknown
        };
        Ok(language)
    }

    /// Confidence in the detection result, in [0, 1].
    ///
    /// 1.0 for empty text (confidently unknown); 0.6 when the two language
    /// scores are within 0.2 of each other; otherwise proportional to the
    /// dominant score.
    pub fn confidence(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 1.0;
        }

        match self.language_scores(text) {
            Ok((thai_score, english_score)) => {
                let max_score = thai_score.max(english_score);
                let min_score = thai_score.min(english_score);
                if max_score - min_score < 0.2 {
                    0.6
                } else {
                    (max_score * 1.2).min(1.0)
                }
            }
            Err(_) => 0.0,
        }
    }

    /// Percentage breakdown of language composition, normalized to sum
    /// to ≈100.
    pub fn breakdown(&self, text: &str) -> LanguageBreakdown {
        if text.trim().is_empty() {
            return LanguageBreakdown::unknown_text();
        }

        let (thai_ratio, english_ratio, other_ratio) = self.character_ratios(text);
        let thai_word_conf = self.word_confidence(text, &self.common_thai);
        let english_word_conf = self.word_confidence(text, &self.common_english);

        let mut thai = (thai_ratio * CHAR_WEIGHT + thai_word_conf * WORD_WEIGHT) * 100.0;
        let mut english = (english_ratio * CHAR_WEIGHT + english_word_conf * WORD_WEIGHT) * 100.0;
        let mut other = other_ratio * 100.0;

        let total = thai + english + other;
        if total > 0.0 {
            thai = thai / total * 100.0;
            english = english / total * 100.0;
            other = other / total * 100.0;
        }

        let mixed = if thai > 20.0 && english > 20.0 {
            thai.min(english) * 2.0
        } else {
            0.0
        };

        LanguageBreakdown {
            thai: round2(thai),
            english: round2(english),
            other: round2(other),
            mixed: round2(mixed),
            unknown: 0.0,
        }
    }

    /// Combined (thai, english) scores blending character composition with
    /// curated-word hits.
    fn language_scores(&self, text: &str) -> Result<(f64, f64)> {
        let (thai_ratio, english_ratio, _) = self.character_ratios(text);
        if !(thai_ratio.is_finite() && english_ratio.is_finite()) {
            return Err(AnalyzerError::LanguageDetection(format!(
                "non-finite character ratios for input of {} bytes",
                text.len()
            )));
        }

        let thai_word_conf = self.word_confidence(text, &self.common_thai);
        let english_word_conf = self.word_confidence(text, &self.common_english);

        Ok((
            thai_ratio * CHAR_WEIGHT + thai_word_conf * WORD_WEIGHT,
            english_ratio * CHAR_WEIGHT + english_word_conf * WORD_WEIGHT,
        ))
    }

    /// Ratios of Thai-block chars, ASCII letters, and everything else,
    /// over the printable non-whitespace characters.
    fn character_ratios(&self, text: &str) -> (f64, f64, f64) {
        let mut thai_chars = 0usize;
        let mut english_chars = 0usize;
        let mut printable = 0usize;

        for c in text.chars() {
            if is_thai_char(c) {
                thai_chars += 1;
            }
            if c.is_ascii_alphabetic() {
                english_chars += 1;
            }
            if !c.is_whitespace() && !c.is_control() {
                printable += 1;
            }
        }

        if printable == 0 {
            return (0.0, 0.0, 0.0);
        }

        let thai_ratio = thai_chars as f64 / printable as f64;
        let english_ratio = english_chars as f64 / printable as f64;
        let other_ratio = (1.0 - thai_ratio - english_ratio).max(0.0);
        (thai_ratio, english_ratio, other_ratio)
    }

    /// Fraction of tokens present in a curated word set, doubled to boost
    /// the signal and capped at 1.0. Punctuation and symbols are stripped
    /// first; Thai combining marks count as word characters.
    fn word_confidence(&self, text: &str, word_set: &HashSet<&'static str>) -> f64 {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() || is_thai_char(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let words: Vec<&str> = cleaned.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let hits = words.iter().filter(|w| word_set.contains(**w)).count();
        (hits as f64 / words.len() as f64 * 2.0).min(1.0)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::new()
    }

    #[test]
    fn empty_text_is_unknown_with_full_confidence() {
        let d = detector();
        assert_eq!(d.detect("").unwrap(), Language::Unknown);
        assert_eq!(d.detect("   \t\n").unwrap(), Language::Unknown);
        assert_eq!(d.confidence(""), 1.0);
        assert_eq!(d.breakdown(""), LanguageBreakdown::unknown_text());
    }

    #[test]
    fn pure_thai_text_is_thai() {
        let d = detector();
        assert_eq!(d.detect("ดีมาก").unwrap(), Language::Thai);
        assert_eq!(d.detect("แย่มาก เกลียดเลย ไม่ชอบ").unwrap(), Language::Thai);
    }

    #[test]
    fn plain_english_text_is_english() {
        let d = detector();
        assert_eq!(
            d.detect("This is amazing! I love it! 😍").unwrap(),
            Language::English
        );
        assert_eq!(d.detect("the cat sat on the mat").unwrap(), Language::English);
    }

    #[test]
    fn bilingual_text_is_mixed() {
        let d = detector();
        assert_eq!(
            d.detect("Pretty good mix สวย nice เด็ด!").unwrap(),
            Language::Mixed
        );
    }

    #[test]
    fn digits_and_symbols_are_unknown() {
        let d = detector();
        assert_eq!(d.detect("12345 !!! ???").unwrap(), Language::Unknown);
    }

    #[test]
    fn confidence_is_moderate_for_close_scores() {
        let d = detector();
        // Near-balanced bilingual text: scores within 0.2 of each other
        assert!((d.confidence("รัก love") - 0.6).abs() < 1e-9);
        // Clearly dominated text gets high confidence
        assert!(d.confidence("สวัสดีครับ ผมชอบอาหารไทยมาก") > 0.6);
    }

    #[test]
    fn breakdown_sums_to_one_hundred() {
        let d = detector();
        for text in [
            "hello world",
            "สวัสดีครับ",
            "Pretty good mix สวย nice เด็ด!",
            "12345 $$$",
        ] {
            let b = d.breakdown(text);
            let total = b.thai + b.english + b.other + b.unknown;
            assert!((total - 100.0).abs() < 0.5, "{text}: total {total}");
        }
    }

    #[test]
    fn breakdown_flags_mixed_overlap() {
        let d = detector();
        let b = d.breakdown("Pretty good mix สวย nice เด็ด!");
        assert!(b.mixed > 0.0);
        let b = d.breakdown("hello world");
        assert_eq!(b.mixed, 0.0);
    }

    #[test]
    fn thai_score_monotone_in_thai_chars() {
        let d = detector();
        let mut previous = -1.0;
        for n in 0..50 {
            let text = format!("hello world {}", "ก".repeat(n));
            let (thai_score, _) = d.language_scores(&text).unwrap();
            assert!(
                thai_score >= previous - 1e-12,
                "thai_score decreased at n={n}: {thai_score} < {previous}"
            );
            previous = thai_score;
        }
    }

    proptest! {
        #[test]
        fn detection_never_panics_and_confidence_in_range(text in "\\PC{0,80}") {
            let d = detector();
            let _ = d.detect(&text).unwrap();
            let c = d.confidence(&text);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn detection_is_deterministic(text in "\\PC{0,80}") {
            let d = detector();
            prop_assert_eq!(d.detect(&text).unwrap(), d.detect(&text).unwrap());
            prop_assert_eq!(d.breakdown(&text), d.breakdown(&text));
        }
    }
}
