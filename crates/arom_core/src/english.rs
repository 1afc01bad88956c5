//! English scoring: VADER compound score augmented with emoji and
//! capitalization signals.
//!
//! The base polarity comes from the `vader_sentiment` crate and is treated
//! as a black box; this layer only adjusts its compound score and widens
//! the confidence by how far the adjustment moved it.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::ENGLISH_EMOJI;
use crate::models::SentimentScore;
use std::collections::HashMap;
use vader_sentiment::SentimentIntensityAnalyzer;

pub const ANALYZER_NAME: &str = "vader_enhanced";

/// Weight of the averaged emoji sentiment added to the base compound.
const EMOJI_WEIGHT: f64 = 0.3;

/// Scores for English text by enhancing VADER's output.
///
/// Both boosts are togglable at construction; with both disabled this is a
/// plain pass-through of the VADER scores.
pub struct EnhancedVaderScorer {
    emoji_sentiment: HashMap<char, f64>,
    emoji_boost: bool,
    caps_boost: bool,
}

impl Default for EnhancedVaderScorer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl EnhancedVaderScorer {
    pub fn new(emoji_boost: bool, caps_boost: bool) -> Self {
        Self {
            emoji_sentiment: ENGLISH_EMOJI.iter().copied().collect(),
            emoji_boost,
            caps_boost,
        }
    }

    /// Score an English text.
    pub fn analyze(&self, text: &str) -> Result<SentimentScore> {
        if text.trim().is_empty() {
            return Ok(SentimentScore::empty_text(ANALYZER_NAME));
        }

        let base = base_scores(text);
        if !base.compound.is_finite() {
            return Err(AnalyzerError::SentimentAnalysis {
                analyzer: ANALYZER_NAME.to_string(),
                message: "base analyzer returned a non-finite compound score".to_string(),
            });
        }
        let mut compound = base.compound;

        if self.emoji_boost {
            compound += self.emoji_score(text) * EMOJI_WEIGHT;
        }
        if self.caps_boost {
            compound *= caps_multiplier(text);
        }
        let compound = compound.clamp(-1.0, 1.0);

        // Confidence starts at the base distance from neutral and widens
        // with the size of the adjustment.
        let confidence = (base.compound.abs() + (compound - base.compound).abs() * 0.5).min(1.0);

        Ok(SentimentScore {
            compound,
            positive: base.positive,
            negative: base.negative,
            neutral: base.neutral,
            confidence,
            analyzer_used: ANALYZER_NAME.to_string(),
        })
    }

    /// Average signed emoji value, mirroring the Thai scorer's table scan.
    fn emoji_score(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for c in text.chars() {
            if let Some(&value) = self.emoji_sentiment.get(&c) {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }
}

struct BaseScores {
    compound: f64,
    positive: f64,
    negative: f64,
    neutral: f64,
}

/// Base polarity from the external VADER capability.
fn base_scores(text: &str) -> BaseScores {
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    BaseScores {
        compound: scores.get("compound").copied().unwrap_or(0.0),
        positive: scores.get("pos").copied().unwrap_or(0.0),
        negative: scores.get("neg").copied().unwrap_or(0.0),
        neutral: scores.get("neu").copied().unwrap_or(1.0),
    }
}

/// Multiplier from the share of uppercase letters: 1.1 for moderate
/// shouting (20–60% caps), 1.2 above that, otherwise unchanged.
fn caps_multiplier(text: &str) -> f64 {
    let caps = text.chars().filter(|c| c.is_uppercase()).count();
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return 1.0;
    }

    let ratio = caps as f64 / letters as f64;
    if (0.2..=0.6).contains(&ratio) {
        1.1
    } else if ratio > 0.6 {
        1.2
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let s = EnhancedVaderScorer::default().analyze("  ").unwrap();
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_eq!(s.confidence, 1.0);
        assert_eq!(s.analyzer_used, "vader_enhanced");
    }

    #[test]
    fn positive_emoji_boosts_above_base() {
        let text = "This is amazing! I love it! 😍";
        let base = base_scores(text);
        let enhanced = EnhancedVaderScorer::new(true, false).analyze(text).unwrap();
        assert!(
            enhanced.compound > base.compound,
            "enhanced {} <= base {}",
            enhanced.compound,
            base.compound
        );
    }

    #[test]
    fn disabled_boosts_pass_base_through() {
        let text = "This is amazing! I love it! 😍";
        let base = base_scores(text);
        let plain = EnhancedVaderScorer::new(false, false).analyze(text).unwrap();
        assert!((plain.compound - base.compound).abs() < 1e-12);
    }

    #[test]
    fn all_caps_multiplies_compound() {
        let text = "THIS IS GREAT";
        let base = base_scores(text);
        let enhanced = EnhancedVaderScorer::new(false, true).analyze(text).unwrap();
        assert!((enhanced.compound - (base.compound * 1.2).clamp(-1.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn caps_multiplier_tiers() {
        assert_eq!(caps_multiplier("hello there"), 1.0);
        // 5 of 16 letters uppercase, inside the 20–60% band
        assert_eq!(caps_multiplier("HELLO there friend"), 1.1);
        assert_eq!(caps_multiplier("HELLO"), 1.2);
    }

    #[test]
    fn negative_text_stays_negative() {
        let s = EnhancedVaderScorer::default()
            .analyze("I hate this, it is terrible 😡")
            .unwrap();
        assert!(s.compound < 0.0);
    }

    #[test]
    fn confidence_widens_with_adjustment() {
        let text = "good 😍😍😍";
        let base = base_scores(text);
        let enhanced = EnhancedVaderScorer::new(true, false).analyze(text).unwrap();
        assert!(enhanced.confidence >= base.compound.abs());
        assert!(enhanced.confidence <= 1.0);
    }

    #[test]
    fn compound_is_clamped() {
        let s = EnhancedVaderScorer::default()
            .analyze("AMAZING WONDERFUL PERFECT EXCELLENT 😍🥰🤩")
            .unwrap();
        assert!(s.compound <= 1.0);
    }
}
