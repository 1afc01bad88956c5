//! Lexicon-based sentiment scoring for Thai (and Thai-heavy mixed) text.
//!
//! Deliberately avoids real Thai word segmentation: whitespace chunks are
//! split into maximal Thai-character runs, and every non-Thai character
//! becomes its own token. Latin words inside a chunk therefore decompose
//! into single letters. That limitation is part of the contract; the word
//! and phrase lexicons are written against it.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::{
    THAI_EMOJI, THAI_INTENSITY, THAI_NEGATION, THAI_NEGATIVE, THAI_NEGATIVE_PHRASES,
    THAI_POSITIVE, THAI_POSITIVE_PHRASES,
};
use crate::models::SentimentScore;
use std::collections::{HashMap, HashSet};

pub const ANALYZER_NAME: &str = "thai_lexicon";

/// Phrase matches add a flat bonus per phrase found in the raw text, on
/// top of any token-level matches. The double counting is intentional.
const PHRASE_BONUS: f64 = 0.5;

/// Symmetric damping applied to the normalized compound score so long
/// intensity chains cannot run away.
const COMPOUND_DAMPING: f64 = 0.5;

/// How many tokens on each side of a sentiment word are searched for
/// intensity modifiers.
const INTENSITY_WINDOW: usize = 2;

fn is_thai_char(c: char) -> bool {
    ('\u{0e00}'..='\u{0e7f}').contains(&c)
}

/// Lexicon-based Thai sentiment scorer.
///
/// All lexicons are owned by the instance and fixed at construction;
/// analysis is a pure function of the input text.
pub struct ThaiLexiconScorer {
    positive_words: HashSet<&'static str>,
    negative_words: HashSet<&'static str>,
    intensity_modifiers: HashMap<&'static str, f64>,
    negation_words: HashSet<&'static str>,
    emoji_sentiment: HashMap<char, f64>,
}

impl Default for ThaiLexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThaiLexiconScorer {
    pub fn new() -> Self {
        Self {
            positive_words: THAI_POSITIVE.iter().copied().collect(),
            negative_words: THAI_NEGATIVE.iter().copied().collect(),
            intensity_modifiers: THAI_INTENSITY.iter().copied().collect(),
            negation_words: THAI_NEGATION.iter().copied().collect(),
            emoji_sentiment: THAI_EMOJI.iter().copied().collect(),
        }
    }

    /// Score a Thai or mixed text.
    pub fn analyze(&self, text: &str) -> Result<SentimentScore> {
        if text.trim().is_empty() {
            return Ok(SentimentScore::empty_text(ANALYZER_NAME));
        }

        let cleaned = preprocess(text);
        let words = tokenize(&cleaned);

        // Token- and phrase-level scores; phrases are matched against the
        // raw text so spacing does not hide them.
        let positive_score = self.polarity_score(&words, text, Polarity::Positive);
        let negative_score = self.polarity_score(&words, text, Polarity::Negative);
        let emoji_score = self.emoji_score(text);

        let total_positive = positive_score + emoji_score.max(0.0);
        let total_negative = negative_score + (-emoji_score).max(0.0);

        let mut compound = compound_score(total_positive, total_negative, words.len());

        // Parity rule: an odd number of negations flips the sign, an even
        // number cancels out.
        let negations = words
            .iter()
            .filter(|w| self.negation_words.contains(w.as_str()))
            .count();
        if negations % 2 == 1 {
            compound = -compound;
        }

        if !compound.is_finite() {
            return Err(AnalyzerError::SentimentAnalysis {
                analyzer: ANALYZER_NAME.to_string(),
                message: format!("non-finite compound score for input of {} tokens", words.len()),
            });
        }

        let total_sentiment = total_positive + total_negative;
        let (positive, negative, neutral) = if total_sentiment > 0.0 {
            let positive = total_positive / total_sentiment;
            let negative = total_negative / total_sentiment;
            (positive, negative, (1.0 - positive - negative).max(0.0))
        } else {
            (0.0, 0.0, 1.0)
        };

        let confidence =
            (compound.abs() + total_sentiment / words.len().max(1) as f64 * 0.5).min(1.0);

        Ok(SentimentScore {
            compound: compound.clamp(-1.0, 1.0),
            positive,
            negative,
            neutral,
            confidence,
            analyzer_used: ANALYZER_NAME.to_string(),
        })
    }

    fn polarity_score(&self, words: &[String], raw_text: &str, polarity: Polarity) -> f64 {
        let (word_set, phrases) = match polarity {
            Polarity::Positive => (&self.positive_words, THAI_POSITIVE_PHRASES),
            Polarity::Negative => (&self.negative_words, THAI_NEGATIVE_PHRASES),
        };

        let mut score = 0.0;
        for (i, word) in words.iter().enumerate() {
            if word_set.contains(word.as_str()) {
                score += 1.0 * self.intensity_at(words, i);
            }
        }

        for phrase in phrases {
            if raw_text.contains(phrase) {
                score += PHRASE_BONUS;
            }
        }
        score
    }

    /// Multiplicative intensity from modifiers within the window around
    /// the matched word.
    fn intensity_at(&self, words: &[String], index: usize) -> f64 {
        let mut intensity = 1.0;
        let start = index.saturating_sub(INTENSITY_WINDOW);
        let end = (index + INTENSITY_WINDOW + 1).min(words.len());
        for (i, word) in words.iter().enumerate().take(end).skip(start) {
            if i == index {
                continue;
            }
            if let Some(&multiplier) = self.intensity_modifiers.get(word.as_str()) {
                intensity *= multiplier;
            }
        }
        intensity
    }

    /// Average signed emoji value over all matched emoji, roughly [-1, 1].
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

enum Polarity {
    Positive,
    Negative,
}

/// Collapse whitespace runs and strip the repetition marker "ๆ".
fn preprocess(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace('ๆ', "")
}

/// Whitespace split, then maximal Thai runs; every other character stands
/// alone as a token.
fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for segment in text.split_whitespace() {
        let mut current = String::new();
        for c in segment.chars() {
            if is_thai_char(c) {
                current.push(c);
            } else {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                words.push(c.to_string());
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

/// Normalize polarity totals by token count, difference, then damp.
fn compound_score(positive: f64, negative: f64, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let normalized_positive = positive / word_count as f64;
    let normalized_negative = negative / word_count as f64;
    let compound = normalized_positive - normalized_negative;
    (compound * COMPOUND_DAMPING).clamp(-1.0, 1.0)
}
