//! Core data model: language tags, sentiment scores, and the social-media
//! shapes (comments, posts, aggregate reports) the upstream pipeline
//! populates from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Compound score at or above this is labelled positive, at or below the
/// negation of it negative. Fixed invariant, used everywhere sentiment is
/// categorized; deliberately not configurable.
pub const LABEL_THRESHOLD: f64 = 0.05;

/// Language tag assigned by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Thai,
    Mixed,
    Unknown,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::English => "english",
            Language::Thai => "thai",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Categorical sentiment label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Detailed sentiment analysis result. Immutable once constructed, except
/// that the dispatcher rewrites `analyzer_used` to stamp provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Overall polarity in [-1.0, 1.0].
    pub compound: f64,
    /// Positive component in [0, 1].
    pub positive: f64,
    /// Negative component in [0, 1].
    pub negative: f64,
    /// Neutral component in [0, 1].
    pub neutral: f64,
    /// Confidence in the analysis, [0, 1].
    pub confidence: f64,
    /// Which scorer (and, after dispatch, which language) produced this.
    pub analyzer_used: String,
}

impl SentimentScore {
    /// The neutral score every analyzer returns for empty or
    /// whitespace-only text.
    pub fn empty_text(analyzer: &str) -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            confidence: 1.0,
            analyzer_used: analyzer.to_string(),
        }
    }

    /// Categorical label at the fixed ±0.05 threshold.
    pub fn label(&self) -> SentimentLabel {
        if self.compound >= LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if self.compound <= -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Percentage breakdown of language composition; sums to ≈100 for any
/// input. Diagnostic output of the detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    pub thai: f64,
    pub english: f64,
    pub other: f64,
    /// Overlap signal, nonzero only when both Thai and English each make
    /// up more than 20% of the text.
    pub mixed: f64,
    /// 100 for empty or whitespace-only text, 0 otherwise.
    pub unknown: f64,
}

impl LanguageBreakdown {
    pub fn unknown_text() -> Self {
        Self {
            unknown: 100.0,
            ..Self::default()
        }
    }
}

/// A social-media comment plus its analysis results, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    /// Creation time as reported by the platform (ISO 8601).
    pub created_time: String,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub replies_count: u32,
    #[serde(default)]
    pub sentiment: Option<SentimentScore>,
    #[serde(default)]
    pub language: Option<Language>,
}

/// A social-media post whose comments are being analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub message: String,
    pub created_time: String,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub shares_count: u32,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One analyzed text with its detected language and score; the row shape
/// consumed by exporters and reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedText {
    pub text: String,
    pub language: Language,
    pub score: SentimentScore,
}

/// Aggregate statistics over a batch of analyzed texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_texts: usize,
    pub sentiment_distribution: HashMap<SentimentLabel, usize>,
    pub language_distribution: HashMap<Language, usize>,
    pub average_compound: f64,
    pub most_positive: Option<String>,
    pub most_negative: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn from_rows(rows: &[AnalyzedText]) -> Self {
        let mut sentiment_distribution = HashMap::new();
        let mut language_distribution = HashMap::new();
        let mut sum = 0.0;
        let mut most_positive: Option<&AnalyzedText> = None;
        let mut most_negative: Option<&AnalyzedText> = None;

        for row in rows {
            *sentiment_distribution.entry(row.score.label()).or_insert(0) += 1;
            *language_distribution.entry(row.language).or_insert(0) += 1;
            sum += row.score.compound;
            if most_positive.map_or(true, |best| row.score.compound > best.score.compound) {
                most_positive = Some(row);
            }
            if most_negative.map_or(true, |worst| row.score.compound < worst.score.compound) {
                most_negative = Some(row);
            }
        }

        let average_compound = if rows.is_empty() {
            0.0
        } else {
            sum / rows.len() as f64
        };

        Self {
            total_texts: rows.len(),
            sentiment_distribution,
            language_distribution,
            average_compound,
            most_positive: most_positive.map(|r| r.text.clone()),
            most_negative: most_negative.map(|r| r.text.clone()),
            generated_at: Utc::now(),
        }
    }

    pub fn label_percentage(&self, label: SentimentLabel) -> f64 {
        if self.total_texts == 0 {
            return 0.0;
        }
        let count = self.sentiment_distribution.get(&label).copied().unwrap_or(0);
        count as f64 / self.total_texts as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(compound: f64) -> SentimentScore {
        SentimentScore {
            compound,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            confidence: 0.5,
            analyzer_used: "test".into(),
        }
    }

    #[test]
    fn label_thresholds_are_inclusive() {
        assert_eq!(score(0.05).label(), SentimentLabel::Positive);
        assert_eq!(score(-0.05).label(), SentimentLabel::Negative);
        assert_eq!(score(0.049).label(), SentimentLabel::Neutral);
        assert_eq!(score(-0.049).label(), SentimentLabel::Neutral);
        assert_eq!(score(0.0).label(), SentimentLabel::Neutral);
    }

    #[test]
    fn empty_text_score_is_neutral() {
        let s = SentimentScore::empty_text("thai_lexicon");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_eq!(s.confidence, 1.0);
        assert_eq!(s.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn report_aggregates_distribution_and_extremes() {
        let rows = vec![
            AnalyzedText {
                text: "great".into(),
                language: Language::English,
                score: score(0.8),
            },
            AnalyzedText {
                text: "awful".into(),
                language: Language::English,
                score: score(-0.6),
            },
            AnalyzedText {
                text: "meh".into(),
                language: Language::Thai,
                score: score(0.0),
            },
        ];
        let report = AnalysisReport::from_rows(&rows);
        assert_eq!(report.total_texts, 3);
        assert_eq!(report.sentiment_distribution[&SentimentLabel::Positive], 1);
        assert_eq!(report.sentiment_distribution[&SentimentLabel::Negative], 1);
        assert_eq!(report.sentiment_distribution[&SentimentLabel::Neutral], 1);
        assert_eq!(report.language_distribution[&Language::English], 2);
        assert_eq!(report.most_positive.as_deref(), Some("great"));
        assert_eq!(report.most_negative.as_deref(), Some("awful"));
        assert!((report.average_compound - (0.8 - 0.6) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_report_has_zero_percentages() {
        let report = AnalysisReport::from_rows(&[]);
        assert_eq!(report.total_texts, 0);
        assert_eq!(report.average_compound, 0.0);
        assert_eq!(report.label_percentage(SentimentLabel::Positive), 0.0);
    }
}
