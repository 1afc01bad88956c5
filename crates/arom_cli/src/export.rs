//! CSV and JSON export of batch analysis results.

use anyhow::{Context, Result};
use arom_core::{AnalysisReport, AnalyzedText, Language, SentimentLabel};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Flat per-text row written to CSV; the nested [`AnalyzedText`] shape is
/// kept for JSON.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    text: &'a str,
    language: Language,
    label: SentimentLabel,
    compound: f64,
    positive: f64,
    negative: f64,
    neutral: f64,
    confidence: f64,
    analyzer: &'a str,
}

impl<'a> ExportRow<'a> {
    fn from_analyzed(row: &'a AnalyzedText) -> Self {
        Self {
            text: &row.text,
            language: row.language,
            label: row.score.label(),
            compound: row.score.compound,
            positive: row.score.positive,
            negative: row.score.negative,
            neutral: row.score.neutral,
            confidence: row.score.confidence,
            analyzer: &row.score.analyzer_used,
        }
    }
}

/// Write one CSV row per analyzed text, plus a `<stem>_summary.csv` with
/// the aggregate report.
pub fn export_csv(rows: &[AnalyzedText], report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    for row in rows {
        writer
            .serialize(ExportRow::from_analyzed(row))
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    let summary_path = path.with_file_name(format!(
        "{}_summary.csv",
        path.file_stem().and_then(|s| s.to_str()).unwrap_or("arom")
    ));
    export_summary_csv(report, &summary_path)?;
    tracing::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn export_summary_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create summary CSV: {}", path.display()))?;
    writer.write_record(["metric", "value"])?;
    writer.write_record(["total_texts", &report.total_texts.to_string()])?;
    writer.write_record(["average_compound", &format!("{:.4}", report.average_compound)])?;
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        writer.write_record([
            &format!("{label}_percentage"),
            &format!("{:.2}", report.label_percentage(label)),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON document bundling the rows and the aggregate report.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    results: &'a [AnalyzedText],
    summary: &'a AnalysisReport,
}

pub fn export_json(rows: &[AnalyzedText], report: &AnalysisReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(
        &mut writer,
        &JsonExport {
            results: rows,
            summary: report,
        },
    )
    .context("Failed to serialize JSON export")?;
    writer.flush().context("Failed to flush JSON output")?;
    tracing::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}
