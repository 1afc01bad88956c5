mod export;

use anyhow::{bail, Context, Result};
use arom_core::{
    default_dispatcher, detect_language, AnalysisReport, AnalyzedText, AromConfig, Language,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(author, version, about = "Thai/English sentiment analysis for social-media text")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "arom.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single text and print the score as JSON
    Analyze {
        text: String,
    },
    /// Detect the language of a text and print the breakdown
    Detect {
        text: String,
    },
    /// Analyze a file with one text per line and export the results
    File {
        path: PathBuf,
        /// Override the export format from config ("csv" or "json")
        #[arg(long)]
        format: Option<String>,
        /// Override the output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = AromConfig::load_or_default(&args.config);

    match args.command {
        Command::Analyze { text } => analyze_one(&config, &text),
        Command::Detect { text } => detect_one(&text),
        Command::File {
            path,
            format,
            output,
        } => analyze_file(&config, &path, format.as_deref(), output),
    }
}

fn analyze_one(config: &AromConfig, text: &str) -> Result<()> {
    let dispatcher = default_dispatcher(config);
    let score = dispatcher.analyze(text)?;
    let detection = detect_language(text);
    let row = AnalyzedText {
        text: text.to_string(),
        language: detection.language,
        score,
    };
    println!("{}", serde_json::to_string_pretty(&row)?);
    Ok(())
}

fn detect_one(text: &str) -> Result<()> {
    let detection = detect_language(text);
    println!("language:   {}", detection.language);
    println!("confidence: {:.2}", detection.confidence);
    println!(
        "breakdown:  thai {:.1}% / english {:.1}% / other {:.1}% / mixed {:.1}%",
        detection.breakdown.thai,
        detection.breakdown.english,
        detection.breakdown.other,
        detection.breakdown.mixed
    );
    Ok(())
}

fn analyze_file(
    config: &AromConfig,
    path: &PathBuf,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let dispatcher = default_dispatcher(config);

    let mut rows = Vec::new();
    let mut failures = 0usize;
    for (line_no, line) in content.lines().enumerate() {
        let text = line.trim();
        if text.chars().count() < config.analysis.min_text_length.max(1) {
            continue;
        }
        // Per-item isolation: a failing line is reported, never fatal.
        match dispatcher.analyze(text) {
            Ok(score) => {
                let language = language_from_provenance(&score.analyzer_used);
                rows.push(AnalyzedText {
                    text: text.to_string(),
                    language,
                    score,
                });
            }
            Err(e) => {
                failures += 1;
                warn!("line {}: analysis failed: {e}", line_no + 1);
            }
        }
    }

    if rows.is_empty() {
        bail!("no analyzable texts in {}", path.display());
    }

    let report = AnalysisReport::from_rows(&rows);
    let format = format.unwrap_or(config.export.format.as_str());
    let output = output.unwrap_or_else(|| {
        config
            .export
            .output_dir
            .join(format!("{}.{format}", config.export.filename_prefix))
    });

    match format {
        "csv" => export::export_csv(&rows, &report, &output)?,
        "json" => export::export_json(&rows, &report, &output)?,
        other => bail!("unsupported export format '{other}' (expected csv or json)"),
    }

    print_summary(&report, failures);
    Ok(())
}

/// The dispatcher stamps `analyzer_used` as `<scorer>_<language>`; recover
/// the language tag from that suffix for reporting.
fn language_from_provenance(analyzer_used: &str) -> Language {
    match analyzer_used.rsplit('_').next() {
        Some("english") => Language::English,
        Some("thai") => Language::Thai,
        Some("mixed") => Language::Mixed,
        _ => Language::Unknown,
    }
}

fn print_summary(report: &AnalysisReport, failures: usize) {
    use arom_core::SentimentLabel;

    println!("Analyzed {} texts", report.total_texts);
    if failures > 0 {
        println!("  ({failures} lines failed, see log)");
    }
    println!("  average compound: {:.4}", report.average_compound);
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        println!("  {label}: {:.1}%", report.label_percentage(label));
    }
    if let Some(text) = &report.most_positive {
        println!("  most positive: {text}");
    }
    if let Some(text) = &report.most_negative {
        println!("  most negative: {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_suffix_maps_back_to_language() {
        assert_eq!(
            language_from_provenance("vader_enhanced_english"),
            Language::English
        );
        assert_eq!(language_from_provenance("thai_lexicon_thai"), Language::Thai);
        assert_eq!(
            language_from_provenance("vader_enhanced_mixed"),
            Language::Mixed
        );
        assert_eq!(
            language_from_provenance("vader_enhanced_unknown"),
            Language::Unknown
        );
    }

    #[test]
    fn file_pipeline_exports_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lines.txt");
        fs::write(&input, "ดีมาก\n\nI love this!\n").unwrap();
        let output = dir.path().join("out.csv");

        let config = AromConfig::default();
        analyze_file(&config, &input, Some("csv"), Some(output.clone())).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        // header + 2 rows; the blank line is skipped
        assert_eq!(content.lines().count(), 3);
    }
}
