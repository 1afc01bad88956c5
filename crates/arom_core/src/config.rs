use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AromConfig {
    pub analysis: AnalysisConfig,
    pub export: ExportConfig,
}

impl AromConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: AromConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("AROM_EMOJI_BOOST") {
            if let Ok(b) = v.parse() {
                self.analysis.enable_emoji_boost = b;
            }
        }
        if let Ok(v) = std::env::var("AROM_CAPS_BOOST") {
            if let Ok(b) = v.parse() {
                self.analysis.enable_caps_boost = b;
            }
        }
        if let Ok(v) = std::env::var("AROM_MIN_TEXT_LENGTH") {
            if let Ok(n) = v.parse() {
                self.analysis.min_text_length = n;
            }
        }
        if let Ok(v) = std::env::var("AROM_EXPORT_FORMAT") {
            self.export.format = v;
        }
        if let Ok(v) = std::env::var("AROM_OUTPUT_DIR") {
            self.export.output_dir = PathBuf::from(v);
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Add averaged emoji sentiment to the English compound score.
    pub enable_emoji_boost: bool,
    /// Multiply the English compound score for heavy capitalization.
    pub enable_caps_boost: bool,
    /// Texts shorter than this (in characters) are skipped in batch runs.
    pub min_text_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enable_emoji_boost: true,
            enable_caps_boost: true,
            min_text_length: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// "csv" or "json".
    pub format: String,
    pub output_dir: PathBuf,
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "csv".to_string(),
            output_dir: PathBuf::from("."),
            filename_prefix: "arom_analysis".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_boosts() {
        let cfg = AromConfig::default();
        assert!(cfg.analysis.enable_emoji_boost);
        assert!(cfg.analysis.enable_caps_boost);
        assert_eq!(cfg.analysis.min_text_length, 1);
        assert_eq!(cfg.export.format, "csv");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let cfg: AromConfig = toml::from_str(
            r#"
            [analysis]
            enable_caps_boost = false

            [export]
            format = "json"
            "#,
        )
        .unwrap();
        assert!(cfg.analysis.enable_emoji_boost);
        assert!(!cfg.analysis.enable_caps_boost);
        assert_eq!(cfg.export.format, "json");
        assert_eq!(cfg.export.filename_prefix, "arom_analysis");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: AromConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.analysis.min_text_length, 1);
        assert_eq!(cfg.export.output_dir, PathBuf::from("."));
    }
}
