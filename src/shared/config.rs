//! Application configuration. API credentials, paths, report format.

use crate::domain::DomainError;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CATALOG_PATH: &str = "data/product_data.json";
pub const DEFAULT_AI_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Output format for exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Txt,
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "txt" | "text" => Ok(ReportFormat::Txt),
            other => Err(DomainError::Config(format!(
                "unknown report format {:?} (expected pdf or txt)",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog JSON file. Read from SHOPGPT_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Directory for exported reports. Read from SHOPGPT_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// `pdf` or `txt`. Read from SHOPGPT_REPORT_FORMAT.
    #[serde(default)]
    pub report_format: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key. Read from SHOPGPT_AI_API_KEY, falling back to GROQ_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions endpoint. Defaults to Groq. Read from SHOPGPT_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from SHOPGPT_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Request timeout in seconds. Read from SHOPGPT_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            config::Environment::with_prefix("SHOPGPT"),
            std::env::var("SHOPGPT_CONFIG").ok(),
        )
    }

    /// Build from an environment source and an optional config file.
    /// Any invalid value fails the whole load.
    pub fn from_sources(
        env: config::Environment,
        file: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder().add_source(env);
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn catalog_path_or_default(&self) -> String {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
    }

    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir.clone().unwrap_or_else(|| ".".to_string())
    }

    /// Parsed report format. Defaults to PDF; unknown values are an error.
    pub fn report_format(&self) -> Result<ReportFormat, DomainError> {
        match &self.report_format {
            Some(s) => s.parse(),
            None => Ok(ReportFormat::default()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the AI API key if configured. Empty values count as unset.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.catalog_path_or_default(), DEFAULT_CATALOG_PATH);
        assert_eq!(cfg.reports_dir_or_default(), ".");
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), DEFAULT_AI_MODEL);
        assert_eq!(cfg.ai_timeout(), Duration::from_secs(60));
        assert_eq!(cfg.report_format().unwrap(), ReportFormat::Pdf);
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            catalog_path: Some("other.json".into()),
            ai_model: Some("gpt-4o-mini".into()),
            ai_timeout_secs: Some(5),
            report_format: Some("TXT".into()),
            ..Default::default()
        };
        assert_eq!(cfg.catalog_path_or_default(), "other.json");
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.ai_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.report_format().unwrap(), ReportFormat::Txt);
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let cfg = AppConfig {
            ai_api_key: Some("  ".into()),
            ..Default::default()
        };
        assert!(cfg.ai_api_key().is_none());
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("SHOPGPT").source(Some(map))
    }

    #[test]
    fn test_from_env_values() {
        let cfg = AppConfig::from_sources(
            env(&[
                ("SHOPGPT_AI_API_KEY", "secret"),
                ("SHOPGPT_CATALOG_PATH", "mine.json"),
                ("SHOPGPT_AI_TIMEOUT_SECS", "5"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(cfg.ai_api_key().as_deref(), Some("secret"));
        assert_eq!(cfg.catalog_path_or_default(), "mine.json");
        assert_eq!(cfg.ai_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_non_numeric_timeout_is_error() {
        let result = AppConfig::from_sources(
            env(&[
                ("SHOPGPT_AI_API_KEY", "secret"),
                ("SHOPGPT_AI_TIMEOUT_SECS", "abc"),
            ]),
            None,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("ai_timeout_secs"));
    }

    #[test]
    fn test_unknown_report_format() {
        let err = "docx".parse::<ReportFormat>().unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
