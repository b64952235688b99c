use std::env;

use crate::gemini::{GeminiConfig, DEFAULT_BASE_URL};
use crate::language::Language;
use crate::tutor::{TutorConfig, DEFAULT_MODEL};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
    pub default_language: Language,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_ms = parse_timeout_ms(env::var("TIMEOUT_MS").ok().as_deref());

        let default_language = env::var("TUTOR_LANGUAGE")
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();

        Self {
            port,
            api_key,
            base_url,
            model,
            timeout_ms,
            default_language,
        }
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig::new(self.api_key.clone(), self.base_url.clone())
    }

    pub fn tutor(&self) -> TutorConfig {
        TutorConfig::new(self.model.clone(), self.timeout_ms)
    }

    /// Short keys are fully redacted; longer ones show their first 7 characters.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.is_empty() {
            return "<not set>".to_string();
        }
        if self.api_key.chars().count() <= 7 {
            return "<redacted>".to_string();
        }
        let prefix: String = self.api_key.chars().take(7).collect();
        format!("{prefix}...")
    }
}

fn parse_timeout_ms(value: Option<&str>) -> u64 {
    value
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> AppConfig {
        AppConfig {
            port: 8080,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: 1_000,
            default_language: Language::En,
        }
    }

    #[test]
    fn api_key_is_masked() {
        assert_eq!(config("AIzaSyD-secret").masked_api_key(), "AIzaSyD...");
        assert_eq!(config("").masked_api_key(), "<not set>");
    }

    #[test]
    fn short_api_key_is_fully_redacted() {
        assert_eq!(config("abc").masked_api_key(), "<redacted>");
        assert_eq!(config("AIzaSyD").masked_api_key(), "<redacted>");
        assert_eq!(config("AIzaSyDx").masked_api_key(), "AIzaSyD...");
    }

    #[test]
    fn zero_or_invalid_timeout_uses_default() {
        assert_eq!(parse_timeout_ms(Some("0")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(Some("soon")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(None), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(Some("1500")), 1_500);
    }

    #[test]
    fn tutor_config_carries_model() {
        assert_eq!(config("k").tutor().model(), DEFAULT_MODEL);
    }
}
