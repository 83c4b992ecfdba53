use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Premium provider (DeepL-style)
    pub deepl_api_key: Option<String>,
    pub deepl_api_url: String,

    // General provider (Google-style)
    pub google_api_key: Option<String>,
    pub google_api_url: String,

    // Fallback provider (LibreTranslate-style), no credential
    pub libre_api_url: String,

    // Language detection
    pub default_language: String,

    // Validation
    pub max_text_length: usize,

    // Cache
    pub cache_max_entries: usize,
    pub cache_ttl: Duration,

    // Networking
    pub provider_timeout: Duration,

    // Batch dispatch
    pub batch_concurrency: Option<usize>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Credentials are optional: the cascade degrades to the
            // fallback provider when they are absent.
            deepl_api_key: std::env::var("DEEPL_API_KEY").ok().filter(|k| !k.is_empty()),
            deepl_api_url: std::env::var("DEEPL_API_URL")
                .unwrap_or_else(|_| "https://api-free.deepl.com/v2/translate".to_string()),

            google_api_key: std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
            google_api_url: std::env::var("GOOGLE_API_URL").unwrap_or_else(|_| {
                "https://translation.googleapis.com/language/translate/v2".to_string()
            }),

            libre_api_url: std::env::var("LIBRE_API_URL")
                .unwrap_or_else(|_| "https://libretranslate.com".to_string()),

            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            max_text_length: std::env::var("MAX_TEXT_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),

            cache_max_entries: std::env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            cache_ttl: Duration::from_secs(
                std::env::var("CACHE_TTL_DAYS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(7)
                    * 24
                    * 60
                    * 60,
            ),

            provider_timeout: Duration::from_secs(
                std::env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(12),
            ),

            batch_concurrency: std::env::var("BATCH_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
