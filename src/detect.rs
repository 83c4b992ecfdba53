//! Two-stage language detection.
//!
//! Stage one is a cheap lexical pass over the registry's curated pattern
//! lists; stage two delegates to a provider. Detection is infallible by
//! contract: any provider failure degrades to the configured default
//! language, because a detection hiccup must never block a translation.

use crate::language::LanguageRegistry;
use crate::providers::{FallbackAdapter, GeneralAdapter};
use tracing::{debug, warn};

/// Distinct pattern hits a language needs for a lexical match.
const PATTERN_THRESHOLD: usize = 2;

pub struct LanguageDetector {
    general: GeneralAdapter,
    fallback: FallbackAdapter,
    default_language: String,
}

impl LanguageDetector {
    pub fn new(general: GeneralAdapter, fallback: FallbackAdapter, default_language: String) -> Self {
        Self {
            general,
            fallback,
            default_language,
        }
    }

    /// Detect the language of `text`. Never fails.
    pub async fn detect(&self, text: &str) -> String {
        if let Some(code) = lexical_match(text) {
            debug!("lexical detection resolved '{}'", code);
            return code.to_string();
        }

        // Lexical pass was inconclusive; ask a provider. The general
        // adapter reports detection on a throwaway translation; without
        // its credential, the fallback's detect endpoint is used.
        let provider_result = if self.general.is_configured() {
            self.general.detect_source(text, &self.default_language).await
        } else {
            self.fallback.detect_source(text).await
        };

        match provider_result {
            Ok(code) => code,
            Err(e) => {
                warn!(
                    "provider-backed language detection failed ({}), using default '{}'",
                    e, self.default_language
                );
                self.default_language.clone()
            }
        }
    }
}

/// First language in registry priority order with at least
/// [`PATTERN_THRESHOLD`] distinct pattern hits.
fn lexical_match(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .collect();

    for profile in LanguageRegistry::get().list() {
        let hits = profile
            .patterns
            .iter()
            .filter(|pattern| {
                if pattern.contains(' ') {
                    lowered.contains(*pattern)
                } else {
                    words.contains(pattern)
                }
            })
            .count();

        if hits >= PATTERN_THRESHOLD {
            return Some(profile.code);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn detector(general_url: &str, google_key: Option<&str>, libre_url: &str) -> LanguageDetector {
        let client = reqwest::Client::new();
        LanguageDetector::new(
            GeneralAdapter::new(
                client.clone(),
                google_key.map(str::to_string),
                format!("{}/language/translate/v2", general_url),
            ),
            FallbackAdapter::new(client, libre_url.to_string()),
            "en".to_string(),
        )
    }

    // ==================== Lexical Stage Tests ====================

    #[test]
    fn test_lexical_english() {
        assert_eq!(lexical_match("the cat and the dog"), Some("en"));
    }

    #[test]
    fn test_lexical_french() {
        assert_eq!(lexical_match("Merci beaucoup pour le cadeau"), Some("fr"));
    }

    #[test]
    fn test_lexical_spanish() {
        assert_eq!(lexical_match("Hola, muchas gracias por todo"), Some("es"));
    }

    #[test]
    fn test_lexical_german() {
        assert_eq!(lexical_match("Das ist nicht gut"), Some("de"));
    }

    #[test]
    fn test_lexical_single_hit_is_inconclusive() {
        assert_eq!(lexical_match("Hello"), None);
    }

    #[test]
    fn test_lexical_empty_text_is_inconclusive() {
        assert_eq!(lexical_match(""), None);
    }

    #[test]
    fn test_lexical_priority_breaks_ties() {
        // "es" and "para" hit Spanish before Portuguese gets a look.
        assert_eq!(lexical_match("es para ti"), Some("es"));
    }

    // ==================== Provider Stage Tests ====================

    #[tokio::test]
    async fn test_provider_stage_uses_fallback_detect_without_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"language": "ja", "confidence": 92.0}
            ])))
            .mount(&server)
            .await;

        let detected = detector(&server.uri(), None, &server.uri())
            .detect("こんにちは")
            .await;
        assert_eq!(detected, "ja");
    }

    #[tokio::test]
    async fn test_provider_stage_prefers_general_with_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/language/translate/v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"translations": [
                    {"translatedText": "Hello", "detectedSourceLanguage": "ko"}
                ]}
            })))
            .mount(&server)
            .await;

        let detected = detector(&server.uri(), Some("test-key"), &server.uri())
            .detect("안녕하세요")
            .await;
        assert_eq!(detected, "ko");
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_default() {
        let server = MockServer::start().await;
        // No mocks mounted: every provider call 404s.
        let detected = detector(&server.uri(), None, &server.uri()).detect("Hello").await;
        assert_eq!(detected, "en");
    }

    #[tokio::test]
    async fn test_lexical_match_skips_providers_entirely() {
        // Unroutable provider URLs prove no network call is attempted.
        let detected = detector("http://unused.invalid", None, "http://unused.invalid")
            .detect("Merci pour le café, je suis content")
            .await;
        assert_eq!(detected, "fr");
    }
}
