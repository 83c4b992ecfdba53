//! Provider adapters.
//!
//! Each adapter speaks one backend's wire format and maps its failures
//! into [`ProviderError`]; the cascade in `engine.rs` decides ordering
//! and fallback. Adapters never see the `auto` sentinel for the resolved
//! source — the engine resolves it first — but they do receive the
//! original request so the confidence rule can tell whether the caller
//! asked for auto-detection.

mod fallback;
mod general;
mod premium;

pub use fallback::FallbackAdapter;
pub use general::GeneralAdapter;
pub use premium::PremiumAdapter;

use crate::enrichment::enrich;
use crate::error::ProviderError;
use crate::types::{Confidence, ResultMetadata, TranslationRequest, TranslationResult, AUTO_LANG};

/// Coarse confidence rule shared by every adapter.
///
/// `High` when the caller asked for auto-detection, when the provider
/// reported no detection (the declared source stands), or when the
/// detection agrees with the caller. `Medium` on disagreement. The
/// cascade never produces `Low`.
pub(crate) fn confidence_for(declared_source: &str, detected_source: Option<&str>) -> Confidence {
    if declared_source.eq_ignore_ascii_case(AUTO_LANG) {
        return Confidence::High;
    }
    match detected_source {
        Some(detected) if !detected.eq_ignore_ascii_case(declared_source) => Confidence::Medium,
        _ => Confidence::High,
    }
}

/// Assemble a fully-populated result: translation plus enrichment over
/// the original text. Every adapter finishes through here so results
/// carry sentiment and context regardless of which backend produced
/// them.
pub(crate) fn build_result(
    request: &TranslationRequest,
    source_lang: &str,
    translated_text: String,
    detected_source: Option<&str>,
    provider: &str,
) -> TranslationResult {
    let (sentiment, context) = enrich(&request.text, &request.context);
    TranslationResult {
        original_text: request.text.clone(),
        translated_text,
        source_lang: source_lang.to_string(),
        target_lang: request.target_lang.clone(),
        confidence: confidence_for(&request.source_lang, detected_source),
        provider: provider.to_string(),
        sentiment,
        context,
        metadata: ResultMetadata::now(),
    }
}

/// Map a non-2xx response into [`ProviderError::Status`], reading as
/// much of the body as possible for the log line.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
    Err(ProviderError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Confidence Rule Tests ====================

    #[test]
    fn test_auto_request_is_high_confidence() {
        assert_eq!(confidence_for("auto", Some("fr")), Confidence::High);
        assert_eq!(confidence_for("auto", None), Confidence::High);
    }

    #[test]
    fn test_agreeing_detection_is_high_confidence() {
        assert_eq!(confidence_for("fr", Some("fr")), Confidence::High);
        assert_eq!(confidence_for("fr", Some("FR")), Confidence::High);
    }

    #[test]
    fn test_no_detection_is_high_confidence() {
        assert_eq!(confidence_for("fr", None), Confidence::High);
    }

    #[test]
    fn test_disagreeing_detection_is_medium_confidence() {
        assert_eq!(confidence_for("fr", Some("de")), Confidence::Medium);
    }

    // ==================== Result Assembly Tests ====================

    #[test]
    fn test_build_result_carries_enrichment() {
        let request = TranslationRequest::new("This is great 🎉", "en", "fr");
        let result = build_result(&request, "en", "C'est super".to_string(), Some("en"), "deepl_api");

        assert_eq!(result.provider, "deepl_api");
        assert_eq!(result.translated_text, "C'est super");
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.confidence, Confidence::High);
        // Enrichment ran against the original text
        assert!(result.sentiment.score > 0.2);
    }

    #[test]
    fn test_build_result_echoes_context_hints() {
        let request = TranslationRequest::new("Hello", "en", "es").with_context("tone", "casual");
        let result = build_result(&request, "en", "Hola".to_string(), None, "google_api");
        assert_eq!(result.context.hints.get("tone").map(String::as_str), Some("casual"));
    }
}
