//! Fallback adapter: LibreTranslate-style endpoint.
//!
//! No credential required, broad but lower-confidence coverage. Last
//! cascade stage, so the system degrades gracefully instead of failing
//! outright when no paid credentials are configured.

use crate::error::ProviderError;
use crate::retry::{with_retry_if, RetryConfig};
use crate::types::{TranslationRequest, TranslationResult};
use serde::{Deserialize, Serialize};

use super::{build_result, ensure_success};

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreResponse {
    translated_text: String,
}

#[derive(Debug, Serialize)]
struct LibreDetectRequest<'a> {
    q: &'a str,
}

#[derive(Debug, Deserialize)]
struct LibreDetection {
    language: String,
    confidence: f64,
}

#[derive(Clone)]
pub struct FallbackAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl FallbackAdapter {
    pub const NAME: &'static str = "libre_translate";

    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
        source_lang: &str,
    ) -> Result<TranslationResult, ProviderError> {
        let payload = LibreRequest {
            q: &request.text,
            source: source_lang,
            target: &request.target_lang,
            format: "text",
        };
        let url = format!("{}/translate", self.base_url);

        let parsed: LibreResponse = with_retry_if(
            &RetryConfig::provider_call(),
            "Fallback translate",
            || async {
                let response = self.client.post(&url).json(&payload).send().await?;
                let response = ensure_success(response).await?;
                response
                    .json()
                    .await
                    .map_err(|e| ProviderError::Malformed(e.to_string()))
            },
            ProviderError::is_transient,
        )
        .await?;

        if parsed.translated_text.is_empty() {
            return Err(ProviderError::Malformed("empty translated text".to_string()));
        }

        // This backend declares no detection on translate calls; the
        // declared source stands.
        Ok(build_result(
            request,
            source_lang,
            parsed.translated_text,
            None,
            Self::NAME,
        ))
    }

    /// Detect the language of a text via the provider's detect endpoint.
    /// Returns the highest-confidence candidate.
    pub async fn detect_source(&self, text: &str) -> Result<String, ProviderError> {
        let url = format!("{}/detect", self.base_url);
        let payload = LibreDetectRequest { q: text };

        let response = self.client.post(&url).json(&payload).send().await?;
        let response = ensure_success(response).await?;

        let mut candidates: Vec<LibreDetection> = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        candidates
            .into_iter()
            .next()
            .map(|c| c.language.to_ascii_lowercase())
            .ok_or_else(|| ProviderError::Malformed("detect returned no candidates".to_string()))
    }
}
