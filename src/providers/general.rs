//! General adapter: Google-style endpoint.
//!
//! Broad language coverage behind an API-key credential. Reports its own
//! detected source language, which also makes it the preferred backend
//! for the detector's provider stage.

use crate::error::ProviderError;
use crate::retry::{with_retry_if, RetryConfig};
use crate::types::{TranslationRequest, TranslationResult, AUTO_LANG};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{build_result, ensure_success};

#[derive(Debug, Serialize)]
struct GoogleRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    data: GoogleData,
}

#[derive(Debug, Deserialize)]
struct GoogleData {
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Clone)]
pub struct GeneralAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl GeneralAdapter {
    pub const NAME: &'static str = "google_api";

    pub fn new(client: reqwest::Client, api_key: Option<String>, api_url: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<GoogleTranslation, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential(Self::NAME))?;

        let payload = GoogleRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
        };

        with_retry_if(
            &RetryConfig::provider_call(),
            "General translate",
            || async {
                let response = self
                    .client
                    .post(&self.api_url)
                    .query(&[("key", api_key)])
                    .json(&payload)
                    .send()
                    .await?;

                let response = ensure_success(response).await?;

                let parsed: GoogleResponse = response
                    .json()
                    .await
                    .map_err(|e| ProviderError::Malformed(e.to_string()))?;

                parsed
                    .data
                    .translations
                    .into_iter()
                    .next()
                    .ok_or_else(|| ProviderError::Malformed("response contained no translations".to_string()))
            },
            ProviderError::is_transient,
        )
        .await
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
        source_lang: &str,
    ) -> Result<TranslationResult, ProviderError> {
        // The provider treats an omitted source as "detect it yourself".
        let source = if source_lang.eq_ignore_ascii_case(AUTO_LANG) {
            None
        } else {
            Some(source_lang)
        };

        let translation = self.call(&request.text, source, &request.target_lang).await?;
        if translation.translated_text.is_empty() {
            return Err(ProviderError::Malformed("empty translated text".to_string()));
        }

        let detected = translation
            .detected_source_language
            .as_deref()
            .map(str::to_ascii_lowercase);

        // When the caller asked for auto, the provider's own detection
        // becomes the resolved source.
        let resolved = detected.as_deref().unwrap_or(source_lang);

        Ok(build_result(
            request,
            resolved,
            translation.translated_text,
            detected.as_deref(),
            Self::NAME,
        ))
    }

    /// Language identification as a side effect of a throwaway
    /// translation call: omit the source, read back what the provider
    /// detected.
    pub async fn detect_source(
        &self,
        text: &str,
        probe_target: &str,
    ) -> Result<String, ProviderError> {
        let translation = self.call(text, None, probe_target).await?;
        match translation.detected_source_language {
            Some(code) => {
                debug!("general provider detected source language '{}'", code);
                Ok(code.to_ascii_lowercase())
            }
            None => Err(ProviderError::Malformed(
                "response carried no detected source language".to_string(),
            )),
        }
    }
}
