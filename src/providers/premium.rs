//! Premium adapter: DeepL-style endpoint.
//!
//! Highest translation quality, but only for a constrained whitelist of
//! language codes, and only when a credential is configured. Internal
//! codes are mapped to the provider's own code set (uppercase, with
//! regional variants where the provider demands one).

use crate::error::ProviderError;
use crate::retry::{with_retry_if, RetryConfig};
use crate::types::{TranslationRequest, TranslationResult};
use serde::{Deserialize, Serialize};

use super::{build_result, ensure_success};

/// Language codes the premium provider accepts, on either side of the
/// pair. A hard eligibility check, not a preference.
const SUPPORTED_CODES: &[&str] = &[
    "en", "de", "fr", "es", "it", "nl", "pl", "pt", "ru", "ja", "zh",
];

#[derive(Debug, Serialize)]
struct DeeplRequest<'a> {
    text: Vec<&'a str>,
    source_lang: String,
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct DeeplResponse {
    translations: Vec<DeeplTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeeplTranslation {
    detected_source_language: Option<String>,
    text: String,
}

#[derive(Clone)]
pub struct PremiumAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl PremiumAdapter {
    pub const NAME: &'static str = "deepl_api";

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

    /// Whitelist check: both sides of the pair must be supported codes.
    pub fn supports_pair(source_lang: &str, target_lang: &str) -> bool {
        let listed = |code: &str| SUPPORTED_CODES.iter().any(|c| c.eq_ignore_ascii_case(code));
        listed(source_lang) && listed(target_lang)
    }

    /// Map an internal code onto the provider's code set. The provider
    /// requires regional variants for some target languages.
    fn provider_code(code: &str, is_target: bool) -> String {
        match (code.to_ascii_lowercase().as_str(), is_target) {
            ("en", true) => "EN-US".to_string(),
            ("pt", true) => "PT-BR".to_string(),
            (other, _) => other.to_ascii_uppercase(),
        }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
        source_lang: &str,
    ) -> Result<TranslationResult, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential(Self::NAME))?;

        if !Self::supports_pair(source_lang, &request.target_lang) {
            return Err(ProviderError::UnsupportedPair {
                source: source_lang.to_string(),
                target: request.target_lang.clone(),
            });
        }

        let payload = DeeplRequest {
            text: vec![request.text.as_str()],
            source_lang: Self::provider_code(source_lang, false),
            target_lang: Self::provider_code(&request.target_lang, true),
        };

        let translation = with_retry_if(
            &RetryConfig::provider_call(),
            "Premium translate",
            || async {
                let response = self
                    .client
                    .post(&self.api_url)
                    .header("Authorization", format!("DeepL-Auth-Key {}", api_key))
                    .json(&payload)
                    .send()
                    .await?;

                let response = ensure_success(response).await?;

                let parsed: DeeplResponse = response
                    .json()
                    .await
                    .map_err(|e| ProviderError::Malformed(e.to_string()))?;

                parsed
                    .translations
                    .into_iter()
                    .next()
                    .ok_or_else(|| ProviderError::Malformed("response contained no translations".to_string()))
            },
            ProviderError::is_transient,
        )
        .await?;

        if translation.text.is_empty() {
            return Err(ProviderError::Malformed("empty translated text".to_string()));
        }

        let detected = translation
            .detected_source_language
            .as_deref()
            .map(str::to_ascii_lowercase);

        Ok(build_result(
            request,
            source_lang,
            translation.text,
            detected.as_deref(),
            Self::NAME,
        ))
    }
}
