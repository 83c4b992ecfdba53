//! The cascade orchestrator and batch dispatcher.
//!
//! `translate` is a per-request pipeline with early-exit branches:
//! Validate → CacheLookup → LanguageResolve → ShortCircuitIdentity →
//! ProviderCascade → CacheStore → Return. Providers are tried strictly
//! sequentially in quality-then-availability order; individual failures
//! are logged and swallowed, and only total exhaustion surfaces to the
//! caller.

use crate::cache::{fingerprint, CacheStore};
use crate::config::Config;
use crate::detect::LanguageDetector;
use crate::enrichment::enrich;
use crate::error::TranslationError;
use crate::providers::{FallbackAdapter, GeneralAdapter, PremiumAdapter};
use crate::types::{
    Confidence, ResultMetadata, TranslationRequest, TranslationResult, AUTO_LANG, PROVIDER_NONE,
};
use anyhow::Result;
use futures::future::try_join_all;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The translation orchestration engine.
///
/// Constructed once at startup and passed by reference to callers; no
/// hidden global state. All mutability lives in the cache store, which
/// is safe for concurrent use.
pub struct TranslationEngine {
    config: Config,
    cache: CacheStore,
    detector: LanguageDetector,
    premium: PremiumAdapter,
    general: GeneralAdapter,
    fallback: FallbackAdapter,
}

impl TranslationEngine {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;

        let premium = PremiumAdapter::new(
            client.clone(),
            config.deepl_api_key.clone(),
            config.deepl_api_url.clone(),
        );
        let general = GeneralAdapter::new(
            client.clone(),
            config.google_api_key.clone(),
            config.google_api_url.clone(),
        );
        let fallback = FallbackAdapter::new(client, config.libre_api_url.clone());

        let detector = LanguageDetector::new(
            general.clone(),
            fallback.clone(),
            config.default_language.clone(),
        );
        let cache = CacheStore::new(config.cache_max_entries, config.cache_ttl);

        Ok(Self {
            config,
            cache,
            detector,
            premium,
            general,
            fallback,
        })
    }

    /// Translate one request through the full pipeline.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let started = Instant::now();

        // Validate
        if request.text.trim().is_empty() {
            return Err(TranslationError::EmptyText);
        }
        let len = request.text.chars().count();
        if len > self.config.max_text_length {
            return Err(TranslationError::TextTooLong {
                len,
                max: self.config.max_text_length,
            });
        }

        // Cache lookup, keyed on the request as given (including "auto").
        // A hit already carries enrichment; nothing downstream runs.
        let key = fingerprint(&request.text, &request.source_lang, &request.target_lang);
        if let Some(hit) = self.cache.get(&key) {
            debug!("cache hit for {}->{}", request.source_lang, request.target_lang);
            return Ok(hit);
        }

        // Language resolve
        let source = if request.source_lang.eq_ignore_ascii_case(AUTO_LANG) {
            let detected = self.detector.detect(&request.text).await;
            debug!("resolved auto source to '{}'", detected);
            detected
        } else {
            request.source_lang.clone()
        };

        // Identity short-circuit: no provider call, no cost, for no-op
        // translations. Runs after resolution so auto->en still applies.
        if source.eq_ignore_ascii_case(&request.target_lang) {
            debug!("identity short-circuit for '{}'", source);
            let (sentiment, context) = enrich(&request.text, &request.context);
            let mut result = TranslationResult {
                original_text: request.text.clone(),
                translated_text: request.text.clone(),
                source_lang: source,
                target_lang: request.target_lang.clone(),
                confidence: Confidence::High,
                provider: PROVIDER_NONE.to_string(),
                sentiment,
                context,
                metadata: ResultMetadata::now(),
            };
            result.metadata.processing_ms = started.elapsed().as_millis() as u64;
            return Ok(result);
        }

        // Provider cascade: premium → general → fallback, strictly
        // sequential, first success wins.
        let mut attempts: Vec<String> = Vec::new();

        if !self.premium.is_configured() {
            attempts.push(format!("{}: skipped (not configured)", PremiumAdapter::NAME));
        } else if !PremiumAdapter::supports_pair(&source, &request.target_lang) {
            debug!(
                "skipping premium provider: {}->{} outside whitelist",
                source, request.target_lang
            );
            attempts.push(format!("{}: skipped (pair not supported)", PremiumAdapter::NAME));
        } else {
            match self.premium.translate(request, &source).await {
                Ok(result) => return Ok(self.finish(key, result, started)),
                Err(e) => {
                    warn!("premium provider failed, falling back: {}", e);
                    attempts.push(format!("{}: {}", PremiumAdapter::NAME, e));
                }
            }
        }

        if !self.general.is_configured() {
            attempts.push(format!("{}: skipped (not configured)", GeneralAdapter::NAME));
        } else {
            match self.general.translate(request, &source).await {
                Ok(result) => return Ok(self.finish(key, result, started)),
                Err(e) => {
                    warn!("general provider failed, falling back: {}", e);
                    attempts.push(format!("{}: {}", GeneralAdapter::NAME, e));
                }
            }
        }

        match self.fallback.translate(request, &source).await {
            Ok(result) => Ok(self.finish(key, result, started)),
            Err(e) => {
                warn!("fallback provider failed, cascade exhausted: {}", e);
                attempts.push(format!("{}: {}", FallbackAdapter::NAME, e));
                Err(TranslationError::AllProvidersFailed {
                    source,
                    target: request.target_lang.clone(),
                    attempts: attempts.join("; "),
                })
            }
        }
    }

    /// Fan a list of texts out to the orchestrator concurrently,
    /// preserving input order in the returned results. A single failing
    /// item fails the whole batch.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
        context: &HashMap<String, String>,
    ) -> Result<Vec<TranslationResult>, TranslationError> {
        let requests: Vec<TranslationRequest> = texts
            .iter()
            .map(|text| TranslationRequest {
                text: text.clone(),
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
                context: context.clone(),
            })
            .collect();

        info!("dispatching batch of {} texts {}->{}", texts.len(), source_lang, target_lang);

        match self.config.batch_concurrency {
            Some(limit) => {
                stream::iter(requests.into_iter().map(|r| async move { self.translate(&r).await }))
                    .buffered(limit)
                    .try_collect()
                    .await
            }
            None => try_join_all(requests.iter().map(|r| self.translate(r))).await,
        }
    }

    /// Stamp the processing time and store the result before returning.
    fn finish(&self, key: String, mut result: TranslationResult, started: Instant) -> TranslationResult {
        result.metadata.processing_ms = started.elapsed().as_millis() as u64;
        info!(
            "translated {}->{} via {} in {}ms",
            result.source_lang, result.target_lang, result.provider, result.metadata.processing_ms
        );
        self.cache.put(key, result.clone());
        result
    }

    /// The engine's cache store (exposed for observability and tests).
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Config whose provider URLs are unroutable: any test that passes
    /// with it provably made no network call.
    fn offline_config() -> Config {
        Config {
            deepl_api_key: None,
            deepl_api_url: "http://unused.invalid".to_string(),
            google_api_key: None,
            google_api_url: "http://unused.invalid".to_string(),
            libre_api_url: "http://unused.invalid".to_string(),
            default_language: "en".to_string(),
            max_text_length: 100,
            cache_max_entries: 10,
            cache_ttl: Duration::from_secs(60),
            provider_timeout: Duration::from_secs(1),
            batch_concurrency: None,
            port: 0,
        }
    }

    fn engine() -> TranslationEngine {
        TranslationEngine::new(offline_config()).expect("engine should build")
    }

    // ==================== Validation Tests ====================

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let result = engine().translate(&TranslationRequest::new("", "en", "fr")).await;
        assert!(matches!(result, Err(TranslationError::EmptyText)));
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_rejected() {
        let result = engine().translate(&TranslationRequest::new("   \n\t", "en", "fr")).await;
        assert!(matches!(result, Err(TranslationError::EmptyText)));
    }

    #[tokio::test]
    async fn test_oversized_text_is_rejected_with_lengths() {
        let text = "a".repeat(101);
        let result = engine().translate(&TranslationRequest::new(text, "en", "fr")).await;
        match result {
            Err(TranslationError::TextTooLong { len, max }) => {
                assert_eq!(len, 101);
                assert_eq!(max, 100);
            }
            other => panic!("expected TextTooLong, got {:?}", other.map(|r| r.provider)),
        }
    }

    // ==================== Identity Short-Circuit Tests ====================

    #[tokio::test]
    async fn test_identity_pair_skips_providers() {
        let result = engine()
            .translate(&TranslationRequest::new("Hello world", "en", "en"))
            .await
            .expect("identity should succeed offline");

        assert_eq!(result.translated_text, "Hello world");
        assert_eq!(result.provider, PROVIDER_NONE);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[tokio::test]
    async fn test_identity_comparison_is_case_insensitive() {
        let result = engine()
            .translate(&TranslationRequest::new("Hello world", "EN", "en"))
            .await
            .expect("identity should succeed offline");
        assert_eq!(result.provider, PROVIDER_NONE);
    }

    #[tokio::test]
    async fn test_auto_resolving_to_target_short_circuits() {
        // Lexically unambiguous English, auto -> en: the detector
        // resolves "en" before the identity check, so no provider runs.
        let result = engine()
            .translate(&TranslationRequest::new("the cat and the dog", "auto", "en"))
            .await
            .expect("identity should succeed offline");

        assert_eq!(result.source_lang, "en");
        assert_eq!(result.provider, PROVIDER_NONE);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[tokio::test]
    async fn test_identity_result_carries_enrichment() {
        let result = engine()
            .translate(&TranslationRequest::new("this is a great party", "en", "en"))
            .await
            .expect("identity should succeed offline");

        assert!(result.sentiment.score > 0.2);
        assert_eq!(result.context.domain, crate::types::Domain::Casual);
    }
}
