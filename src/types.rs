//! Core value types exchanged between the engine, adapters, and callers.
//!
//! Everything here is a plain serde-serializable value. Results are
//! immutable once built, with one exception: the orchestrator stamps
//! `metadata.processing_ms` after total elapsed time is known.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel source-language code meaning "detect the language for me".
pub const AUTO_LANG: &str = "auto";

/// Provider tag used when translation was skipped (source == target).
pub const PROVIDER_NONE: &str = "none";

/// A single translation request.
///
/// Constructed per call and never mutated. `source_lang` may be the
/// [`AUTO_LANG`] sentinel; `context` carries free-form caller hints
/// (e.g. desired formality) that are echoed back on the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: source.into(),
            target_lang: target.into(),
            context: HashMap::new(),
        }
    }

    /// Attach a caller context hint.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Coarse translation confidence.
///
/// Only `High` and `Medium` are ever produced by the cascade; `Low`
/// exists for completeness of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Sentiment category for the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Formality level inferred from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    Neutral,
    Informal,
}

/// Domain classification of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Business,
    Technical,
    Casual,
    General,
}

/// Sentiment analysis derived purely from the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub label: SentimentLabel,
    /// Normalized score in [-1, 1].
    pub score: f64,
    /// Confidence percentage in [0, 100].
    pub confidence: f64,
}

impl Default for SentimentAnalysis {
    fn default() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
        }
    }
}

/// Contextual metadata derived purely from the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    pub formality: Formality,
    pub domain: Domain,
    pub cultural_markers: Vec<String>,
    /// Slang matches divided by word count, in [0, 1].
    pub slang_density: f64,
    /// Caller-supplied context hints, echoed back unchanged.
    #[serde(default)]
    pub hints: HashMap<String, String>,
}

impl Default for ContextAnalysis {
    fn default() -> Self {
        Self {
            formality: Formality::Neutral,
            domain: Domain::General,
            cultural_markers: Vec::new(),
            slang_density: 0.0,
            hints: HashMap::new(),
        }
    }
}

/// Bookkeeping attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Wall-clock time the result was produced.
    pub timestamp: DateTime<Utc>,
    /// Total orchestration time in milliseconds. Written once by the
    /// engine after the pipeline finishes; zero on cached results.
    pub processing_ms: u64,
}

impl ResultMetadata {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now(),
            processing_ms: 0,
        }
    }
}

/// The unit of value produced by the engine and stored in the cache.
///
/// Carries the translation, the resolved language pair, which provider
/// produced it ([`PROVIDER_NONE`] for identity short-circuits), and the
/// enrichment analyses computed from the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub confidence: Confidence,
    pub provider: String,
    pub sentiment: SentimentAnalysis,
    pub context: ContextAnalysis,
    pub metadata: ResultMetadata,
}
