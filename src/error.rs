//! Error taxonomy.
//!
//! Two layers: [`ProviderError`] covers a single adapter call and is
//! inspected (never surfaced) by the cascade, which falls through to the
//! next provider on any variant. [`TranslationError`] is what callers
//! see: invalid input, or total cascade exhaustion.

use std::fmt;

use reqwest::StatusCode;

/// Failure of a single provider adapter call. Transient from the
/// cascade's point of view: it triggers fallback, never a caller error.
// Display/Error/From are hand-written rather than derived via thiserror
// because the `source` language fields would be mistaken for error sources.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure, including connect and read timeouts.
    Request(reqwest::Error),

    /// Non-2xx response from the provider.
    Status { status: StatusCode, body: String },

    /// 2xx response whose payload did not match the provider's schema
    /// or was missing required fields.
    Malformed(String),

    /// Adapter requires a credential that is not configured.
    MissingCredential(&'static str),

    /// Language pair outside the adapter's coverage. Used to decide
    /// premium eligibility, never to fail a request.
    UnsupportedPair { source: String, target: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Request(e) => write!(f, "request failed: {e}"),
            ProviderError::Status { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            ProviderError::Malformed(msg) => write!(f, "malformed response: {msg}"),
            ProviderError::MissingCredential(name) => {
                write!(f, "no credential configured for {name}")
            }
            ProviderError::UnsupportedPair { source, target } => {
                write!(f, "unsupported language pair {source}->{target}")
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Request(e)
    }
}

impl ProviderError {
    /// Whether a retry of the same call could plausibly succeed.
    /// Rate limits, server errors, and network failures are transient;
    /// other client errors, missing credentials, and coverage gaps are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Request(_) => true,
            ProviderError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ProviderError::Malformed(_) => false,
            ProviderError::MissingCredential(_) => false,
            ProviderError::UnsupportedPair { .. } => false,
        }
    }
}

/// Caller-visible failure of a translation request.
#[derive(Debug)]
pub enum TranslationError {
    /// Input text was empty or only whitespace. Permanent.
    EmptyText,

    /// Input text exceeded the configured maximum length. Permanent.
    TextTooLong { len: usize, max: usize },

    /// Every cascade stage failed or was skipped. The one terminal
    /// failure mode of the orchestrator.
    AllProvidersFailed {
        source: String,
        target: String,
        /// Per-provider failure summary, e.g. "deepl_api: timeout; ...".
        attempts: String,
    },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::EmptyText => write!(f, "translation input is empty"),
            TranslationError::TextTooLong { len, max } => {
                write!(f, "translation input is {len} characters, maximum is {max}")
            }
            TranslationError::AllProvidersFailed {
                source,
                target,
                attempts,
            } => {
                write!(
                    f,
                    "all translation providers failed for {source}->{target}: {attempts}"
                )
            }
        }
    }
}

impl std::error::Error for TranslationError {}
