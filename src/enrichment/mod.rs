//! Context enrichment pipeline.
//!
//! Two independent, side-effect-free analyses run against the original
//! text (never the translation), so enrichment quality does not depend
//! on which provider produced the result. Both are best-effort: they
//! resolve to neutral defaults rather than ever failing a translation.

mod context;
mod sentiment;

pub use context::analyze_context;
pub use sentiment::analyze_sentiment;

use crate::types::{ContextAnalysis, SentimentAnalysis};
use std::collections::HashMap;

/// Run both analyses over the source text.
pub fn enrich(text: &str, hints: &HashMap<String, String>) -> (SentimentAnalysis, ContextAnalysis) {
    (analyze_sentiment(text), analyze_context(text, hints))
}
