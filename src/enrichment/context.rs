//! Contextual analysis: formality, domain, slang density, and cultural
//! markers, all derived from curated lists over the source text.

use crate::types::{ContextAnalysis, Domain, Formality};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const FORMAL_PHRASES: &[&str] = &[
    "dear sir",
    "dear madam",
    "to whom it may concern",
    "yours sincerely",
    "yours faithfully",
    "kind regards",
    "best regards",
    "i would like to",
    "please find attached",
    "pursuant to",
    "hereby",
    "respectfully",
];

const INFORMAL_PHRASES: &[&str] = &[
    "gonna", "wanna", "gotta", "kinda", "sorta", "dunno", "lol", "omg", "btw", "idk",
    "tbh", "lmao", "brb", "imo", "yo", "dude", "bro", "nah", "yeah",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "meeting", "invoice", "revenue", "client", "contract", "quarterly", "stakeholder",
    "deadline", "budget", "proposal", "agenda",
];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "server", "database", "algorithm", "deploy", "api", "bug", "compile", "kernel",
    "latency", "endpoint", "software", "code",
];

const CASUAL_KEYWORDS: &[&str] = &[
    "party", "weekend", "movie", "dinner", "game", "vacation", "beach", "birthday",
    "concert", "brunch",
];

/// Token or emoji → cultural marker association. Extensible, not
/// exhaustive.
const CULTURAL_MARKERS: &[(&str, &str)] = &[
    ("🎄", "christmas"),
    ("christmas", "christmas"),
    ("santa", "christmas"),
    ("🎃", "halloween"),
    ("halloween", "halloween"),
    ("🦃", "thanksgiving"),
    ("thanksgiving", "thanksgiving"),
    ("🧧", "lunar new year"),
    ("diwali", "diwali"),
    ("hanukkah", "hanukkah"),
    ("ramadan", "ramadan"),
    ("easter", "easter"),
    ("⚽", "football"),
    ("🏈", "american football"),
    ("☕", "coffee culture"),
    ("🍵", "tea culture"),
];

static SLANG_REGEX: OnceLock<Regex> = OnceLock::new();

fn slang_regex() -> &'static Regex {
    SLANG_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(gonna|wanna|gotta|kinda|sorta|dunno|lol|omg|btw|idk|tbh|lmao|brb|imo|bruh|sus|yolo)\b")
            .expect("slang pattern is valid")
    })
}

/// Analyze formality, domain, slang density, and cultural markers.
/// Pure and infallible; the caller's context hints are echoed back in
/// the result.
pub fn analyze_context(text: &str, hints: &HashMap<String, String>) -> ContextAnalysis {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    ContextAnalysis {
        formality: formality(&lowered, &words),
        domain: domain(&words),
        cultural_markers: cultural_markers(&lowered),
        slang_density: slang_density(text, words.len()),
        hints: hints.clone(),
    }
}

/// More list matches wins; tie (including zero-zero) is neutral.
fn formality(lowered: &str, words: &[&str]) -> Formality {
    let formal = FORMAL_PHRASES.iter().filter(|p| lowered.contains(*p)).count();
    let informal = INFORMAL_PHRASES
        .iter()
        .filter(|p| words.contains(&**p))
        .count();

    if formal > informal {
        Formality::Formal
    } else if informal > formal {
        Formality::Informal
    } else {
        Formality::Neutral
    }
}

/// First matching keyword set in priority order wins.
fn domain(words: &[&str]) -> Domain {
    let hits = |keywords: &[&str]| words.iter().any(|w| keywords.contains(w));

    if hits(BUSINESS_KEYWORDS) {
        Domain::Business
    } else if hits(TECHNICAL_KEYWORDS) {
        Domain::Technical
    } else if hits(CASUAL_KEYWORDS) {
        Domain::Casual
    } else {
        Domain::General
    }
}

fn cultural_markers(lowered: &str) -> Vec<String> {
    let mut markers = Vec::new();
    for (pattern, marker) in CULTURAL_MARKERS {
        if lowered.contains(pattern) && !markers.iter().any(|m: &String| m.as_str() == *marker) {
            markers.push(marker.to_string());
        }
    }
    markers
}

/// Slang matches divided by word count, in [0, 1]. Zero for empty text.
fn slang_density(text: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let matches = slang_regex().find_iter(text).count();
    (matches as f64 / word_count as f64).clamp(0.0, 1.0)
}
