//! Sentiment analysis: weighted emoji lexicon plus a small keyword list.
//!
//! The score combines (a) the average sentiment value over every emoji
//! occurrence and (b) a fixed ±0.3 offset when one keyword list
//! dominates the other. Thresholds: > 0.2 positive, < -0.2 negative,
//! else neutral. Confidence is |score| × 100, clamped to [0, 100].

use crate::types::{SentimentAnalysis, SentimentLabel};

/// Emoji → sentiment value in [-1, 1].
const EMOJI_SENTIMENT: &[(&str, f64)] = &[
    ("😀", 0.8),
    ("😊", 0.7),
    ("😍", 0.9),
    ("❤️", 0.9),
    ("🎉", 0.8),
    ("👍", 0.6),
    ("😂", 0.6),
    ("🙂", 0.4),
    ("😐", 0.0),
    ("🤔", 0.0),
    ("😕", -0.3),
    ("😠", -0.6),
    ("👎", -0.6),
    ("😢", -0.7),
    ("😡", -0.8),
    ("😭", -0.8),
    ("💔", -0.9),
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "love", "happy", "fantastic",
    "perfect", "best", "thanks", "awesome", "beautiful", "brilliant",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry", "worst",
    "disappointing", "poor", "broken", "useless", "ugly", "annoying",
];

/// Fixed score contribution when one keyword list dominates the other.
const KEYWORD_OFFSET: f64 = 0.3;

/// Analyze the sentiment of a text. Pure and infallible; an empty or
/// signal-free text yields the neutral default.
pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    let emoji_score = emoji_average(text);
    let keyword_score = keyword_offset(text);

    let score = (emoji_score.unwrap_or(0.0) + keyword_score).clamp(-1.0, 1.0);

    let label = if score > 0.2 {
        SentimentLabel::Positive
    } else if score < -0.2 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentAnalysis {
        label,
        score,
        confidence: (score.abs() * 100.0).clamp(0.0, 100.0),
    }
}

/// Average sentiment value over all emoji occurrences, or `None` when
/// the text contains no known emoji.
fn emoji_average(text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;

    for (emoji, value) in EMOJI_SENTIMENT {
        let occurrences = text.matches(emoji).count();
        if occurrences > 0 {
            total += value * occurrences as f64;
            count += occurrences;
        }
    }

    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// ±0.3 when one keyword list strictly dominates the other, 0 otherwise.
fn keyword_offset(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(w)).count();
    let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(w)).count();

    if positive > negative {
        KEYWORD_OFFSET
    } else if negative > positive {
        -KEYWORD_OFFSET
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Label Tests ====================

    #[test]
    fn test_empty_text_is_neutral() {
        let sentiment = analyze_sentiment("");
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert_eq!(sentiment.score, 0.0);
        assert_eq!(sentiment.confidence, 0.0);
    }

    #[test]
    fn test_plain_text_is_neutral() {
        let sentiment = analyze_sentiment("The meeting starts at noon.");
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_keywords() {
        let sentiment = analyze_sentiment("This is a great and wonderful day");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert_eq!(sentiment.score, 0.3);
    }

    #[test]
    fn test_negative_keywords() {
        let sentiment = analyze_sentiment("What a terrible, awful experience");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
        assert_eq!(sentiment.score, -0.3);
    }

    #[test]
    fn test_balanced_keywords_cancel_out() {
        let sentiment = analyze_sentiment("good food, bad service");
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert_eq!(sentiment.score, 0.0);
    }

    // ==================== Emoji Tests ====================

    #[test]
    fn test_positive_emoji() {
        let sentiment = analyze_sentiment("See you soon 🎉");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert_eq!(sentiment.score, 0.8);
    }

    #[test]
    fn test_negative_emoji() {
        let sentiment = analyze_sentiment("it broke again 😡");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_emoji_occurrences_are_averaged() {
        // (0.8 + (-0.8)) / 2 = 0.0
        let sentiment = analyze_sentiment("mixed feelings 😀 😭");
        assert_eq!(sentiment.score, 0.0);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_emoji_and_keywords_combine() {
        // emoji avg 0.8 + keyword offset 0.3, clamped to 1.0
        let sentiment = analyze_sentiment("amazing news 🎉 🎉");
        assert_eq!(sentiment.score, 1.0);
        assert_eq!(sentiment.confidence, 100.0);
    }

    // ==================== Confidence Tests ====================

    #[test]
    fn test_confidence_is_abs_score_times_100() {
        let sentiment = analyze_sentiment("hate this");
        assert_eq!(sentiment.score, -0.3);
        assert!((sentiment.confidence - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_clamped() {
        let sentiment = analyze_sentiment("💔 💔 awful hate");
        assert!(sentiment.score >= -1.0);
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let sentiment = analyze_sentiment("GREAT WORK");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
    }
}
