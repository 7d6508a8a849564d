//! Sentiment of the text immediately around a confirmed mention.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::{NEGATIVE_PHRASES, NEGATIVE_TERMS, POSITIVE_TERMS};
use crate::{snap_to_char_boundary, HEUR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

fn word_alternation(words: &[&str]) -> Regex {
    let alt = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alt})\b")).unwrap()
}

static POSITIVE_WORD_RE: Lazy<Regex> = Lazy::new(|| word_alternation(POSITIVE_TERMS));

static NEGATIVE_WORD_RE: Lazy<Regex> = Lazy::new(|| word_alternation(NEGATIVE_TERMS));

/// Score the sentiment of the context window around the first occurrence of
/// `business_name`. Returns `Unknown` when the name is absent; sentiment
/// only applies to a subject that is actually present.
pub fn analyze_sentiment(response: &str, business_name: &str) -> Sentiment {
    let response_lower = response.to_lowercase();
    let name_lower = business_name.trim().to_lowercase();
    if name_lower.is_empty() {
        return Sentiment::Unknown;
    }
    let start = match response_lower.find(&name_lower) {
        Some(idx) => idx,
        None => return Sentiment::Unknown,
    };

    let window_start = snap_to_char_boundary(
        &response_lower,
        start.saturating_sub(HEUR.sentiment_window_chars),
        false,
    );
    let window_end = snap_to_char_boundary(
        &response_lower,
        (start + name_lower.len() + HEUR.sentiment_window_chars).min(response_lower.len()),
        true,
    );
    let window = &response_lower[window_start..window_end];

    // Negative language dominates: one hit is enough.
    if NEGATIVE_WORD_RE.is_match(window) || NEGATIVE_PHRASES.iter().any(|p| window.contains(p)) {
        return Sentiment::Negative;
    }

    let positive_hits = POSITIVE_WORD_RE.find_iter(window).count();
    if positive_hits >= HEUR.sentiment_positive_min {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}
