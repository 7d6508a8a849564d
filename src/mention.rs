//! Name-mention detection: decides whether a business name actually appears
//! in a response, and at which list rank. Checks run as an ordered cascade
//! (exact substring, then significant-word proximity, then word-count ratio),
//! each tier returning early.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::is_generic_word;
use crate::HEUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Exact,
    Partial,
    None,
}

/// Raw matching outcome, before information-quality and sentiment signals
/// are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameMatch {
    pub mentioned: bool,
    pub mention_type: MentionType,
    /// 1-based rank when the mention sits in an enumerated list.
    pub position: Option<u32>,
}

impl NameMatch {
    fn none() -> Self {
        NameMatch {
            mentioned: false,
            mention_type: MentionType::None,
            position: None,
        }
    }
}

static LIST_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d{1,3})[.):]").unwrap());

/// Determine whether `business_name` is referenced in `response`.
///
/// An empty or all-generic name never matches; a name like "Treuhand Zürich
/// AG" has no distinguishing token, so only a literal substring hit counts.
pub fn analyze_name_mention(response: &str, business_name: &str) -> NameMatch {
    let response_lower = response.to_lowercase();
    let name_lower = business_name.trim().to_lowercase();
    if name_lower.is_empty() {
        return NameMatch::none();
    }

    // Tier 1: the full name appears verbatim.
    if response_lower.contains(&name_lower) {
        return NameMatch {
            mentioned: true,
            mention_type: MentionType::Exact,
            position: find_position_in_list(response, &name_lower),
        };
    }

    // Tier 2: significant-word matching. Short tokens and generic industry
    // vocabulary never identify a business on their own.
    let significant: Vec<&str> = name_lower
        .split_whitespace()
        .filter(|w| w.chars().count() > HEUR.min_name_word_len)
        .filter(|w| !is_generic_word(w))
        .collect();

    match significant.len() {
        0 => NameMatch::none(),
        1 => {
            let word = significant[0];
            if response_lower.contains(word) {
                partial_match(response, &response_lower, word)
            } else {
                NameMatch::none()
            }
        }
        2 => {
            // Both words must appear, and close together; distant
            // co-occurrence is treated as coincidence.
            let a = response_lower.find(significant[0]);
            let b = response_lower.find(significant[1]);
            match (a, b) {
                (Some(a), Some(b)) if a.abs_diff(b) <= HEUR.partial_proximity_chars => {
                    partial_match(response, &response_lower, significant[0])
                }
                _ => NameMatch::none(),
            }
        }
        _ => {
            let found: Vec<&str> = significant
                .iter()
                .filter(|w| response_lower.contains(*w))
                .copied()
                .collect();
            let ratio = found.len() as f64 / significant.len() as f64;
            if found.len() >= HEUR.partial_min_found && ratio >= HEUR.partial_found_ratio {
                partial_match(response, &response_lower, found[0])
            } else {
                NameMatch::none()
            }
        }
    }
}

fn partial_match(response: &str, response_lower: &str, anchor_word: &str) -> NameMatch {
    debug_assert!(response_lower.contains(anchor_word));
    NameMatch {
        mentioned: true,
        mention_type: MentionType::Partial,
        position: find_position_in_list(response, anchor_word),
    }
}

/// Estimate the 1-based rank of a mention inside an enumerated list.
///
/// Scans for the first line containing `term` (lowercase). A leading numbered
/// marker ("3.", "3)", "3:") yields that literal number; ranks are 1-based,
/// so a literal "0." marker is no clearer than a bullet and takes the same
/// fallback as bullet or unmarked lines, the line index capped at 5. Returns
/// `None` only when no line contains the term, which a confirmed match
/// upstream should rule out.
pub fn find_position_in_list(response: &str, term: &str) -> Option<u32> {
    for (idx, line) in response.lines().enumerate() {
        if !line.to_lowercase().contains(term) {
            continue;
        }
        if let Some(caps) = LIST_NUMBER_RE.captures(line) {
            if let Ok(n) = caps[1].parse::<u32>() {
                if n >= 1 {
                    return Some(n);
                }
            }
        }
        return Some((idx as u32 + 1).min(HEUR.position_fallback_cap));
    }
    None
}
