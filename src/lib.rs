//! Scoring engine for business visibility in AI assistant responses.
//!
//! Takes a raw natural-language response from a language model and determines
//! whether a specific business was actually referenced (as opposed to a
//! coincidental word match), how prominently, whether the response carries
//! genuine factual detail, and the sentiment of the surrounding context. The
//! signals combine into a 0-100 score. A companion NAP (name/address/phone)
//! checker applies the same fuzzy-matching primitives to directory listings,
//! and a calibration dataset validates scoring accuracy against known tiers.

use serde::Serialize;

pub mod calibration;
pub mod info_quality;
pub mod lexicon;
pub mod mention;
pub mod nap;
pub mod score;
pub mod sentiment;
pub mod similarity;

pub use calibration::{
    calculate_calibration_accuracy, run_calibration, simulated_response, validate_score,
    CalibrationBusiness, CalibrationReport, CalibrationResult, ExpectedVisibility,
    CALIBRATION_DATASET,
};
pub use info_quality::has_real_business_info;
pub use lexicon::is_generic_word;
pub use mention::{analyze_name_mention, MentionType, NameMatch};
pub use nap::{
    calculate_nap_score, check_nap_consistency, determine_severity, normalize_address,
    normalize_swiss_phone, CitationNapData, CitationScore, CitationStatus, NapCheckResult,
    NapData, NapField, NapIssue, Severity,
};
pub use score::{
    analyze_mention, calculate_visibility_score, MentionAnalysis, PromptType, ScoreBreakdown,
};
pub use sentiment::{analyze_sentiment, Sentiment};
pub use similarity::string_similarity;

// ---------------------------------------------------------------------------
// Query subject
// ---------------------------------------------------------------------------

/// The business a response is checked against. Built once per invocation by
/// the caller; the engine never persists it.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessContext {
    pub name: String,
    pub industry: String,
    pub city: String,
    pub canton: Option<String>,
    pub services: Vec<String>,
}

// ---------------------------------------------------------------------------
// Heuristics
// ---------------------------------------------------------------------------

/// Calibrated constants. The thresholds here are empirical tuning artifacts
/// validated against the calibration dataset, not architectural requirements;
/// changing any of them means re-validating against that dataset.
pub(crate) struct Heuristics {
    /// Name words at or below this length never count toward matching.
    pub min_name_word_len: usize,
    /// Two-word partial matches require both words within this many bytes.
    pub partial_proximity_chars: usize,
    /// Longer names need at least this many significant words found.
    pub partial_min_found: usize,
    /// ...and at least this fraction of all significant words found.
    pub partial_found_ratio: f64,
    /// Fallback list rank is capped here when no numeric marker is present.
    pub position_fallback_cap: u32,
    pub sentiment_window_chars: usize,
    pub sentiment_positive_min: usize,
    /// Responses shorter than this with no service list carry no real info.
    pub short_response_chars: usize,
    /// A line with this many commas implies an enumerated service list.
    pub service_list_min_commas: usize,
    pub confidence_exact: u32,
    pub confidence_partial: u32,
    pub mention_exact_score: u32,
    pub mention_partial_score: u32,
    /// Position points for local-search ranks 1-5; later ranks score 5.
    pub local_position_ladder: [u32; 5],
    pub position_unresolved_score: u32,
    pub direct_query_position_score: u32,
    pub info_full_score: u32,
    pub info_filler_score: u32,
    pub sentiment_positive_score: u32,
    pub sentiment_neutral_score: u32,
    pub sentiment_negative_score: u32,
    pub sentiment_unknown_score: u32,
    /// Bigram similarity at or above this counts as a NAP field match.
    pub name_similarity_threshold: f64,
    /// Name/phone mismatches below this citation score are high severity.
    pub severity_core_field_cutoff: u32,
    /// Address mismatches below this citation score are medium severity.
    pub severity_address_cutoff: u32,
    pub citation_verified_min: u32,
    pub citation_conflict_below: u32,
    pub overall_critical_below: u32,
    pub overall_improve_below: u32,
    pub overall_good_below: u32,
}

pub(crate) static HEUR: Heuristics = Heuristics {
    min_name_word_len: 2,
    partial_proximity_chars: 50,
    partial_min_found: 2,
    partial_found_ratio: 0.6,
    position_fallback_cap: 5,
    sentiment_window_chars: 100,
    sentiment_positive_min: 2,
    short_response_chars: 200,
    service_list_min_commas: 2,
    confidence_exact: 95,
    confidence_partial: 70,
    mention_exact_score: 40,
    mention_partial_score: 25,
    local_position_ladder: [25, 20, 15, 10, 10],
    position_unresolved_score: 5,
    direct_query_position_score: 15,
    info_full_score: 20,
    info_filler_score: 5,
    sentiment_positive_score: 15,
    sentiment_neutral_score: 10,
    sentiment_negative_score: 0,
    sentiment_unknown_score: 5,
    name_similarity_threshold: 0.8,
    severity_core_field_cutoff: 50,
    severity_address_cutoff: 30,
    citation_verified_min: 90,
    citation_conflict_below: 70,
    overall_critical_below: 50,
    overall_improve_below: 70,
    overall_good_below: 90,
};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Snap a byte offset to a valid char boundary.
/// If `forward` is true, snap forward; otherwise snap backward.
pub(crate) fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    if text.is_char_boundary(pos) {
        return pos;
    }
    if forward {
        let mut p = pos;
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
        p
    } else {
        let mut p = pos;
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
        p
    }
}
