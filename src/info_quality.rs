//! Classifies a response as carrying genuine business detail versus generic
//! or deflecting filler.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::NO_INFO_PHRASES;
use crate::HEUR;

// Swiss postal code followed by a locality word.
static POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\s+\p{L}{2,}").unwrap());

static WEB_DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z0-9][a-z0-9-]*\.(?:ch|com|swiss|org)\b").unwrap());

// +41 international form, or 0XX national form with digit groups.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+41[\s\d]{7,}|\b0\d{2}[\s/.]?\d{3}[\s.]?\d{2}[\s.]?\d{2}\b").unwrap()
});

/// Whether a response contains substantive detail rather than filler.
///
/// A deflection phrase ("I couldn't find...") overrides everything else: a
/// model hedging about its knowledge is not a source of facts even when the
/// text looks specific. Otherwise any concrete identifier (address, website,
/// phone) is sufficient on its own; without one, short responses with no
/// enumerated service list are classified as filler.
pub fn has_real_business_info(response: &str) -> bool {
    let lower = response.to_lowercase();
    if NO_INFO_PHRASES.iter().any(|p| lower.contains(p)) {
        return false;
    }

    if POSTAL_CODE_RE.is_match(response)
        || WEB_DOMAIN_RE.is_match(response)
        || PHONE_RE.is_match(response)
    {
        return true;
    }

    let has_service_list = response
        .lines()
        .any(|l| l.matches(',').count() >= HEUR.service_list_min_commas);
    if response.chars().count() < HEUR.short_response_chars && !has_service_list {
        return false;
    }
    true
}
