//! NAP (name/address/phone) consistency checking: compares a canonical
//! business record against directory listings with the same fuzzy-matching
//! primitives the visibility scorer uses, and turns mismatches into
//! categorized issues and remediation advice.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::similarity::string_similarity;
use crate::HEUR;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Canonical identity triple, built once per business from its structured
/// address fields.
#[derive(Debug, Clone, Serialize)]
pub struct NapData {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl NapData {
    pub fn new(name: &str, street: &str, postal_code: &str, city: &str, phone: &str) -> Self {
        NapData {
            name: name.trim().to_string(),
            address: format!("{}, {} {}", street.trim(), postal_code.trim(), city.trim()),
            phone: normalize_swiss_phone(phone),
        }
    }
}

/// One external source's claimed NAP. Listings routinely omit fields; absent
/// fields are simply not comparable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CitationNapData {
    pub source: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NapField {
    Name,
    Address,
    Phone,
}

impl NapField {
    fn label(self) -> &'static str {
        match self {
            NapField::Name => "Name",
            NapField::Address => "Address",
            NapField::Phone => "Phone",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NapIssue {
    pub severity: Severity,
    pub field: NapField,
    pub source: String,
    pub expected: String,
    pub found: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitationScore {
    pub source: String,
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NapCheckResult {
    pub overall_score: u32,
    pub issues: Vec<NapIssue>,
    pub citation_scores: Vec<CitationScore>,
    pub recommendations: Vec<String>,
}

/// Listing status band derived from a per-citation score. Callers persist the
/// transition (a listing drops to conflict below 70, counts as verified from
/// 90 up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStatus {
    Verified,
    Partial,
    Conflict,
}

impl CitationStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= HEUR.citation_verified_min {
            CitationStatus::Verified
        } else if score < HEUR.citation_conflict_below {
            CitationStatus::Conflict
        } else {
            CitationStatus::Partial
        }
    }
}

// ---------------------------------------------------------------------------
// Normalizers
// ---------------------------------------------------------------------------

static STREET_ABBR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"str\.?\b").unwrap());

/// Canonicalize a Swiss phone number to `+41 XX XXX XX XX`. Inputs that do
/// not reduce to a nine-digit national number are returned digits-only so
/// comparisons still work on a best-effort basis.
pub fn normalize_swiss_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = if let Some(rest) = digits.strip_prefix("0041") {
        rest.to_string()
    } else if digits.len() == 11 && digits.starts_with("41") {
        digits[2..].to_string()
    } else if digits.len() == 10 && digits.starts_with('0') {
        digits[1..].to_string()
    } else {
        digits.clone()
    };
    if national.len() == 9 {
        format!(
            "+41 {} {} {} {}",
            &national[0..2],
            &national[2..5],
            &national[5..7],
            &national[7..9]
        )
    } else {
        digits
    }
}

/// Normalize an address for fuzzy comparison: lowercase, fold the Str./Str
/// abbreviation to Strasse, strip periods and commas, collapse whitespace.
/// Address variation across directories is mostly abbreviation noise.
pub fn normalize_address(address: &str) -> String {
    let lower = address.to_lowercase();
    let folded = STREET_ABBR_RE.replace_all(&lower, "strasse");
    let stripped: String = folded.chars().filter(|c| *c != '.' && *c != ',').collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

struct FieldCheck {
    field: NapField,
    expected: String,
    found: String,
    matched: bool,
}

fn field_checks(canonical: &NapData, listing: &CitationNapData) -> Vec<FieldCheck> {
    let mut checks = Vec::new();
    if let Some(name) = &listing.name {
        checks.push(FieldCheck {
            field: NapField::Name,
            expected: canonical.name.clone(),
            found: name.clone(),
            matched: string_similarity(&canonical.name.to_lowercase(), &name.to_lowercase())
                >= HEUR.name_similarity_threshold,
        });
    }
    if let Some(address) = &listing.address {
        checks.push(FieldCheck {
            field: NapField::Address,
            expected: canonical.address.clone(),
            found: address.clone(),
            matched: string_similarity(
                &normalize_address(&canonical.address),
                &normalize_address(address),
            ) >= HEUR.name_similarity_threshold,
        });
    }
    if let Some(phone) = &listing.phone {
        checks.push(FieldCheck {
            field: NapField::Phone,
            expected: canonical.phone.clone(),
            found: phone.clone(),
            matched: normalize_swiss_phone(&canonical.phone) == normalize_swiss_phone(phone),
        });
    }
    checks
}

fn score_from_checks(checks: &[FieldCheck]) -> u32 {
    if checks.is_empty() {
        return 0;
    }
    let matched = checks.iter().filter(|c| c.matched).count();
    (matched as f64 / checks.len() as f64 * 100.0).round() as u32
}

fn mismatch_text(check: &FieldCheck) -> String {
    format!(
        "{} differs from the canonical record: expected '{}', found '{}'",
        check.field.label(),
        check.expected,
        check.found
    )
}

/// Match quality of one listing against the canonical record: the rounded
/// percentage of its present fields that match. A listing with no comparable
/// fields scores 0.
pub fn calculate_nap_score(canonical: &NapData, listing: &CitationNapData) -> CitationScore {
    let checks = field_checks(canonical, listing);
    CitationScore {
        source: listing.source.clone(),
        score: score_from_checks(&checks),
        issues: checks
            .iter()
            .filter(|c| !c.matched)
            .map(mismatch_text)
            .collect(),
    }
}

/// Severity of a field mismatch given the citation's overall score. Name and
/// phone drift break entity recognition outright; address variation is
/// tolerated more.
pub fn determine_severity(field: NapField, score: u32) -> Severity {
    match field {
        NapField::Name | NapField::Phone => {
            if score < HEUR.severity_core_field_cutoff {
                Severity::High
            } else {
                Severity::Medium
            }
        }
        NapField::Address => {
            if score < HEUR.severity_address_cutoff {
                Severity::Medium
            } else {
                Severity::Low
            }
        }
    }
}

/// Check every citation against the canonical NAP record. The overall score
/// is the mean of the per-citation scores (0 with no citations, never NaN);
/// issues come back sorted high, medium, low.
pub fn check_nap_consistency(
    canonical: &NapData,
    citations: &[CitationNapData],
) -> NapCheckResult {
    let mut citation_scores: Vec<CitationScore> = Vec::new();
    let mut issues: Vec<NapIssue> = Vec::new();

    for listing in citations {
        let checks = field_checks(canonical, listing);
        let score = score_from_checks(&checks);
        for check in checks.iter().filter(|c| !c.matched) {
            issues.push(NapIssue {
                severity: determine_severity(check.field, score),
                field: check.field,
                source: listing.source.clone(),
                expected: check.expected.clone(),
                found: check.found.clone(),
                message: format!("{}: {}", listing.source, mismatch_text(check)),
            });
        }
        citation_scores.push(CitationScore {
            source: listing.source.clone(),
            score,
            issues: checks
                .iter()
                .filter(|c| !c.matched)
                .map(mismatch_text)
                .collect(),
        });
    }

    let overall_score = if citation_scores.is_empty() {
        0
    } else {
        let sum: u32 = citation_scores.iter().map(|c| c.score).sum();
        (sum as f64 / citation_scores.len() as f64).round() as u32
    };

    issues.sort_by_key(|i| i.severity);

    let recommendations = build_recommendations(&issues, overall_score);

    NapCheckResult {
        overall_score,
        issues,
        citation_scores,
        recommendations,
    }
}

fn build_recommendations(issues: &[NapIssue], overall_score: u32) -> Vec<String> {
    let mut recs = Vec::new();
    if issues.iter().any(|i| i.severity == Severity::High) {
        recs.push(
            "Fix high-severity inconsistencies immediately \u{2014} conflicting name or phone \
             data keeps listings from being tied to one business."
                .to_string(),
        );
    }
    if issues.iter().any(|i| i.field == NapField::Phone) {
        recs.push(
            "Standardize the phone number format (+41 XX XXX XX XX) across all directories."
                .to_string(),
        );
    }
    if issues.iter().any(|i| i.field == NapField::Name) {
        recs.push("Use the exact legal business name on every listing.".to_string());
    }
    if issues.iter().any(|i| i.field == NapField::Address) {
        recs.push("Standardize address spelling and abbreviations (Strasse vs. Str.).".to_string());
    }
    if overall_score < HEUR.overall_critical_below {
        recs.push(
            "Overall consistency is critical \u{2014} AI assistants may not recognize these \
             listings as one entity."
                .to_string(),
        );
    } else if overall_score < HEUR.overall_improve_below {
        recs.push("Improve listing consistency to strengthen recognition across directories."
            .to_string());
    } else if overall_score < HEUR.overall_good_below {
        recs.push("Consistency is good overall; address the remaining mismatches.".to_string());
    }
    recs
}
