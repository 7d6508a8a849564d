//! Calibration dataset and harness. The fixtures are hand-curated businesses
//! with independently verified visibility tiers; running them through the
//! production scorer catches regressions in the matching heuristics. The two
//! look-alike fixtures ("Treuhand Zürich AG", "Swiss Life Beratung") exist to
//! keep keyword overlap and brand-adjacent names from being credited as
//! mentions; do not remove them when editing the dataset.

use serde::Serialize;

use crate::score::{calculate_visibility_score, PromptType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedVisibility {
    High,
    Medium,
    Low,
}

/// Ground-truth fixture. Test data only; never mutated at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationBusiness {
    pub name: &'static str,
    pub city: &'static str,
    pub industry: &'static str,
    pub expected_visibility: ExpectedVisibility,
    pub expected_score_min: u32,
    pub expected_score_max: u32,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationResult {
    pub business: CalibrationBusiness,
    pub actual_score: u32,
    pub passed: bool,
    /// 0 when passed; negative when under the range, positive when over.
    pub deviation: i32,
    pub details: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percent of fixtures whose score fell inside the expected range.
    pub accuracy: f64,
    /// Mean absolute deviation across failed fixtures, 0.0 when none fail.
    pub avg_deviation: f64,
    pub failed_tests: Vec<CalibrationResult>,
}

pub const CALIBRATION_DATASET: &[CalibrationBusiness] = &[
    // High tier: national brands AI assistants name unprompted.
    CalibrationBusiness {
        name: "PwC Switzerland",
        city: "Zürich",
        industry: "Wirtschaftsprüfung",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Big Four presence; consistently recommended for audit and tax queries.",
    },
    CalibrationBusiness {
        name: "KPMG AG",
        city: "Zürich",
        industry: "Wirtschaftsprüfung",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Big Four presence with a strong Zürich footprint.",
    },
    CalibrationBusiness {
        name: "UBS AG",
        city: "Zürich",
        industry: "Bank",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Largest Swiss bank; appears in virtually every banking answer.",
    },
    CalibrationBusiness {
        name: "Swisscom AG",
        city: "Bern",
        industry: "Telekommunikation",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Incumbent telecom provider, near-universal name recognition.",
    },
    CalibrationBusiness {
        name: "Migros",
        city: "Zürich",
        industry: "Detailhandel",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Largest Swiss retailer.",
    },
    CalibrationBusiness {
        name: "Roche",
        city: "Basel",
        industry: "Pharma",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Global pharma group headquartered in Basel.",
    },
    CalibrationBusiness {
        name: "Novartis AG",
        city: "Basel",
        industry: "Pharma",
        expected_visibility: ExpectedVisibility::High,
        expected_score_min: 70,
        expected_score_max: 100,
        notes: "Global pharma group headquartered in Basel.",
    },
    // Medium tier: regionally known firms that get named but not detailed.
    CalibrationBusiness {
        name: "Hiltl AG",
        city: "Zürich",
        industry: "Restaurant",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Known vegetarian restaurant; mentioned without depth.",
    },
    CalibrationBusiness {
        name: "Confiserie Sprüngli",
        city: "Zürich",
        industry: "Confiserie",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Regional confectionery brand.",
    },
    CalibrationBusiness {
        name: "Freitag lab AG",
        city: "Zürich",
        industry: "Taschenmanufaktur",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Design brand recognized by name, rarely with specifics.",
    },
    CalibrationBusiness {
        name: "Läderach AG",
        city: "Ennenda",
        industry: "Schokolade",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Chocolate maker with national retail presence.",
    },
    CalibrationBusiness {
        name: "Hotel Schweizerhof Bern",
        city: "Bern",
        industry: "Hotel",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Established five-star house, moderate assistant coverage.",
    },
    CalibrationBusiness {
        name: "Bider & Tanner AG",
        city: "Basel",
        industry: "Buchhandlung",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Regional bookseller.",
    },
    CalibrationBusiness {
        name: "Confiserie Bachmann",
        city: "Luzern",
        industry: "Confiserie",
        expected_visibility: ExpectedVisibility::Medium,
        expected_score_min: 45,
        expected_score_max: 75,
        notes: "Lucerne institution with little coverage outside the region.",
    },
    // Low tier: verified near-zero visibility, including the two name traps.
    CalibrationBusiness {
        name: "Treuhand Zürich AG",
        city: "Zürich",
        industry: "Treuhand",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Name is a generic industry term plus a city; keyword overlap with any \
                Treuhand answer must not count as a mention.",
    },
    CalibrationBusiness {
        name: "Swiss Life Beratung",
        city: "Zürich",
        industry: "Finanzberatung",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Name shadows the Swiss Life insurance brand; coverage of the insurer is \
                not coverage of this firm.",
    },
    CalibrationBusiness {
        name: "Hartmann Notar",
        city: "Aarau",
        industry: "Notariat",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Single-person notary office; verified absent from assistant answers.",
    },
    CalibrationBusiness {
        name: "Müller Sanitär GmbH",
        city: "Winterthur",
        industry: "Sanitär",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Small trade business with no directory footprint.",
    },
    CalibrationBusiness {
        name: "Schneider Elektro AG",
        city: "Luzern",
        industry: "Elektroinstallation",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Small trade business with no directory footprint.",
    },
    CalibrationBusiness {
        name: "Weber Gartenbau",
        city: "Thun",
        industry: "Gartenbau",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Local landscaping firm, no assistant coverage.",
    },
    CalibrationBusiness {
        name: "Praxis Dr. Keller",
        city: "Zug",
        industry: "Zahnmedizin",
        expected_visibility: ExpectedVisibility::Low,
        expected_score_min: 0,
        expected_score_max: 20,
        notes: "Single dental practice, no assistant coverage.",
    },
];

/// Check one actual score against a fixture's expected range.
pub fn validate_score(business: &CalibrationBusiness, actual_score: u32) -> CalibrationResult {
    debug_assert!(
        business.expected_score_min <= business.expected_score_max,
        "malformed fixture: {}",
        business.name
    );
    let passed = actual_score >= business.expected_score_min
        && actual_score <= business.expected_score_max;
    let deviation = if passed {
        0
    } else if actual_score < business.expected_score_min {
        -((business.expected_score_min - actual_score) as i32)
    } else {
        (actual_score - business.expected_score_max) as i32
    };
    let details = if passed {
        format!(
            "{}: score {} within expected [{}, {}]",
            business.name, actual_score, business.expected_score_min, business.expected_score_max
        )
    } else {
        format!(
            "{}: score {} outside expected [{}, {}] (deviation {})",
            business.name,
            actual_score,
            business.expected_score_min,
            business.expected_score_max,
            deviation
        )
    };
    CalibrationResult {
        business: business.clone(),
        actual_score,
        passed,
        deviation,
        details,
    }
}

/// Aggregate a batch of calibration results.
pub fn calculate_calibration_accuracy(results: &[CalibrationResult]) -> CalibrationReport {
    let total_tests = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total_tests - passed;
    let accuracy = if total_tests == 0 {
        0.0
    } else {
        passed as f64 / total_tests as f64 * 100.0
    };
    let failed_tests: Vec<CalibrationResult> =
        results.iter().filter(|r| !r.passed).cloned().collect();
    let avg_deviation = if failed == 0 {
        0.0
    } else {
        failed_tests
            .iter()
            .map(|r| r.deviation.unsigned_abs() as f64)
            .sum::<f64>()
            / failed as f64
    };
    CalibrationReport {
        total_tests,
        passed,
        failed,
        accuracy,
        avg_deviation,
        failed_tests,
    }
}

/// Deterministic stand-in for a live model call, one template per expected
/// tier. High-tier fixtures get a ranked recommendation with concrete
/// details, medium-tier a flat factual mention, low-tier an answer about the
/// market that names nobody in particular.
pub fn simulated_response(business: &CalibrationBusiness) -> String {
    match business.expected_visibility {
        ExpectedVisibility::High => {
            let slug: String = business
                .name
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            format!(
                "1. {name} - highly recommended and trusted {industry} in {city}. Offices at \
                 Bahnhofstrasse 10, 8001 {city}. More at www.{slug}.ch or +41 44 210 10 10.\n\
                 2. Treuhand Partner AG - another established option.\n\
                 3. Weitere regionale Anbieter.",
                name = business.name,
                industry = business.industry,
                city = business.city,
                slug = slug,
            )
        }
        ExpectedVisibility::Medium => format!(
            "{} is one of several {} providers in {}. The firm serves a steady local \
             client base.",
            business.name, business.industry, business.city
        ),
        ExpectedVisibility::Low => format!(
            "Established names dominate this market. Local directories list dozens of {} \
             firms in {} and rankings shift frequently.",
            business.industry, business.city
        ),
    }
}

fn prompt_type_for(tier: ExpectedVisibility) -> PromptType {
    // Ground truth for the high and low tiers came from ranked local-search
    // answers; the medium tier from direct single-entity queries.
    match tier {
        ExpectedVisibility::High | ExpectedVisibility::Low => PromptType::LocalSearch,
        ExpectedVisibility::Medium => PromptType::DirectQuery,
    }
}

/// Run the whole dataset through the production scorer and aggregate the
/// outcome. This is the offline regression check for the heuristics table.
pub fn run_calibration() -> CalibrationReport {
    let results: Vec<CalibrationResult> = CALIBRATION_DATASET
        .iter()
        .map(|business| {
            let response = simulated_response(business);
            let breakdown = calculate_visibility_score(
                &response,
                business.name,
                prompt_type_for(business.expected_visibility),
            );
            validate_score(business, breakdown.total)
        })
        .collect();
    calculate_calibration_accuracy(&results)
}
