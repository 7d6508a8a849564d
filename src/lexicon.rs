//! Fixed word lists backing the matchers. Kept as plain data so individual
//! terms can be tuned and tested without touching control flow.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Tokens too generic to count as a name match on their own: legal-entity
/// suffixes, industry nouns (German/French/English), major Swiss place names,
/// and catch-all business vocabulary. Business names are usually a proper
/// noun plus an industry descriptor ("Müller Treuhand GmbH"); matching on the
/// descriptor alone would flag every response about that industry.
static GENERIC_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Legal-entity suffixes
        "ag", "gmbh", "sarl", "sa", "ltd", "llc", "inc", "co", "kg",
        // Industry nouns
        "treuhand", "fiduciaire", "notar", "notariat", "anwalt", "advokatur", "zahnarzt", "arzt",
        "praxis", "apotheke", "physiotherapie", "immobilien", "architektur", "bau", "garage",
        "restaurant", "hotel", "baeckerei", "bäckerei", "coiffeur", "versicherung", "bank", "it",
        "informatik", "consulting", "beratung", "agentur", "studio", "atelier",
        // Place and country names
        "zürich", "zuerich", "zurich", "bern", "basel", "genf", "genève", "geneva", "lausanne",
        "luzern", "winterthur", "gallen", "aarau", "zug", "thun", "schweiz", "suisse",
        "switzerland", "swiss",
        // Catch-all business vocabulary
        "service", "services", "solutions", "group", "gruppe", "partner", "partners", "team",
        "office", "center", "zentrum", "expert", "experten", "haus",
    ]
    .into_iter()
    .collect()
});

/// Whether a single lowercase token is too generic to identify a business.
/// Absence from the table means "not generic".
pub fn is_generic_word(word: &str) -> bool {
    GENERIC_TERMS.contains(word)
}

/// Positive adjectives and verbs counted in the sentiment window. Matched as
/// whole tokens; short entries like "top" and "best" would otherwise fire
/// inside unrelated words.
pub(crate) const POSITIVE_TERMS: &[&str] = &[
    "recommend",
    "recommended",
    "excellent",
    "trusted",
    "reliable",
    "professional",
    "quality",
    "reputable",
    "highly",
    "best",
    "top",
    "leading",
    "experienced",
    "specialized",
    "expert",
];

/// Negative single words, matched as whole tokens. A single hit flips the
/// sentiment to negative. "bad" must not fire inside "Baden".
pub(crate) const NEGATIVE_TERMS: &[&str] = &[
    "avoid",
    "poor",
    "bad",
    "negative",
    "complaints",
    "issues",
    "problems",
    "unreliable",
];

/// Negative multi-word phrases, matched by substring.
pub(crate) const NEGATIVE_PHRASES: &[&str] = &["not recommended"];

/// Deflection phrases that mark a response as having no real information,
/// regardless of any concrete-looking detail elsewhere in the text.
pub(crate) const NO_INFO_PHRASES: &[&str] = &[
    "i don't have",
    "i do not have",
    "i couldn't find",
    "i could not find",
    "i cannot find",
    "i can't find",
    "i'm not aware",
    "i am not aware",
    "not familiar with",
    "no specific information",
    "no detailed information",
    "don't have specific details",
    "as of my knowledge cutoff",
    "my knowledge cutoff",
    "recommend checking",
    "recommend searching",
    "suggest checking",
    "contact them directly",
];
