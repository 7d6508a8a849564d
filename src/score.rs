//! Combines mention, position, information-quality, and sentiment signals
//! into a calibrated 0-100 visibility score.

use serde::Serialize;

use crate::info_quality::has_real_business_info;
use crate::mention::{analyze_name_mention, MentionType};
use crate::sentiment::{analyze_sentiment, Sentiment};
use crate::{BusinessContext, HEUR};

/// The shape of the prompt the response came from. Rank only means something
/// when the model was asked for a list of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptType {
    LocalSearch,
    DirectQuery,
}

/// Full per-response analysis record.
#[derive(Debug, Clone, Serialize)]
pub struct MentionAnalysis {
    pub mentioned: bool,
    pub mention_type: MentionType,
    pub position: Option<u32>,
    pub has_real_info: bool,
    pub sentiment: Sentiment,
    /// Advisory 0-100 confidence in the match; not part of the final score.
    pub confidence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub mention_score: u32,
    pub position_score: u32,
    pub info_quality_score: u32,
    pub sentiment_score: u32,
    pub explanation: String,
}

/// Run the full analysis pipeline for one response against a business.
pub fn analyze_mention(response: &str, business: &BusinessContext) -> MentionAnalysis {
    let name_match = analyze_name_mention(response, &business.name);
    if !name_match.mentioned {
        return MentionAnalysis {
            mentioned: false,
            mention_type: MentionType::None,
            position: None,
            has_real_info: false,
            sentiment: Sentiment::Unknown,
            confidence: 0,
        };
    }
    MentionAnalysis {
        mentioned: true,
        mention_type: name_match.mention_type,
        position: name_match.position,
        has_real_info: has_real_business_info(response),
        sentiment: analyze_sentiment(response, &business.name),
        confidence: match name_match.mention_type {
            MentionType::Exact => HEUR.confidence_exact,
            MentionType::Partial => HEUR.confidence_partial,
            MentionType::None => 0,
        },
    }
}

/// Score a raw model response for one business. Sub-score ceilings: mention
/// 40, position 25, info quality 20, sentiment 15. An absent mention scores
/// zero across the board; the other signals are meaningless without it.
pub fn calculate_visibility_score(
    response: &str,
    business_name: &str,
    prompt_type: PromptType,
) -> ScoreBreakdown {
    let name_match = analyze_name_mention(response, business_name);
    if !name_match.mentioned {
        return ScoreBreakdown {
            total: 0,
            mention_score: 0,
            position_score: 0,
            info_quality_score: 0,
            sentiment_score: 0,
            explanation: "Business was not mentioned in AI response.".to_string(),
        };
    }

    let mut clauses: Vec<String> = Vec::new();

    let mention_score = match name_match.mention_type {
        MentionType::Exact => {
            clauses.push("Business name found exactly in the response.".to_string());
            HEUR.mention_exact_score
        }
        MentionType::Partial => {
            clauses.push("Business name partially matched in the response.".to_string());
            HEUR.mention_partial_score
        }
        MentionType::None => unreachable!("mentioned implies a match type"),
    };

    let position_score = match prompt_type {
        PromptType::LocalSearch => match name_match.position {
            Some(p) if p >= 1 => {
                clauses.push(format!("Listed at position {p}."));
                *HEUR
                    .local_position_ladder
                    .get(p as usize - 1)
                    .unwrap_or(&HEUR.position_unresolved_score)
            }
            _ => {
                clauses.push("Mentioned without a clear list position.".to_string());
                HEUR.position_unresolved_score
            }
        },
        PromptType::DirectQuery => {
            clauses.push("Direct query; list position not applicable.".to_string());
            HEUR.direct_query_position_score
        }
    };

    let info_quality_score = if has_real_business_info(response) {
        clauses.push("Response includes concrete business details.".to_string());
        HEUR.info_full_score
    } else {
        clauses.push("Response lacks concrete business details.".to_string());
        HEUR.info_filler_score
    };

    let sentiment_score = match analyze_sentiment(response, business_name) {
        Sentiment::Positive => {
            clauses.push("Surrounding context is positive.".to_string());
            HEUR.sentiment_positive_score
        }
        Sentiment::Neutral => {
            clauses.push("Surrounding context is neutral.".to_string());
            HEUR.sentiment_neutral_score
        }
        Sentiment::Negative => {
            clauses.push("Surrounding context is negative.".to_string());
            HEUR.sentiment_negative_score
        }
        Sentiment::Unknown => {
            clauses.push("Sentiment could not be determined.".to_string());
            HEUR.sentiment_unknown_score
        }
    };

    ScoreBreakdown {
        total: mention_score + position_score + info_quality_score + sentiment_score,
        mention_score,
        position_score,
        info_quality_score,
        sentiment_score,
        explanation: clauses.join(" "),
    }
}
