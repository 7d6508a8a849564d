use visibility_guard::{
    analyze_mention, analyze_name_mention, analyze_sentiment, calculate_visibility_score,
    has_real_business_info, is_generic_word, BusinessContext, MentionType, PromptType, Sentiment,
};

#[test]
fn end_to_end_local_search_recommendation() {
    let response = "I recommend KPMG AG, a leading accounting firm in Zürich with offices at \
                    Bahnhofstrasse 1, 8001 Zürich, website kpmg.ch.";
    let mention = analyze_name_mention(response, "KPMG AG");
    assert!(mention.mentioned);
    assert_eq!(mention.mention_type, MentionType::Exact);

    assert!(has_real_business_info(response));
    assert_eq!(analyze_sentiment(response, "KPMG AG"), Sentiment::Positive);

    let breakdown = calculate_visibility_score(response, "KPMG AG", PromptType::LocalSearch);
    assert_eq!(breakdown.mention_score, 40);
    assert_eq!(breakdown.info_quality_score, 20);
    assert_eq!(breakdown.sentiment_score, 15);
    assert!(
        breakdown.total >= 80 && breakdown.total <= 100,
        "expected a high-visibility total, got {}",
        breakdown.total
    );
}

#[test]
fn absent_mention_scores_zero_everywhere() {
    let breakdown = calculate_visibility_score(
        "Es gibt viele gute Anbieter in der Region.",
        "Hartmann Notar",
        PromptType::LocalSearch,
    );
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.mention_score, 0);
    assert_eq!(breakdown.position_score, 0);
    assert_eq!(breakdown.info_quality_score, 0);
    assert_eq!(breakdown.sentiment_score, 0);
    assert_eq!(
        breakdown.explanation,
        "Business was not mentioned in AI response."
    );
}

#[test]
fn exact_requires_literal_substring() {
    let mention = analyze_name_mention(
        "Zubler Treuhand finden Sie in Aarau.",
        "Zubler Treuhand AG",
    );
    assert!(mention.mentioned);
    assert_eq!(mention.mention_type, MentionType::Partial);
}

#[test]
fn generic_industry_word_alone_is_not_a_mention() {
    assert!(is_generic_word("treuhand"));
    assert!(!is_generic_word("zubler"));

    let mention = analyze_name_mention(
        "Eine Treuhand kümmert sich um Buchhaltung und Steuern.",
        "Müller Treuhand GmbH",
    );
    assert!(!mention.mentioned);
    assert_eq!(mention.mention_type, MentionType::None);
    assert_eq!(mention.position, None);
}

#[test]
fn all_generic_name_only_matches_verbatim() {
    // Every token of this name is either generic or too short, so nothing
    // less than the full string may count.
    let mention = analyze_name_mention(
        "Die besten Treuhand Angebote in Zürich vergleichen.",
        "Treuhand Zürich AG",
    );
    assert!(!mention.mentioned);

    let verbatim = analyze_name_mention(
        "Die Treuhand Zürich AG ist ein kleines Büro.",
        "Treuhand Zürich AG",
    );
    assert_eq!(verbatim.mention_type, MentionType::Exact);
}

#[test]
fn two_word_match_requires_proximity() {
    let far = "Baumann ist ein häufiger Nachname in der Schweiz und taucht oft in \
               Firmennamen auf. Ganz unabhängig davon gibt es Keller als Weinlokal.";
    assert!(!analyze_name_mention(far, "Baumann Keller AG").mentioned);

    let near = "Keller und Baumann führen die Kanzlei gemeinsam.";
    let mention = analyze_name_mention(near, "Baumann Keller AG");
    assert!(mention.mentioned);
    assert_eq!(mention.mention_type, MentionType::Partial);
}

#[test]
fn long_name_needs_sixty_percent_of_words() {
    let three_of_four = analyze_name_mention(
        "Alpha und Beta arbeiten mit Gamma zusammen.",
        "Alpha Beta Gamma Delta AG",
    );
    assert_eq!(three_of_four.mention_type, MentionType::Partial);

    let two_of_four = analyze_name_mention(
        "Alpha und Beta sind bekannt.",
        "Alpha Beta Gamma Delta AG",
    );
    assert!(!two_of_four.mentioned);
}

#[test]
fn single_distinctive_word_is_enough() {
    let mention = analyze_name_mention(
        "Frau Zimmermann verkauft Häuser in der ganzen Stadt.",
        "Zimmermann Immobilien AG",
    );
    assert!(mention.mentioned);
    assert_eq!(mention.mention_type, MentionType::Partial);
}

#[test]
fn numbered_list_position_is_extracted() {
    let mention = analyze_name_mention("1. Firma A\n2. Firma B\n3. Target Firma", "Target Firma");
    assert_eq!(mention.mention_type, MentionType::Exact);
    assert_eq!(mention.position, Some(3));
}

#[test]
fn bullet_list_falls_back_to_line_index() {
    let response = "Hier einige Empfehlungen:\n- Treuhand Partner AG\n- Fiduciaria Rossi";
    let mention = analyze_name_mention(response, "Fiduciaria Rossi");
    assert_eq!(mention.position, Some(3));
}

#[test]
fn zero_list_marker_is_not_a_rank() {
    let mention = analyze_name_mention("0. Acme Partner AG als Sonderfall", "Acme Partner AG");
    assert_eq!(mention.mention_type, MentionType::Exact);
    assert_eq!(mention.position, Some(1));
}

#[test]
fn fallback_position_is_capped_at_five() {
    let response = "a\nb\nc\nd\ne\nf\ng\nh\nZieger Immobilien Verwaltung";
    let mention = analyze_name_mention(response, "Zieger Immobilien");
    assert_eq!(mention.position, Some(5));
}

#[test]
fn direct_query_skips_the_position_ladder() {
    let response = "I recommend KPMG AG, a leading accounting firm in Zürich with offices at \
                    Bahnhofstrasse 1, 8001 Zürich, website kpmg.ch.";
    let breakdown = calculate_visibility_score(response, "KPMG AG", PromptType::DirectQuery);
    assert_eq!(breakdown.position_score, 15);
}

#[test]
fn sentiment_is_unknown_without_a_mention() {
    assert_eq!(
        analyze_sentiment("Niemand kennt diese Firma.", "Acme Consulting"),
        Sentiment::Unknown
    );
}

#[test]
fn one_negative_word_dominates() {
    let response = "Viele Kunden berichten über Probleme mit Acme Partner: avoid this provider.";
    assert_eq!(analyze_sentiment(response, "Acme Partner"), Sentiment::Negative);

    let breakdown = calculate_visibility_score(response, "Acme Partner", PromptType::DirectQuery);
    assert_eq!(breakdown.sentiment_score, 0);
}

#[test]
fn single_positive_word_stays_neutral() {
    let response = "Acme Partner ist ein reliable Anbieter.";
    assert_eq!(analyze_sentiment(response, "Acme Partner"), Sentiment::Neutral);
}

#[test]
fn lexicon_words_match_whole_tokens_only() {
    // "bad" must not fire inside the city name Baden.
    let response = "Acme AG in Baden ist empfehlenswert und reliable.";
    assert_eq!(analyze_sentiment(response, "Acme AG"), Sentiment::Neutral);

    // "top"/"best" inside larger words are not positive hits either.
    let response = "Acme AG liefert topaktuelle Zahlen und bestellt die Unterlagen.";
    assert_eq!(analyze_sentiment(response, "Acme AG"), Sentiment::Neutral);
}

#[test]
fn deflection_phrase_overrides_concrete_detail() {
    let response = "I couldn't find current details for this firm, Bahnhofstrasse 1, 8001 Zürich.";
    assert!(!has_real_business_info(response));
}

#[test]
fn concrete_identifiers_are_sufficient_alone() {
    assert!(has_real_business_info("Mehr auf treuhand-mueller.ch."));
    assert!(has_real_business_info("Telefon: 044 123 45 67."));
    assert!(has_real_business_info("Das Büro liegt an der Bahnhofstrasse 1, 8001 Zürich."));
}

#[test]
fn short_generic_text_has_no_real_info() {
    assert!(!has_real_business_info(
        "Das ist eine bekannte Firma in der Region."
    ));
}

#[test]
fn service_list_rescues_a_short_response() {
    assert!(has_real_business_info(
        "Angebot: Steuerberatung, Buchführung, Revision und Lohnadministration."
    ));
}

#[test]
fn scoring_is_idempotent() {
    let response = "I recommend KPMG AG, a leading accounting firm in Zürich with offices at \
                    Bahnhofstrasse 1, 8001 Zürich, website kpmg.ch.";
    let first = calculate_visibility_score(response, "KPMG AG", PromptType::LocalSearch);
    let second = calculate_visibility_score(response, "KPMG AG", PromptType::LocalSearch);
    assert_eq!(first, second);
}

#[test]
fn empty_name_is_never_mentioned() {
    let breakdown = calculate_visibility_score("Beliebiger Text.", "", PromptType::LocalSearch);
    assert_eq!(breakdown.total, 0);
    assert!(!analyze_name_mention("Beliebiger Text.", "   ").mentioned);
}

#[test]
fn analysis_report_serializes() {
    let business = BusinessContext {
        name: "KPMG AG".to_string(),
        industry: "Wirtschaftsprüfung".to_string(),
        city: "Zürich".to_string(),
        canton: Some("ZH".to_string()),
        services: vec!["Revision".to_string(), "Steuern".to_string()],
    };
    let response = "I recommend KPMG AG, a leading accounting firm in Zürich with offices at \
                    Bahnhofstrasse 1, 8001 Zürich, website kpmg.ch.";
    let analysis = analyze_mention(response, &business);
    assert!(analysis.mentioned);
    assert!(analysis.has_real_info);
    assert_eq!(analysis.confidence, 95);

    let json = serde_json::to_string_pretty(&analysis).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["mention_type"], "exact");
    assert_eq!(parsed["sentiment"], "positive");
    assert!(parsed.get("confidence").is_some());
}
