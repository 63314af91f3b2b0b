use std::collections::BTreeMap;

use regime_risk::catalog::{
    case_store, factor_catalog, factor_order, model_catalog, HistoricalCase, Outcome, Scores,
    TheoreticalModel,
};
use regime_risk::error::EngineError;
use regime_risk::matching::{
    averages_by_outcome, consensus, factor_discriminative_power, find_similar_cases,
    AgreementLevel, CaseSimilarity,
};

fn scores_from(pairs: &[(&str, f64)]) -> Scores {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn test_model(id: &str, weights: &[(&str, f64)]) -> TheoreticalModel {
    TheoreticalModel {
        id: id.to_string(),
        name: id.to_string(),
        author: "test".to_string(),
        cluster: "test".to_string(),
        weights: weights.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

fn test_case(id: &str, outcome: Outcome, pairs: &[(&str, f64)]) -> HistoricalCase {
    HistoricalCase {
        id: id.to_string(),
        country: id.to_string(),
        period: "test".to_string(),
        start_year: 2000,
        end_year: None,
        outcome,
        outcome_score: 50.0,
        factors: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        notes: String::new(),
        sources: Vec::new(),
    }
}

#[test]
fn test_different_weights_produce_different_rankings() {
    // Identical raw scores and case store; only the theoretical lens changes.
    let order = vec!["judicial".to_string(), "media".to_string()];
    let scores = scores_from(&[("judicial", 80.0), ("media", 80.0)]);
    let cases = vec![
        test_case("courts_case", Outcome::Consolidated, &[("judicial", 90.0), ("media", 20.0)]),
        test_case("press_case", Outcome::Consolidated, &[("judicial", 20.0), ("media", 90.0)]),
    ];
    let judicial_lens = test_model("judicial_lens", &[("judicial", 0.9), ("media", 0.1)]);
    let media_lens = test_model("media_lens", &[("judicial", 0.1), ("media", 0.9)]);

    let by_judicial = find_similar_cases(&scores, &judicial_lens, &cases, &order, 0.5).unwrap();
    let by_media = find_similar_cases(&scores, &media_lens, &cases, &order, 0.5).unwrap();

    assert_eq!(by_judicial[0].case_id, "courts_case");
    assert_eq!(by_media[0].case_id, "press_case");
}

#[test]
fn test_threshold_filters_matches() {
    let order = vec!["judicial".to_string(), "media".to_string()];
    let scores = scores_from(&[("judicial", 80.0), ("media", 80.0)]);
    let cases = vec![
        test_case("close", Outcome::Resisted, &[("judicial", 90.0), ("media", 20.0)]),
        test_case("far", Outcome::Resisted, &[("judicial", 20.0), ("media", 90.0)]),
    ];
    let lens = test_model("lens", &[("judicial", 0.9), ("media", 0.1)]);

    let strict = find_similar_cases(&scores, &lens, &cases, &order, 0.99).unwrap();
    assert_eq!(strict.len(), 1);
    assert_eq!(strict[0].case_id, "close");
}

#[test]
fn test_zero_weight_model_is_degenerate() {
    let order = vec!["judicial".to_string()];
    let scores = scores_from(&[("judicial", 80.0)]);
    let cases = vec![test_case("any", Outcome::Ongoing, &[("judicial", 50.0)])];
    let lens = test_model("null_lens", &[]);

    let err = find_similar_cases(&scores, &lens, &cases, &order, 0.85).unwrap_err();
    assert!(matches!(err, EngineError::DegenerateVector));
}

#[test]
fn test_empty_case_store_fails() {
    let order = vec!["judicial".to_string()];
    let scores = scores_from(&[("judicial", 80.0)]);
    let lens = test_model("lens", &[("judicial", 1.0)]);
    let err = find_similar_cases(&scores, &lens, &[], &order, 0.85).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput(_)));
}

#[test]
fn test_identical_vector_tops_catalog_retrieval() {
    // Scores copied from a catalog case must retrieve that case at
    // similarity 1 under any model.
    let factors = factor_catalog();
    let order = factor_order(&factors);
    let cases = case_store();
    let russia = cases.iter().find(|c| c.id == "russia_2000").unwrap();
    let models = model_catalog();
    let model = models.iter().find(|m| m.id == "levitsky_way").unwrap();

    let matches =
        find_similar_cases(&russia.factors, model, &cases, &order, 0.85).unwrap();
    assert_eq!(matches[0].case_id, "russia_2000");
    assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    for m in &matches {
        assert!(m.similarity <= 1.0 + 1e-9 && m.similarity >= -1.0 - 1e-9);
    }
}

fn sim(case_id: &str, similarity: f64) -> CaseSimilarity {
    CaseSimilarity {
        case_id: case_id.to_string(),
        country: case_id.to_string(),
        period: "test".to_string(),
        similarity,
        outcome: Outcome::Consolidated,
        outcome_score: 80.0,
    }
}

#[test]
fn test_consensus_aggregates_tops_and_citations() {
    let mut per_model: BTreeMap<String, Vec<CaseSimilarity>> = BTreeMap::new();
    per_model.insert(
        "model_a".to_string(),
        vec![sim("hungary_2010", 0.95), sim("turkey_2013", 0.90)],
    );
    per_model.insert("model_b".to_string(), vec![sim("hungary_2010", 0.92)]);
    per_model.insert("model_c".to_string(), Vec::new());

    let c = consensus(&per_model).unwrap();
    assert!((c.mean_top - 0.935).abs() < 1e-9);
    assert!((c.min_top - 0.92).abs() < 1e-9);
    assert!((c.max_top - 0.95).abs() < 1e-9);
    assert_eq!(c.agreement, AgreementLevel::High);

    assert_eq!(c.most_cited.len(), 1);
    assert_eq!(c.most_cited[0].case_id, "hungary_2010");
    assert_eq!(c.most_cited[0].cited_by, vec!["model_a".to_string(), "model_b".to_string()]);
}

#[test]
fn test_consensus_requires_at_least_one_match() {
    let mut per_model: BTreeMap<String, Vec<CaseSimilarity>> = BTreeMap::new();
    per_model.insert("model_a".to_string(), Vec::new());
    let err = consensus(&per_model).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput(_)));
}

#[test]
fn test_agreement_bands_monotonic_in_spread() {
    assert_eq!(AgreementLevel::from_spread(0.01), AgreementLevel::High);
    assert_eq!(AgreementLevel::from_spread(0.08), AgreementLevel::Moderate);
    assert_eq!(AgreementLevel::from_spread(0.30), AgreementLevel::Low);
}

#[test]
fn test_averages_by_outcome_groups_independently() {
    let cases = vec![
        test_case("a", Outcome::Consolidated, &[("judicial", 80.0), ("media", 60.0)]),
        test_case("b", Outcome::Consolidated, &[("judicial", 60.0), ("media", 40.0)]),
        test_case("c", Outcome::Resisted, &[("judicial", 30.0), ("media", 30.0)]),
    ];
    let averages = averages_by_outcome(&cases);
    assert_eq!(averages[&Outcome::Consolidated]["judicial"], 70.0);
    assert_eq!(averages[&Outcome::Consolidated]["media"], 50.0);
    assert_eq!(averages[&Outcome::Resisted]["judicial"], 30.0);
}

#[test]
fn test_discriminative_power_ranks_separating_factors() {
    // judicial separates the outcome groups; media does not.
    let order = vec!["judicial".to_string(), "media".to_string()];
    let cases = vec![
        test_case("a", Outcome::Consolidated, &[("judicial", 90.0), ("media", 50.0)]),
        test_case("b", Outcome::Resisted, &[("judicial", 50.0), ("media", 50.0)]),
        test_case("c", Outcome::Democratized, &[("judicial", 10.0), ("media", 50.0)]),
        // Ongoing cases must not shape this statistic.
        test_case("d", Outcome::Ongoing, &[("judicial", 90.0), ("media", 0.0)]),
    ];

    let powers = factor_discriminative_power(&cases, &order);
    assert_eq!(powers[0].0, "judicial");
    assert_eq!(powers[1].0, "media");
    assert!(powers[0].1 > 0.0);
    assert_eq!(powers[1].1, 0.0);

    // sqrt of population variance of the three group means 90/50/10.
    let expected = ((40.0_f64.powi(2) * 2.0) / 3.0).sqrt();
    assert!((powers[0].1 - expected).abs() < 1e-9);
}
