use regime_risk::catalog::{factor_catalog, model_catalog, Scores, TheoreticalModel};
use regime_risk::ensemble::{
    classify_risk, cluster_averages, score_ensemble, score_model, OutlierDirection, RiskLevel,
};
use regime_risk::error::EngineError;

fn scores_from(pairs: &[(&str, f64)]) -> Scores {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn full_scores(judicial: f64, media: f64, political: f64) -> Scores {
    scores_from(&[
        ("judicial", judicial),
        ("media", media),
        ("political", political),
        ("federalism", 10.0),
        ("civil", 10.0),
        ("public_opinion", 10.0),
        ("mobilization_balance", 10.0),
        ("state_capacity", 10.0),
        ("corporate_compliance", 10.0),
        ("election_interference", 10.0),
    ])
}

#[test]
fn test_risk_bands_are_fixed() {
    assert_eq!(classify_risk(0.0), RiskLevel::StableDemocracy);
    assert_eq!(classify_risk(24.9), RiskLevel::StableDemocracy);
    assert_eq!(classify_risk(25.0), RiskLevel::DemocraticStress);
    assert_eq!(classify_risk(39.9), RiskLevel::DemocraticStress);
    assert_eq!(classify_risk(40.0), RiskLevel::CompetitiveAuthoritarianRisk);
    assert_eq!(classify_risk(49.9), RiskLevel::CompetitiveAuthoritarianRisk);
    assert_eq!(classify_risk(50.0), RiskLevel::DangerZone);
    assert_eq!(classify_risk(64.9), RiskLevel::DangerZone);
    assert_eq!(classify_risk(65.0), RiskLevel::ConsolidatingAuthoritarianism);
    assert_eq!(classify_risk(79.9), RiskLevel::ConsolidatingAuthoritarianism);
    assert_eq!(classify_risk(80.0), RiskLevel::AuthoritarianRegime);
    assert_eq!(classify_risk(100.0), RiskLevel::AuthoritarianRegime);
}

#[test]
fn test_guardrail_model_reference_scenario() {
    // judicial 45 * 0.30 + media 50 * 0.25 + political 40 * 0.20
    // + election_interference 10 * 0.15 = 35.5
    let factors = factor_catalog();
    let models = model_catalog();
    let model = models.iter().find(|m| m.id == "levitsky_ziblatt").unwrap();
    let scores = full_scores(45.0, 50.0, 40.0);

    let result = score_model(model, &scores, &factors);
    assert!((result.score - 35.5).abs() < 1e-9, "got {}", result.score);
    assert_eq!(result.risk_level, RiskLevel::DemocraticStress);
}

#[test]
fn test_contributions_sorted_and_drivers_positive() {
    let factors = factor_catalog();
    let models = model_catalog();
    let model = models.iter().find(|m| m.id == "levitsky_ziblatt").unwrap();
    let scores = full_scores(45.0, 50.0, 40.0);

    let result = score_model(model, &scores, &factors);
    for pair in result.factor_contributions.windows(2) {
        assert!(pair[0].contribution >= pair[1].contribution);
    }
    assert!(result.top_drivers.len() <= 3);
    assert!(result.top_drivers.iter().all(|c| c.contribution > 0.0));
    assert_eq!(result.top_drivers[0].factor_id, "judicial");
}

#[test]
fn test_resilience_is_weighted_and_low() {
    // election_interference carries weight 0.15 in the guardrail model and
    // scores 10 here, so it is currently holding the line.
    let factors = factor_catalog();
    let models = model_catalog();
    let model = models.iter().find(|m| m.id == "levitsky_ziblatt").unwrap();
    let scores = full_scores(45.0, 50.0, 40.0);

    let result = score_model(model, &scores, &factors);
    let ids: Vec<&str> = result
        .resilience_factors
        .iter()
        .map(|c| c.factor_id.as_str())
        .collect();
    assert_eq!(ids, vec!["election_interference"]);
}

#[test]
fn test_empty_model_list_fails() {
    let factors = factor_catalog();
    let scores = full_scores(50.0, 50.0, 50.0);
    let err = score_ensemble(&[], &scores, &factors).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput(_)));
}

#[test]
fn test_out_of_range_score_fails() {
    let factors = factor_catalog();
    let models = model_catalog();
    let scores = scores_from(&[("judicial", 101.0)]);
    let err = score_ensemble(&models, &scores, &factors).unwrap_err();
    assert!(matches!(err, EngineError::InvalidScore { .. }));
}

#[test]
fn test_empty_weight_model_scores_zero_and_participates() {
    let factors = factor_catalog();
    let mut models = model_catalog();
    models.push(TheoreticalModel {
        id: "null_model".to_string(),
        name: "Null".to_string(),
        author: "Nobody".to_string(),
        cluster: "structural".to_string(),
        weights: Default::default(),
    });
    let scores = full_scores(80.0, 80.0, 80.0);

    let results = score_ensemble(&models, &scores, &factors).unwrap();
    assert_eq!(results.len(), 9);
    let null = results.iter().find(|r| r.model_id == "null_model").unwrap();
    assert_eq!(null.score, 0.0);
    // A zero among real scores pulls the mean; the null model deviates from it.
    assert!(null.deviation_from_mean < 0.0);
}

fn single_factor_model(id: &str, weight: f64) -> TheoreticalModel {
    TheoreticalModel {
        id: id.to_string(),
        name: id.to_string(),
        author: "test".to_string(),
        cluster: "test".to_string(),
        weights: [("judicial".to_string(), weight)].into_iter().collect(),
    }
}

#[test]
fn test_outlier_flagging_matches_population_stddev() {
    // Eight scores averaging 44.6 with one model at 85.
    let factors = factor_catalog();
    let weights = [0.85, 0.50, 0.45, 0.44, 0.42, 0.40, 0.30, 0.208];
    let models: Vec<TheoreticalModel> = weights
        .iter()
        .enumerate()
        .map(|(i, w)| single_factor_model(&format!("m{}", i), *w))
        .collect();
    let scores = scores_from(&[("judicial", 100.0)]);

    let results = score_ensemble(&models, &scores, &factors).unwrap();

    let mean: f64 = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;
    assert!((mean - 44.6).abs() < 1e-9);

    let high = results.iter().find(|r| r.model_id == "m0").unwrap();
    assert!(high.is_outlier, "85 must be flagged against mean 44.6");
    assert_eq!(high.outlier_direction, OutlierDirection::High);

    // The outlier set is exactly the scores more than one stddev out.
    let variance: f64 = results
        .iter()
        .map(|r| (r.score - mean).powi(2))
        .sum::<f64>()
        / results.len() as f64;
    let std_dev = variance.sqrt();
    for r in &results {
        assert_eq!(r.is_outlier, (r.score - mean).abs() > std_dev, "model {}", r.model_id);
        match r.outlier_direction {
            OutlierDirection::High => assert!(r.score > mean + std_dev),
            OutlierDirection::Low => assert!(r.score < mean - std_dev),
            OutlierDirection::None => assert!((r.score - mean).abs() <= std_dev),
        }
    }
}

#[test]
fn test_ensemble_sorted_descending() {
    let factors = factor_catalog();
    let models = model_catalog();
    let scores = full_scores(70.0, 65.0, 55.0);
    let results = score_ensemble(&models, &scores, &factors).unwrap();
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_cluster_averages_grouped_and_sorted() {
    let factors = factor_catalog();
    let models = model_catalog();
    let scores = full_scores(70.0, 65.0, 55.0);
    let results = score_ensemble(&models, &scores, &factors).unwrap();

    let averages = cluster_averages(&results);
    let clusters: Vec<&str> = averages.iter().map(|a| a.cluster.as_str()).collect();
    assert!(clusters.contains(&"institutional"));
    assert!(clusters.contains(&"mobilizational"));
    assert_eq!(averages.iter().map(|a| a.models).sum::<usize>(), 8);
    for pair in averages.windows(2) {
        assert!(pair[0].average >= pair[1].average);
    }
}
