use std::collections::BTreeMap;

use regime_risk::catalog::{factor_catalog, Scores};
use regime_risk::signals::{
    apply_signal_adjustments, CategoryTrend, CoordinationPayload, NarrativePayload, SignalBundle,
    SocialPayload, TrendsPayload,
};

fn base_scores(value: f64) -> Scores {
    factor_catalog()
        .iter()
        .map(|f| (f.id.clone(), value))
        .collect()
}

fn trends_with_spike(category: &str) -> TrendsPayload {
    let mut categories = BTreeMap::new();
    categories.insert(
        category.to_string(),
        CategoryTrend {
            interest: 85.0,
            spike: true,
        },
    );
    TrendsPayload { categories }
}

#[test]
fn test_empty_bundle_is_identity() {
    let base = base_scores(40.0);
    let result = apply_signal_adjustments(&base, &SignalBundle::default());
    assert_eq!(result.scores, base);
    assert!(result.reasons.is_empty());
    assert!(result.deltas.is_empty());
}

#[test]
fn test_exit_spike_adds_fifteen_to_public_opinion() {
    let base = base_scores(40.0);
    let bundle = SignalBundle {
        trends: Some(trends_with_spike("exit")),
        ..Default::default()
    };

    let result = apply_signal_adjustments(&base, &bundle);
    assert_eq!(result.scores["public_opinion"], 55.0);
    assert_eq!(result.deltas["public_opinion"], 15.0);
    assert_eq!(result.reasons.len(), 1);
    assert!(result.reasons[0].contains("exit spike"));
    // Untouched factors pass through.
    assert_eq!(result.scores["judicial"], 40.0);
}

#[test]
fn test_exit_spike_clamps_at_hundred() {
    let mut base = base_scores(40.0);
    base.insert("public_opinion".to_string(), 95.0);
    let bundle = SignalBundle {
        trends: Some(trends_with_spike("exit")),
        ..Default::default()
    };

    let result = apply_signal_adjustments(&base, &bundle);
    assert_eq!(result.scores["public_opinion"], 100.0);
    // The recorded delta is the pre-clamp sum.
    assert_eq!(result.deltas["public_opinion"], 15.0);
}

#[test]
fn test_media_deltas_accumulate_before_clamping() {
    // censorship spike +10, propaganda +15, narrative +10 all target media.
    let mut base = base_scores(30.0);
    base.insert("media".to_string(), 80.0);
    let bundle = SignalBundle {
        trends: Some(trends_with_spike("censorship")),
        narrative: Some(NarrativePayload {
            narrative_score: 85.0,
            dominant_frame: "stability".to_string(),
        }),
        coordination: Some(CoordinationPayload {
            coordination: 10.0,
            propaganda: 90.0,
        }),
        social: None,
    };

    let result = apply_signal_adjustments(&base, &bundle);
    assert_eq!(result.deltas["media"], 35.0);
    assert_eq!(result.scores["media"], 100.0);
    assert_eq!(result.reasons.len(), 3);
}

#[test]
fn test_negative_deltas_clamp_at_zero() {
    let mut base = base_scores(50.0);
    base.insert("corporate_compliance".to_string(), 5.0);
    let bundle = SignalBundle {
        social: Some(SocialPayload {
            temperature: 10.0,
            indicators: vec!["elite_defection".to_string()],
        }),
        ..Default::default()
    };

    let result = apply_signal_adjustments(&base, &bundle);
    assert_eq!(result.scores["corporate_compliance"], 0.0);
}

#[test]
fn test_payloads_are_order_independent() {
    // The combined bundle's deltas equal the sum of each payload alone.
    let base = base_scores(50.0);
    let trends_only = SignalBundle {
        trends: Some(trends_with_spike("exit")),
        ..Default::default()
    };
    let social_only = SignalBundle {
        social: Some(SocialPayload {
            temperature: 80.0,
            indicators: vec!["coordinated_harassment".to_string()],
        }),
        ..Default::default()
    };
    let combined = SignalBundle {
        trends: trends_only.trends.clone(),
        social: social_only.social.clone(),
        ..Default::default()
    };

    let a = apply_signal_adjustments(&base, &trends_only);
    let b = apply_signal_adjustments(&base, &social_only);
    let both = apply_signal_adjustments(&base, &combined);

    let mut merged: BTreeMap<String, f64> = a.deltas.clone();
    for (k, v) in &b.deltas {
        *merged.entry(k.clone()).or_insert(0.0) += v;
    }
    assert_eq!(both.deltas, merged);
    assert_eq!(both.reasons.len(), a.reasons.len() + b.reasons.len());
}

#[test]
fn test_output_always_in_range() {
    // Stack every condition on extreme bases; every factor stays in [0, 100].
    let mut all_trends = BTreeMap::new();
    for category in ["exit", "censorship", "protest"] {
        all_trends.insert(
            category.to_string(),
            CategoryTrend {
                interest: 100.0,
                spike: true,
            },
        );
    }
    let bundle = SignalBundle {
        trends: Some(TrendsPayload {
            categories: all_trends,
        }),
        narrative: Some(NarrativePayload {
            narrative_score: 100.0,
            dominant_frame: "unity".to_string(),
        }),
        coordination: Some(CoordinationPayload {
            coordination: 100.0,
            propaganda: 100.0,
        }),
        social: Some(SocialPayload {
            temperature: 100.0,
            indicators: vec![
                "coordinated_harassment".to_string(),
                "elite_defection".to_string(),
            ],
        }),
    };

    for base_value in [0.0, 3.0, 50.0, 97.0, 100.0] {
        let result = apply_signal_adjustments(&base_scores(base_value), &bundle);
        for (factor, score) in &result.scores {
            assert!(
                (0.0..=100.0).contains(score),
                "factor {} left range: {}",
                factor,
                score
            );
        }
    }
}
