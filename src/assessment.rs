//! One-shot assessment pipeline.
//!
//! Wires the engines in their data-flow order: signal adjustment, ensemble
//! scoring, case matching with consensus, and fresh prediction generation.
//! Everything here is synchronous and pure with respect to shared state; the
//! catalogs are passed in by reference and never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::catalog::{
    factor_order, factors_in_danger, Factor, HistoricalCase, Scores, TheoreticalModel, CASES,
    FACTORS, MODELS,
};
use crate::ensemble::{
    classify_risk, cluster_averages, score_ensemble, ClusterAverage, ModelScore, RiskLevel,
};
use crate::error::Result;
use crate::lakatos::{generate_predictions, has_prediction_table, Prediction, PredictionContext};
use crate::matching::{
    consensus, find_similar_cases, CaseSimilarity, MatchConsensus, DEFAULT_SIMILARITY_THRESHOLD,
};
use crate::signals::{apply_signal_adjustments, SignalBundle};

/// Which polity is being assessed, and as of when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub country: String,
    pub as_of: NaiveDate,
}

/// Read-only result of one full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub country: String,
    pub as_of: NaiveDate,
    pub adjusted_scores: Scores,
    pub adjustment_reasons: Vec<String>,
    /// Weighted sum of the adjusted scores under the factor default weights.
    pub composite_score: f64,
    pub composite_risk: RiskLevel,
    pub model_scores: Vec<ModelScore>,
    pub cluster_averages: Vec<ClusterAverage>,
    pub matches_by_model: BTreeMap<String, Vec<CaseSimilarity>>,
    /// Absent when no model found a case above the similarity threshold.
    pub consensus: Option<MatchConsensus>,
    pub predictions: Vec<Prediction>,
    /// Factors at or above their catalog danger threshold.
    pub danger_factors: Vec<String>,
}

/// Run the full pipeline against the built-in catalogs.
pub fn run_assessment(
    raw_scores: &Scores,
    signals: &SignalBundle,
    ctx: &AssessmentContext,
) -> Result<RiskAssessment> {
    assess_with(raw_scores, signals, ctx, &FACTORS, &MODELS, &CASES)
}

/// Run the full pipeline against explicit catalogs (e.g. YAML overlays).
pub fn assess_with(
    raw_scores: &Scores,
    signals: &SignalBundle,
    ctx: &AssessmentContext,
    factors: &[Factor],
    models: &[TheoreticalModel],
    cases: &[HistoricalCase],
) -> Result<RiskAssessment> {
    info!(
        "Assessment started - country={}, as_of={}, factors_scored={}",
        ctx.country,
        ctx.as_of,
        raw_scores.len()
    );

    let adjustment = apply_signal_adjustments(raw_scores, signals);
    let scores = adjustment.scores;

    let model_scores = score_ensemble(models, &scores, factors)?;
    let clusters = cluster_averages(&model_scores);

    let order = factor_order(factors);
    let mut matches_by_model: BTreeMap<String, Vec<CaseSimilarity>> = BTreeMap::new();
    for model in models {
        let matches =
            find_similar_cases(&scores, model, cases, &order, DEFAULT_SIMILARITY_THRESHOLD)?;
        matches_by_model.insert(model.id.clone(), matches);
    }
    let match_consensus = if matches_by_model.values().any(|m| !m.is_empty()) {
        Some(consensus(&matches_by_model)?)
    } else {
        None
    };

    let prediction_ctx = PredictionContext {
        country: ctx.country.clone(),
        as_of: ctx.as_of,
    };
    let mut predictions = Vec::new();
    for model in models.iter().filter(|m| has_prediction_table(&m.id)) {
        predictions.extend(generate_predictions(&model.id, &scores, &prediction_ctx)?);
    }

    let composite_score: f64 = factors
        .iter()
        .filter_map(|f| scores.get(&f.id).map(|s| s * f.default_weight))
        .sum();

    info!(
        "Assessment complete - country={}, composite={:.1}, models={}, predictions={}",
        ctx.country,
        composite_score,
        model_scores.len(),
        predictions.len()
    );

    Ok(RiskAssessment {
        country: ctx.country.clone(),
        as_of: ctx.as_of,
        danger_factors: factors_in_danger(&scores, factors),
        adjusted_scores: scores,
        adjustment_reasons: adjustment.reasons,
        composite_risk: classify_risk(composite_score),
        composite_score,
        model_scores,
        cluster_averages: clusters,
        matches_by_model,
        consensus: match_consensus,
        predictions,
    })
}
