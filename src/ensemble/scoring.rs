//! Per-model weighted scoring and cross-model outlier statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{validate_scores, Factor, Scores, TheoreticalModel};
use crate::ensemble::explain::model_explanation;
use crate::error::{EngineError, Result};

/// Six fixed, non-overlapping risk bands over [0, 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    StableDemocracy,
    DemocraticStress,
    CompetitiveAuthoritarianRisk,
    DangerZone,
    ConsolidatingAuthoritarianism,
    AuthoritarianRegime,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::StableDemocracy => "Stable Democracy",
            RiskLevel::DemocraticStress => "Democratic Stress",
            RiskLevel::CompetitiveAuthoritarianRisk => "Competitive Authoritarian Risk",
            RiskLevel::DangerZone => "Danger Zone",
            RiskLevel::ConsolidatingAuthoritarianism => "Consolidating Authoritarianism",
            RiskLevel::AuthoritarianRegime => "Authoritarian Regime",
        }
    }
}

/// Band a composite or model score. Total on the domain.
pub fn classify_risk(score: f64) -> RiskLevel {
    if score < 25.0 {
        RiskLevel::StableDemocracy
    } else if score < 40.0 {
        RiskLevel::DemocraticStress
    } else if score < 50.0 {
        RiskLevel::CompetitiveAuthoritarianRisk
    } else if score < 65.0 {
        RiskLevel::DangerZone
    } else if score < 80.0 {
        RiskLevel::ConsolidatingAuthoritarianism
    } else {
        RiskLevel::AuthoritarianRegime
    }
}

/// Where a model score sits relative to the one-stddev band around the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlierDirection {
    High,
    Low,
    None,
}

/// One factor's share of a model score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor_id: String,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
    /// This factor's weight as a percentage of the model's total weight.
    pub weight_percent: f64,
}

/// A model's verdict on one Scores vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    pub model_id: String,
    pub model_name: String,
    pub cluster: String,
    pub score: f64,
    pub risk_level: RiskLevel,
    /// All contributions, sorted descending.
    pub factor_contributions: Vec<FactorContribution>,
    /// Up to 3 contributions that are actually pushing the score up.
    pub top_drivers: Vec<FactorContribution>,
    /// Heavily-weighted factors currently scoring low: what is still holding.
    pub resilience_factors: Vec<FactorContribution>,
    pub explanation: String,
    /// Outlier fields are only meaningful after a full ensemble run.
    pub is_outlier: bool,
    pub deviation_from_mean: f64,
    pub outlier_direction: OutlierDirection,
}

/// Score one model against one Scores vector.
///
/// Factors absent from `scores` contribute nothing and are not listed;
/// factors the model leaves unweighted contribute 0.
pub fn score_model(model: &TheoreticalModel, scores: &Scores, factors: &[Factor]) -> ModelScore {
    let total_weight: f64 = model.weights.values().sum();

    let mut contributions: Vec<FactorContribution> = factors
        .iter()
        .filter_map(|f| {
            let score = *scores.get(&f.id)?;
            let weight = model.weights.get(&f.id).copied().unwrap_or(0.0);
            Some(FactorContribution {
                factor_id: f.id.clone(),
                weight,
                score,
                contribution: weight * score,
                weight_percent: if total_weight > 0.0 {
                    weight / total_weight * 100.0
                } else {
                    0.0
                },
            })
        })
        .collect();

    let score: f64 = contributions.iter().map(|c| c.contribution).sum();
    contributions.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top_drivers: Vec<FactorContribution> = contributions
        .iter()
        .filter(|c| c.contribution > 0.0)
        .take(3)
        .cloned()
        .collect();

    // Not tied to the contribution sort: a resilience factor is one the model
    // cares about (weight >= 0.15) that is currently scoring low (< 30).
    let resilience_factors: Vec<FactorContribution> = contributions
        .iter()
        .filter(|c| c.weight >= 0.15 && c.score < 30.0)
        .cloned()
        .collect();

    ModelScore {
        model_id: model.id.clone(),
        model_name: model.name.clone(),
        cluster: model.cluster.clone(),
        score,
        risk_level: classify_risk(score),
        factor_contributions: contributions,
        top_drivers,
        resilience_factors,
        explanation: model_explanation(&model.id, score, scores),
        is_outlier: false,
        deviation_from_mean: 0.0,
        outlier_direction: OutlierDirection::None,
    }
}

/// Score every model and mark outliers against the run's population statistics.
///
/// The mean and standard deviation are descriptive statistics over the fixed
/// set of active models (divide by n, not n-1). A model with an empty weight
/// map scores 0 and still shapes the statistics. Returns the list sorted
/// descending by score.
pub fn score_ensemble(
    models: &[TheoreticalModel],
    scores: &Scores,
    factors: &[Factor],
) -> Result<Vec<ModelScore>> {
    if models.is_empty() {
        return Err(EngineError::EmptyInput("model"));
    }
    validate_scores(scores)?;

    let mut results: Vec<ModelScore> = models
        .iter()
        .map(|m| score_model(m, scores, factors))
        .collect();

    let n = results.len() as f64;
    let mean = results.iter().map(|r| r.score).sum::<f64>() / n;
    let variance = results
        .iter()
        .map(|r| (r.score - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    for r in &mut results {
        r.deviation_from_mean = r.score - mean;
        r.is_outlier = r.deviation_from_mean.abs() > std_dev;
        r.outlier_direction = if r.score > mean + std_dev {
            OutlierDirection::High
        } else if r.score < mean - std_dev {
            OutlierDirection::Low
        } else {
            OutlierDirection::None
        };
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "Ensemble scored - models={}, mean={:.1}, std_dev={:.1}, outliers={}",
        results.len(),
        mean,
        std_dev,
        results.iter().filter(|r| r.is_outlier).count()
    );

    Ok(results)
}

/// Mean model score per cluster tag, sorted descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterAverage {
    pub cluster: String,
    pub average: f64,
    pub models: usize,
}

pub fn cluster_averages(model_scores: &[ModelScore]) -> Vec<ClusterAverage> {
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for ms in model_scores {
        grouped.entry(ms.cluster.clone()).or_default().push(ms.score);
    }

    let mut averages: Vec<ClusterAverage> = grouped
        .into_iter()
        .map(|(cluster, scores)| ClusterAverage {
            average: scores.iter().sum::<f64>() / scores.len() as f64,
            models: scores.len(),
            cluster,
        })
        .collect();

    averages.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    averages
}
