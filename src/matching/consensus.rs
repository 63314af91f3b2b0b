//! Ranked case retrieval, cross-model consensus, and case-store statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{validate_scores, HistoricalCase, Outcome, Scores, TheoreticalModel};
use crate::error::{EngineError, Result};
use crate::matching::similarity::{cosine_similarity, weighted_vector};

/// Similarity floor below which a case is not considered a match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// One historical case's similarity to the current situation under one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSimilarity {
    pub case_id: String,
    pub country: String,
    pub period: String,
    pub similarity: f64,
    pub outcome: Outcome,
    pub outcome_score: f64,
}

/// Cases most consistent with one model's theoretical emphasis.
///
/// The current vector and every case vector are projected through the same
/// model weights, so the same raw scores rank differently under different
/// models. Matches above `threshold` are returned sorted descending.
pub fn find_similar_cases(
    scores: &Scores,
    model: &TheoreticalModel,
    cases: &[HistoricalCase],
    order: &[String],
    threshold: f64,
) -> Result<Vec<CaseSimilarity>> {
    if cases.is_empty() {
        return Err(EngineError::EmptyInput("historical case"));
    }
    validate_scores(scores)?;

    let current = weighted_vector(scores, &model.weights, order);

    let mut matches: Vec<CaseSimilarity> = Vec::new();
    for case in cases {
        let projected = weighted_vector(&case.factors, &model.weights, order);
        let similarity = cosine_similarity(&current, &projected)?;
        if similarity > threshold {
            matches.push(CaseSimilarity {
                case_id: case.id.clone(),
                country: case.country.clone(),
                period: case.period.clone(),
                similarity,
                outcome: case.outcome,
                outcome_score: case.outcome_score,
            });
        }
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "Case matching - model={}, candidates={}, matches={}, threshold={}",
        model.id,
        cases.len(),
        matches.len(),
        threshold
    );

    Ok(matches)
}

/// Qualitative spread of the models' top matches. Monotonic in spread:
/// spread < 0.05 is High, spread < 0.15 is Moderate, anything wider is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementLevel {
    High,
    Moderate,
    Low,
}

impl AgreementLevel {
    pub fn from_spread(spread: f64) -> Self {
        if spread < 0.05 {
            AgreementLevel::High
        } else if spread < 0.15 {
            AgreementLevel::Moderate
        } else {
            AgreementLevel::Low
        }
    }
}

/// A case cited by more than one model's filtered result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitedCase {
    pub case_id: String,
    pub cited_by: Vec<String>,
}

/// Cross-model aggregate of the per-model top matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConsensus {
    pub mean_top: f64,
    pub min_top: f64,
    pub max_top: f64,
    pub agreement: AgreementLevel,
    pub most_cited: Vec<CitedCase>,
}

/// Aggregate every model's filtered matches into a consensus view.
///
/// Models whose filtered list is empty contribute nothing; if no model found
/// a match, there is no consensus to compute.
pub fn consensus(per_model: &BTreeMap<String, Vec<CaseSimilarity>>) -> Result<MatchConsensus> {
    let tops: Vec<f64> = per_model
        .values()
        .filter_map(|matches| matches.first().map(|m| m.similarity))
        .collect();
    if tops.is_empty() {
        return Err(EngineError::EmptyInput("per-model match"));
    }

    let mean_top = tops.iter().sum::<f64>() / tops.len() as f64;
    let min_top = tops.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_top = tops.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut citations: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (model_id, matches) in per_model {
        for m in matches {
            citations
                .entry(m.case_id.clone())
                .or_default()
                .push(model_id.clone());
        }
    }
    let mut most_cited: Vec<CitedCase> = citations
        .into_iter()
        .filter(|(_, cited_by)| cited_by.len() > 1)
        .map(|(case_id, cited_by)| CitedCase { case_id, cited_by })
        .collect();
    most_cited.sort_by(|a, b| {
        b.cited_by
            .len()
            .cmp(&a.cited_by.len())
            .then_with(|| a.case_id.cmp(&b.case_id))
    });

    Ok(MatchConsensus {
        mean_top,
        min_top,
        max_top,
        agreement: AgreementLevel::from_spread(max_top - min_top),
        most_cited,
    })
}

/// Per-outcome per-factor means over the case store. A descriptive baseline,
/// not part of similarity search.
pub fn averages_by_outcome(cases: &[HistoricalCase]) -> BTreeMap<Outcome, BTreeMap<String, f64>> {
    let mut sums: BTreeMap<Outcome, BTreeMap<String, (f64, usize)>> = BTreeMap::new();
    for case in cases {
        let group = sums.entry(case.outcome).or_default();
        for (id, v) in &case.factors {
            let entry = group.entry(id.clone()).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(outcome, factors)| {
            (
                outcome,
                factors
                    .into_iter()
                    .map(|(id, (sum, n))| (id, sum / n as f64))
                    .collect(),
            )
        })
        .collect()
}

/// Rough ranking of how sharply each factor separates the resolved outcomes.
///
/// For each factor, take the consolidated/resisted/democratized group means
/// (ongoing cases are excluded here), compute the variance of those means
/// around their own mean, and report the square root. This is deliberately
/// the dispersion of group means, not a within-group ANOVA statistic;
/// downstream interpretation text assumes exactly this quantity.
pub fn factor_discriminative_power(
    cases: &[HistoricalCase],
    order: &[String],
) -> Vec<(String, f64)> {
    let averages = averages_by_outcome(cases);
    let groups = [Outcome::Consolidated, Outcome::Resisted, Outcome::Democratized];

    let mut powers: Vec<(String, f64)> = order
        .iter()
        .map(|id| {
            let means: Vec<f64> = groups
                .iter()
                .filter_map(|g| averages.get(g).and_then(|m| m.get(id)).copied())
                .collect();
            if means.len() < 2 {
                return (id.clone(), 0.0);
            }
            let grand = means.iter().sum::<f64>() / means.len() as f64;
            let variance =
                means.iter().map(|m| (m - grand).powi(2)).sum::<f64>() / means.len() as f64;
            (id.clone(), variance.sqrt())
        })
        .collect();

    powers.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    powers
}
