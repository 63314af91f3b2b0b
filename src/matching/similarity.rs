//! Weighted vector projection and cosine similarity.

use std::collections::BTreeMap;

use crate::catalog::Scores;
use crate::error::{EngineError, Result};

/// Project scores through model weights along a fixed factor ordering.
/// A factor missing a weight (or a score) contributes 0 at its position.
pub fn weighted_vector(scores: &Scores, weights: &BTreeMap<String, f64>, order: &[String]) -> Vec<f64> {
    order
        .iter()
        .map(|id| {
            scores.get(id).copied().unwrap_or(0.0) * weights.get(id).copied().unwrap_or(0.0)
        })
        .collect()
}

/// `(a . b) / (|a| * |b|)`.
///
/// A zero-magnitude vector makes the quotient undefined; that is a
/// `DegenerateVector` error, never a silent 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(EngineError::DegenerateVector);
    }
    Ok(dot / (norm_a * norm_b))
}
