//! Ensemble Scoring Engine
//!
//! Runs one Scores vector through every theoretical model: per-model weighted
//! sums with driver/resilience breakdowns, cross-model outlier statistics,
//! cluster averages, and deterministic templated explanations.

pub mod explain;
pub mod scoring;

pub use explain::model_explanation;
pub use scoring::{
    classify_risk, cluster_averages, score_ensemble, score_model, ClusterAverage,
    FactorContribution, ModelScore, OutlierDirection, RiskLevel,
};
