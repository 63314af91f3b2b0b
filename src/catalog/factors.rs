//! The ten scored dimensions of democratic health.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Factor id -> score in [0, 100]. Higher is more authoritarian-favorable.
/// A missing factor means "not scored", not 0.
pub type Scores = BTreeMap<String, f64>;

/// One scored dimension of democratic health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factor {
    pub id: String,
    pub name: String,
    /// Weight used for the headline composite score.
    pub default_weight: f64,
    /// Score at or above which the factor is flagged for attention.
    pub danger_threshold: f64,
    pub description: String,
}

lazy_static::lazy_static! {
    /// Process-lifetime factor catalog, shared by reference.
    pub static ref FACTORS: Vec<Factor> = factor_catalog();
}

fn factor(id: &str, name: &str, default_weight: f64, danger_threshold: f64, description: &str) -> Factor {
    Factor {
        id: id.to_string(),
        name: name.to_string(),
        default_weight,
        danger_threshold,
        description: description.to_string(),
    }
}

/// The ten factors. Default weights sum to 1.0.
pub fn factor_catalog() -> Vec<Factor> {
    vec![
        factor(
            "judicial",
            "Judicial Capture",
            0.15,
            60.0,
            "Courts and prosecutorial bodies brought under executive control or sidelined.",
        ),
        factor(
            "media",
            "Media Capture",
            0.12,
            60.0,
            "Consolidation of major outlets into government-aligned hands; shrinking independent reach.",
        ),
        factor(
            "political",
            "Opposition Suppression",
            0.12,
            55.0,
            "Legal harassment, fragmentation, or co-optation of opposition parties and leaders.",
        ),
        factor(
            "federalism",
            "Subnational Erosion",
            0.08,
            65.0,
            "Loss of independent state, provincial, or municipal power centers.",
        ),
        factor(
            "civil",
            "Civil Society Repression",
            0.10,
            60.0,
            "Pressure on NGOs, universities, unions, and professional associations.",
        ),
        factor(
            "public_opinion",
            "Mass Acquiescence",
            0.10,
            65.0,
            "Public tolerance of rule-breaking incumbents; resignation or approval of emergency powers.",
        ),
        factor(
            "mobilization_balance",
            "Mobilizational Imbalance",
            0.08,
            70.0,
            "Street and organizational strength of regime supporters relative to the opposition.",
        ),
        factor(
            "state_capacity",
            "Coercive State Capacity",
            0.08,
            70.0,
            "Loyalty and reach of security services, surveillance, and enforcement machinery.",
        ),
        factor(
            "corporate_compliance",
            "Corporate Compliance",
            0.07,
            65.0,
            "Business elites aligning with the regime: donations, self-censorship, preemptive obedience.",
        ),
        factor(
            "election_interference",
            "Election Interference",
            0.10,
            50.0,
            "Tilting of the electoral playing field: registration, districting, administration, certification.",
        ),
    ]
}

/// Stable ordering of factor ids used by every vector projection.
pub fn factor_order(factors: &[Factor]) -> Vec<String> {
    factors.iter().map(|f| f.id.clone()).collect()
}

/// Reject scores outside [0, 100]. Absent factors are valid input.
pub fn validate_scores(scores: &Scores) -> Result<()> {
    for (id, value) in scores {
        if !(0.0..=100.0).contains(value) {
            return Err(EngineError::InvalidScore {
                factor: id.clone(),
                value: *value,
            });
        }
    }
    Ok(())
}

/// Factor ids whose score meets or exceeds the catalog danger threshold.
pub fn factors_in_danger(scores: &Scores, factors: &[Factor]) -> Vec<String> {
    factors
        .iter()
        .filter(|f| scores.get(&f.id).map_or(false, |s| *s >= f.danger_threshold))
        .map(|f| f.id.clone())
        .collect()
}
