//! Theoretical models: named weighting schemes over the ten factors.
//!
//! Each model encodes one comparative-politics framework's view of which
//! factors carry consolidation risk. Weights are non-negative and need not
//! sum to 1; the ensemble computes a plain weighted sum, not a normalized
//! average.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::factors::Factor;

/// One comparative-politics framework as a weight vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoreticalModel {
    pub id: String,
    pub name: String,
    pub author: String,
    /// Grouping tag for cluster averages.
    pub cluster: String,
    pub weights: BTreeMap<String, f64>,
}

lazy_static::lazy_static! {
    /// Process-lifetime model catalog, shared by reference.
    pub static ref MODELS: Vec<TheoreticalModel> = model_catalog();
}

fn model(id: &str, name: &str, author: &str, cluster: &str, weights: &[(&str, f64)]) -> TheoreticalModel {
    TheoreticalModel {
        id: id.to_string(),
        name: name.to_string(),
        author: author.to_string(),
        cluster: cluster.to_string(),
        weights: weights
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    }
}

/// The eight built-in models.
pub fn model_catalog() -> Vec<TheoreticalModel> {
    vec![
        model(
            "levitsky_ziblatt",
            "Guardrail Erosion",
            "Levitsky & Ziblatt",
            "institutional",
            &[
                ("judicial", 0.30),
                ("media", 0.25),
                ("political", 0.20),
                ("election_interference", 0.15),
            ],
        ),
        model(
            "levitsky_way",
            "Competitive Authoritarianism",
            "Levitsky & Way",
            "institutional",
            &[
                ("election_interference", 0.25),
                ("judicial", 0.20),
                ("media", 0.20),
                ("political", 0.15),
                ("civil", 0.10),
                ("federalism", 0.10),
            ],
        ),
        model(
            "linz",
            "Executive Breakdown",
            "Juan Linz",
            "institutional",
            &[
                ("political", 0.30),
                ("judicial", 0.25),
                ("federalism", 0.20),
                ("state_capacity", 0.15),
                ("election_interference", 0.10),
            ],
        ),
        model(
            "bermeo",
            "Executive Aggrandizement",
            "Nancy Bermeo",
            "institutional",
            &[
                ("judicial", 0.35),
                ("federalism", 0.20),
                ("election_interference", 0.20),
                ("media", 0.15),
                ("civil", 0.10),
            ],
        ),
        model(
            "svolik",
            "Polarization Trap",
            "Milan Svolik",
            "behavioral",
            &[
                ("public_opinion", 0.35),
                ("political", 0.25),
                ("election_interference", 0.20),
                ("media", 0.10),
                ("judicial", 0.10),
            ],
        ),
        model(
            "paxton",
            "Mobilizational Capture",
            "Robert Paxton",
            "mobilizational",
            &[
                ("mobilization_balance", 0.35),
                ("civil", 0.20),
                ("public_opinion", 0.20),
                ("corporate_compliance", 0.15),
                ("state_capacity", 0.10),
            ],
        ),
        model(
            "arendt",
            "Movement Totalism",
            "Hannah Arendt",
            "mobilizational",
            &[
                ("mobilization_balance", 0.30),
                ("media", 0.25),
                ("public_opinion", 0.25),
                ("civil", 0.20),
            ],
        ),
        model(
            "przeworski",
            "Elite Compliance",
            "Adam Przeworski",
            "structural",
            &[
                ("corporate_compliance", 0.30),
                ("state_capacity", 0.25),
                ("public_opinion", 0.20),
                ("election_interference", 0.15),
                ("political", 0.10),
            ],
        ),
    ]
}

/// Parse a model overlay from YAML, validating factor ids and weight signs
/// against the factor catalog.
pub fn models_from_yaml(yaml: &str, factors: &[Factor]) -> anyhow::Result<Vec<TheoreticalModel>> {
    let models: Vec<TheoreticalModel> =
        serde_yaml::from_str(yaml).context("failed to parse model overlay YAML")?;
    if models.is_empty() {
        bail!("model overlay contains no models");
    }
    for m in &models {
        for (id, w) in &m.weights {
            if !factors.iter().any(|f| &f.id == id) {
                bail!("model '{}' references unknown factor '{}'", m.id, id);
            }
            if *w < 0.0 {
                bail!("model '{}' has negative weight for factor '{}'", m.id, id);
            }
        }
    }
    Ok(models)
}

/// Load a model overlay file.
pub fn load_models(path: impl AsRef<Path>, factors: &[Factor]) -> anyhow::Result<Vec<TheoreticalModel>> {
    let raw = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read {:?}", path.as_ref()))?;
    models_from_yaml(&raw, factors)
}
