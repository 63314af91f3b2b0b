//! Connector payload shapes.
//!
//! These mirror what the external fetchers emit; the engine only reads them.
//! Every payload slot is optional.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate search interest for one query category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTrend {
    /// Mean relative interest over the window, 0-100.
    pub interest: f64,
    /// Whether the window shows a spike against baseline.
    pub spike: bool,
}

/// Search-trend aggregates keyed by category label ("exit", "censorship", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsPayload {
    pub categories: BTreeMap<String, CategoryTrend>,
}

/// Editorial-narrative signal derived from headline analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativePayload {
    /// Strength of regime-aligned framing across outlets, 0-100.
    pub narrative_score: f64,
    pub dominant_frame: String,
}

/// Elite-coordination and propaganda scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinationPayload {
    /// Degree of synchronized messaging among officials, 0-100.
    pub coordination: f64,
    /// Saturation of state-aligned talking points, 0-100.
    pub propaganda: f64,
}

/// Social-post temperature and indicator flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPayload {
    /// Overall heat of political discussion, 0-100.
    pub temperature: f64,
    /// Named indicator flags, e.g. "coordinated_harassment".
    pub indicators: Vec<String>,
}

/// Everything the connectors produced for one assessment. Any slot may be
/// absent; an absent payload simply fires no adjustment conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalBundle {
    #[serde(default)]
    pub trends: Option<TrendsPayload>,
    #[serde(default)]
    pub narrative: Option<NarrativePayload>,
    #[serde(default)]
    pub coordination: Option<CoordinationPayload>,
    #[serde(default)]
    pub social: Option<SocialPayload>,
}
