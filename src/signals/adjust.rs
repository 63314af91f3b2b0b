//! The adjustment decision table.
//!
//! Each payload owns a small set of independent conditions; each true
//! condition adds a signed delta to one factor and one reason to the audit
//! trail. Deltas targeting the same factor accumulate additively, then every
//! touched factor is clamped to [0, 100] once. Conditions never read each
//! other's output, so the result is independent of which payloads are
//! present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::Scores;
use crate::signals::payloads::SignalBundle;

/// Adjusted scores plus the audit trail that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalAdjustment {
    pub scores: Scores,
    /// Net delta per touched factor, before clamping.
    pub deltas: BTreeMap<String, f64>,
    /// One entry per fired condition, in decision-table order.
    pub reasons: Vec<String>,
}

fn add(deltas: &mut BTreeMap<String, f64>, reasons: &mut Vec<String>, factor: &str, delta: f64, reason: &str) {
    *deltas.entry(factor.to_string()).or_insert(0.0) += delta;
    reasons.push(reason.to_string());
}

/// Run the decision table over a base Scores vector.
///
/// Pure and total: an empty bundle returns the base vector untouched with an
/// empty audit trail.
pub fn apply_signal_adjustments(base: &Scores, bundle: &SignalBundle) -> SignalAdjustment {
    let mut deltas: BTreeMap<String, f64> = BTreeMap::new();
    let mut reasons: Vec<String> = Vec::new();

    if let Some(trends) = &bundle.trends {
        if trends.categories.get("exit").map_or(false, |c| c.spike) {
            add(
                &mut deltas,
                &mut reasons,
                "public_opinion",
                15.0,
                "Search trends: exit spike (emigration and relocation queries) -> public_opinion +15",
            );
        }
        if trends.categories.get("censorship").map_or(false, |c| c.spike) {
            add(
                &mut deltas,
                &mut reasons,
                "media",
                10.0,
                "Search trends: censorship-circumvention spike (VPN and blocked-site queries) -> media +10",
            );
        }
        if trends.categories.get("protest").map_or(false, |c| c.spike) {
            add(
                &mut deltas,
                &mut reasons,
                "mobilization_balance",
                -10.0,
                "Search trends: protest spike signals live opposition mobilization -> mobilization_balance -10",
            );
        }
    }

    if let Some(narrative) = &bundle.narrative {
        if narrative.narrative_score > 70.0 {
            add(
                &mut deltas,
                &mut reasons,
                "media",
                10.0,
                &format!(
                    "Headline narrative: regime-aligned framing at {:.0} ('{}') -> media +10",
                    narrative.narrative_score, narrative.dominant_frame
                ),
            );
        }
    }

    if let Some(coordination) = &bundle.coordination {
        if coordination.coordination > 75.0 {
            add(
                &mut deltas,
                &mut reasons,
                "political",
                10.0,
                &format!(
                    "Elite coordination at {:.0}: synchronized official messaging -> political +10",
                    coordination.coordination
                ),
            );
        }
        if coordination.propaganda > 75.0 {
            add(
                &mut deltas,
                &mut reasons,
                "media",
                15.0,
                &format!(
                    "Propaganda saturation at {:.0} -> media +15",
                    coordination.propaganda
                ),
            );
        }
    }

    if let Some(social) = &bundle.social {
        if social.temperature > 70.0 {
            add(
                &mut deltas,
                &mut reasons,
                "public_opinion",
                10.0,
                &format!(
                    "Social temperature at {:.0} -> public_opinion +10",
                    social.temperature
                ),
            );
        }
        if social.indicators.iter().any(|i| i == "coordinated_harassment") {
            add(
                &mut deltas,
                &mut reasons,
                "civil",
                10.0,
                "Social indicator: coordinated harassment of critics -> civil +10",
            );
        }
        if social.indicators.iter().any(|i| i == "elite_defection") {
            add(
                &mut deltas,
                &mut reasons,
                "corporate_compliance",
                -10.0,
                "Social indicator: visible elite defection -> corporate_compliance -10",
            );
        }
    }

    let mut scores = base.clone();
    for (factor, delta) in &deltas {
        let current = scores.get(factor).copied().unwrap_or(0.0);
        scores.insert(factor.clone(), (current + delta).clamp(0.0, 100.0));
    }

    if !reasons.is_empty() {
        debug!(
            "Signal adjustment - conditions_fired={}, factors_touched={}",
            reasons.len(),
            deltas.len()
        );
    }

    SignalAdjustment {
        scores,
        deltas,
        reasons,
    }
}
