//! Programme track-record scoring.
//!
//! A programme is progressive when its novel predictions keep being
//! confirmed, degenerating when refutations dominate, stagnant in between or
//! when it has no resolved record at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::lakatos::programme::{Novelty, PredictionStatus, ResearchProgramme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgrammeStatus {
    Progressive,
    Stagnant,
    Degenerating,
}

/// Score one programme's resolved record.
///
/// Confirmed novel predictions weigh 3, confirmed known facts (including
/// retrodictions) weigh 1, refutations weigh -2; the weighted sum is
/// normalized against the theoretical extremes onto [0, 100]. A programme
/// with no resolved predictions sits at the neutral (50, Stagnant).
///
/// The classification branches are checked in a fixed order (progressive,
/// then degenerating, then stagnant); they are not mutually exclusive by
/// construction, so the order is part of the contract.
pub fn calculate_progressiveness(programme: &ResearchProgramme) -> (u32, ProgrammeStatus) {
    let mut confirmed_novel: i64 = 0;
    let mut confirmed_known: i64 = 0;
    let mut refuted: i64 = 0;

    for p in &programme.predictions {
        match (p.status, p.novelty) {
            (PredictionStatus::Confirmed, Novelty::Novel) => confirmed_novel += 1,
            (PredictionStatus::Confirmed, _) => confirmed_known += 1,
            (PredictionStatus::Refuted, _) => refuted += 1,
            _ => {}
        }
    }

    let total = confirmed_novel + confirmed_known + refuted;
    if total == 0 {
        return (50, ProgrammeStatus::Stagnant);
    }

    let weighted_sum = 3 * confirmed_novel + confirmed_known - 2 * refuted;
    let max_possible = 3 * total;
    let min_possible = -2 * total;
    let score = (100.0 * (weighted_sum - min_possible) as f64
        / (max_possible - min_possible) as f64)
        .round() as u32;

    let status = if score >= 60 && confirmed_novel > refuted {
        ProgrammeStatus::Progressive
    } else if score <= 40 || refuted > confirmed_novel {
        ProgrammeStatus::Degenerating
    } else {
        ProgrammeStatus::Stagnant
    };

    (score, status)
}

/// One programme's place in the cross-programme ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgrammeStanding {
    pub model_id: String,
    pub score: u32,
    pub status: ProgrammeStatus,
}

/// Ranking plus free-text insights over a set of programmes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgrammeEvaluation {
    /// Sorted descending by score.
    pub ranking: Vec<ProgrammeStanding>,
    pub insights: Vec<String>,
}

/// Rank programmes by progressiveness and emit comparison insights.
pub fn evaluate_programmes(programmes: &[ResearchProgramme]) -> Result<ProgrammeEvaluation> {
    if programmes.is_empty() {
        return Err(EngineError::EmptyInput("research programme"));
    }

    let mut ranking: Vec<ProgrammeStanding> = programmes
        .iter()
        .map(|p| {
            let (score, status) = calculate_progressiveness(p);
            ProgrammeStanding {
                model_id: p.model_id.clone(),
                score,
                status,
            }
        })
        .collect();
    ranking.sort_by(|a, b| b.score.cmp(&a.score));

    let mut insights = Vec::new();
    let progressive: Vec<&str> = ranking
        .iter()
        .filter(|s| s.status == ProgrammeStatus::Progressive)
        .map(|s| s.model_id.as_str())
        .collect();
    let degenerating: Vec<&str> = ranking
        .iter()
        .filter(|s| s.status == ProgrammeStatus::Degenerating)
        .map(|s| s.model_id.as_str())
        .collect();

    if !progressive.is_empty() {
        insights.push(format!(
            "Progressive programmes (novel predictions being confirmed): {}",
            progressive.join(", ")
        ));
    }
    if !degenerating.is_empty() {
        insights.push(format!(
            "Degenerating programmes (living off refuted or retrofitted claims): {}",
            degenerating.join(", ")
        ));
    }
    if let (Some(top), Some(bottom)) = (ranking.first(), ranking.last()) {
        let gap = top.score.saturating_sub(bottom.score);
        if gap > 30 {
            insights.push(format!(
                "Track records are diverging sharply: {} leads {} by {} points",
                top.model_id, bottom.model_id, gap
            ));
        }
    }

    debug!(
        "Programme evaluation - programmes={}, progressive={}, degenerating={}",
        ranking.len(),
        progressive.len(),
        degenerating.len()
    );

    Ok(ProgrammeEvaluation { ranking, insights })
}
