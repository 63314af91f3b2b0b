//! Research programmes and prediction records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};

/// Lifecycle of a prediction. Starts `Pending`; leaves it exactly once, via
/// an explicit external review. The core performs no automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionStatus {
    Pending,
    Confirmed,
    Refuted,
    Ambiguous,
}

/// How novel a prediction was when generated. Lakatos credits novel facts;
/// retrodictions only restate what was already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Novelty {
    Novel,
    Known,
    Retrodiction,
}

/// Declared horizon of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    Quarter,
    HalfYear,
    Year,
}

impl Horizon {
    pub fn days(&self) -> i64 {
        match self {
            Horizon::Quarter => 90,
            Horizon::HalfYear => 180,
            Horizon::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Quarter => "90 days",
            Horizon::HalfYear => "6 months",
            Horizon::Year => "12 months",
        }
    }
}

/// Terminal verdict supplied by the external review process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewOutcome {
    Confirmed,
    Refuted,
    Ambiguous,
}

impl ReviewOutcome {
    fn as_status(&self) -> PredictionStatus {
        match self {
            ReviewOutcome::Confirmed => PredictionStatus::Confirmed,
            ReviewOutcome::Refuted => PredictionStatus::Refuted,
            ReviewOutcome::Ambiguous => PredictionStatus::Ambiguous,
        }
    }
}

/// A dated, falsifiable hypothesis with explicit confirmation and refutation
/// criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: Uuid,
    pub model_id: String,
    pub hypothesis: String,
    pub timeframe: Horizon,
    pub generated_date: NaiveDate,
    pub target_date: NaiveDate,
    /// What must be observed for the prediction to count as confirmed.
    pub conditions: String,
    /// What must be observed for it to count as refuted.
    pub refutation_conditions: String,
    pub status: PredictionStatus,
    pub novelty: Novelty,
    pub outcome_note: Option<String>,
    pub outcome_date: Option<NaiveDate>,
}

impl Prediction {
    /// Apply an external review verdict. Only a `Pending` prediction can be
    /// resolved; a second review is an error, not an overwrite.
    pub fn review(
        &mut self,
        outcome: ReviewOutcome,
        outcome_date: NaiveDate,
        note: Option<String>,
    ) -> Result<()> {
        if self.status != PredictionStatus::Pending {
            return Err(EngineError::AlreadyResolved {
                id: self.id.to_string(),
            });
        }
        self.status = outcome.as_status();
        self.outcome_date = Some(outcome_date);
        self.outcome_note = note;
        Ok(())
    }
}

/// A model's fixed theoretical commitments plus its accumulating prediction
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchProgramme {
    pub model_id: String,
    /// Commitments the programme never gives up; anomalies are deflected
    /// into the belt instead.
    pub hard_core: Vec<String>,
    /// Revisable auxiliary hypotheses that absorb anomalies.
    pub protective_belt: Vec<String>,
    pub positive_heuristic: String,
    pub negative_heuristic: String,
    /// Append-only.
    pub predictions: Vec<Prediction>,
}

impl ResearchProgramme {
    pub fn record(&mut self, prediction: Prediction) {
        self.predictions.push(prediction);
    }
}

fn programme(
    model_id: &str,
    hard_core: &[&str],
    protective_belt: &[&str],
    positive_heuristic: &str,
    negative_heuristic: &str,
) -> ResearchProgramme {
    ResearchProgramme {
        model_id: model_id.to_string(),
        hard_core: hard_core.iter().map(|s| s.to_string()).collect(),
        protective_belt: protective_belt.iter().map(|s| s.to_string()).collect(),
        positive_heuristic: positive_heuristic.to_string(),
        negative_heuristic: negative_heuristic.to_string(),
        predictions: Vec::new(),
    }
}

/// Static programme descriptions for the eight built-in models, with empty
/// prediction records.
pub fn programme_catalog() -> Vec<ResearchProgramme> {
    vec![
        programme(
            "levitsky_ziblatt",
            &[
                "Democracies die through elected incumbents, not coups",
                "Mutual toleration and institutional forbearance are the load-bearing norms",
            ],
            &[
                "Gatekeeping failure by mainstream parties precedes breakdown",
                "Norm erosion is sequential: referees first, then opponents, then rules",
            ],
            "Track capture of referee institutions before formal rule changes",
            "Do not treat coups or election suspension as the primary pathway",
        ),
        programme(
            "levitsky_way",
            &[
                "Regimes can hold genuine but systematically tilted elections indefinitely",
                "Linkage and leverage with the democratic West condition trajectories",
            ],
            &[
                "Organizational power of incumbents determines durability",
                "A tilted field is stable short of full closure",
            ],
            "Measure the tilt of the playing field, not election outcomes",
            "Do not classify every flawed democracy as transitioning to full autocracy",
        ),
        programme(
            "linz",
            &[
                "Winner-take-all executive competition is inherently destabilizing",
                "Breakdown runs through loyalty problems among semi-loyal actors",
            ],
            &[
                "Dual legitimacy conflicts escalate where mandates collide",
                "Fixed terms turn crises of government into crises of regime",
            ],
            "Watch for inter-branch deadlock resolved outside the constitution",
            "Do not expect parliamentary-style safety valves to operate",
        ),
        programme(
            "bermeo",
            &[
                "Modern backsliding is incremental and legalistic, not sudden",
                "Executive aggrandizement replaces the classic coup",
            ],
            &[
                "Each step is individually defensible and jointly fatal",
                "Aggrandizers preserve electoral legitimation as cover",
            ],
            "Track the cumulative legal perimeter of executive discretion",
            "Do not wait for a single dramatic rupture as the signal",
        ),
        programme(
            "svolik",
            &[
                "Polarized voters will trade democratic principles for partisan interest",
                "The electoral check fails exactly when it is most needed",
            ],
            &[
                "Incumbents manufacture polarization to blunt punishment",
                "Voters punish manipulation only when it targets their own side",
            ],
            "Measure the price voters attach to democratic violations",
            "Do not assume public opinion is an unconditional brake",
        ),
        programme(
            "paxton",
            &[
                "Authoritarian movements reach power through elite accommodation, not majorities",
                "Mobilizational asymmetry in the streets precedes institutional capture",
            ],
            &[
                "Movements radicalize in power, not before",
                "Conservative elites misjudge their ability to tame the movement",
            ],
            "Track the street balance and elite bargaining, not manifestos",
            "Do not read movement ideology as a fixed program",
        ),
        programme(
            "arendt",
            &[
                "Totalist movements feed on atomization and loneliness",
                "A movement's fictional world substitutes for shared reality",
            ],
            &[
                "Propaganda succeeds by consistency, not plausibility",
                "Organization ranks members by distance from reality",
            ],
            "Watch the closure of the information world around supporters",
            "Do not model the movement as an interest-maximizing party",
        ),
        programme(
            "przeworski",
            &[
                "Democracy survives when relevant forces prefer losing under it to fighting",
                "Elite compliance calculations, not values, carry the equilibrium",
            ],
            &[
                "Economic stakes set the price of defection from democracy",
                "Capitalists comply with consolidation when expropriation is off the table",
            ],
            "Track the expected value of defection for pivotal elites",
            "Do not expect normative commitments to outweigh material stakes",
        ),
    ]
}

/// Programme description for one model id.
pub fn programme_for(model_id: &str) -> Option<ResearchProgramme> {
    programme_catalog().into_iter().find(|p| p.model_id == model_id)
}
