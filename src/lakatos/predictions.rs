//! Per-model prediction decision tables.
//!
//! Each model owns a fixed set of threshold branches over the current factor
//! scores; every run emits one to three dated predictions with explicit
//! confirmation and refutation criteria. The tables are static domain data.
//! An unregistered model id is a loud error, not an empty list.

use chrono::{Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::Scores;
use crate::error::{EngineError, Result};
use crate::lakatos::programme::{Horizon, Novelty, Prediction, PredictionStatus};

/// Where and when the predictions are being generated.
#[derive(Debug, Clone)]
pub struct PredictionContext {
    pub country: String,
    pub as_of: NaiveDate,
}

/// Model ids with a registered decision table.
const REGISTERED_MODELS: [&str; 8] = [
    "levitsky_ziblatt",
    "levitsky_way",
    "linz",
    "bermeo",
    "svolik",
    "paxton",
    "arendt",
    "przeworski",
];

/// Whether a decision table exists for this model id. Lets an orchestrator
/// skip unregistered overlay models instead of tripping `UnknownModel`.
pub fn has_prediction_table(model_id: &str) -> bool {
    REGISTERED_MODELS.contains(&model_id)
}

fn sc(scores: &Scores, id: &str) -> f64 {
    scores.get(id).copied().unwrap_or(0.0)
}

fn emit(
    model_id: &str,
    ctx: &PredictionContext,
    horizon: Horizon,
    hypothesis: String,
    conditions: &str,
    refutation: &str,
) -> Prediction {
    Prediction {
        id: Uuid::new_v4(),
        model_id: model_id.to_string(),
        hypothesis,
        timeframe: horizon,
        generated_date: ctx.as_of,
        target_date: ctx.as_of + Duration::days(horizon.days()),
        conditions: conditions.to_string(),
        refutation_conditions: refutation.to_string(),
        status: PredictionStatus::Pending,
        novelty: Novelty::Novel,
        outcome_note: None,
        outcome_date: None,
    }
}

/// Run one model's decision table against the current scores.
pub fn generate_predictions(
    model_id: &str,
    scores: &Scores,
    ctx: &PredictionContext,
) -> Result<Vec<Prediction>> {
    let preds = match model_id {
        "levitsky_ziblatt" => {
            let mut out = Vec::new();
            if sc(scores, "judicial") > 50.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "{} moves to bring prosecutorial or judicial appointments under direct executive control",
                        ctx.country
                    ),
                    "A formal appointment-rule change, court-packing bill, or mass replacement of prosecutors is enacted or formally proposed",
                    "No new formal measure against judicial personnel; pending court challenges to the executive proceed unobstructed",
                ));
            } else {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Institutional conflict in {} stays inside existing rules; no structural move against the courts",
                        ctx.country
                    ),
                    "Twelve months pass without a formal proposal restructuring judicial appointment or review powers",
                    "A court-packing, jurisdiction-stripping, or appointment-capture measure is formally introduced",
                ));
            }
            if sc(scores, "media") > 60.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Quarter,
                    format!(
                        "A major independent outlet in {} changes ownership to a government-aligned buyer or loses its license",
                        ctx.country
                    ),
                    "At least one national-reach independent outlet is sold to an aligned owner, shut, or stripped of its license",
                    "All national-reach independent outlets retain ownership and licenses through the window",
                ));
            }
            out
        }
        "levitsky_way" => {
            let mut out = Vec::new();
            if sc(scores, "election_interference") > 55.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "The next national election in {} is held on a measurably tilted field rather than cancelled",
                        ctx.country
                    ),
                    "The election takes place, opposition competes, and at least two independent monitors document systematic incumbent advantage",
                    "The election is suspended outright, or monitors find no systematic tilt",
                ));
            } else {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Electoral administration in {} stays within normal partisan contestation",
                        ctx.country
                    ),
                    "No structural change to election administration or certification favoring the incumbent is enacted",
                    "A certification, registration, or administration change with systematic incumbent advantage is enacted",
                ));
            }
            out
        }
        "linz" => {
            let mut out = Vec::new();
            if sc(scores, "political") > 60.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "An inter-branch deadlock in {} is resolved by unilateral executive action outside the constitutional text",
                        ctx.country
                    ),
                    "The executive governs past a blocking branch by decree, emergency power, or refusal to execute a binding ruling",
                    "Deadlocks in the window are resolved by negotiation, courts, or elections",
                ));
            }
            if sc(scores, "federalism") > 55.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "{} moves against an opposition-held subnational government",
                        ctx.country
                    ),
                    "An opposition-led region or city is stripped of powers, funding, or its elected leadership by central action",
                    "No central intervention against opposition-held subnational governments occurs",
                ));
            }
            if out.is_empty() {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Executive-legislative conflict in {} remains within constitutional channels",
                        ctx.country
                    ),
                    "All inter-branch disputes in the window end in negotiated or adjudicated outcomes",
                    "Any dispute ends in unilateral executive fait accompli",
                ));
            }
            out
        }
        "bermeo" => {
            vec![if sc(scores, "judicial") > 45.0 || sc(scores, "election_interference") > 45.0 {
                emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "{} enacts a facially legal measure that durably widens executive discretion",
                        ctx.country
                    ),
                    "A statute, decree, or rule change expands executive power over courts, elections, or oversight and survives initial challenge",
                    "No such measure is enacted, or enacted measures are struck down and accepted as struck down",
                )
            } else {
                emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "The legal perimeter of executive power in {} is stable or narrows",
                        ctx.country
                    ),
                    "No net expansion of executive discretion over referees survives the window",
                    "A surviving enactment widens executive discretion over courts, elections, or oversight",
                )
            }]
        }
        "svolik" => {
            let mut out = Vec::new();
            if sc(scores, "public_opinion") > 55.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "A documented democratic violation in {} produces no measurable polling penalty for the incumbent",
                        ctx.country
                    ),
                    "A violation is credibly documented and incumbent support moves less than the polling margin of error",
                    "Incumbent support drops beyond the margin of error following the documented violation",
                ));
            } else {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "Voters in {} visibly punish the next documented democratic violation",
                        ctx.country
                    ),
                    "A documented violation is followed by an incumbent support drop beyond the margin of error",
                    "The violation passes without measurable cost",
                ));
            }
            if sc(scores, "political") > 60.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Opposition coordination in {} fails at the next focal contest",
                        ctx.country
                    ),
                    "Major opposition forces run divided in a contest where unity was arithmetically decisive",
                    "The opposition fields a unified candidate or list at the focal contest",
                ));
            }
            out
        }
        "paxton" => {
            vec![if sc(scores, "mobilization_balance") > 60.0 {
                emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "Establishment figures in {} publicly normalize the movement in exchange for support",
                        ctx.country
                    ),
                    "At least two mainstream elite actors enter formal cooperation with movement organizations previously treated as beyond the pale",
                    "Mainstream elites maintain or harden the cordon against movement organizations",
                )
            } else {
                emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "No mobilizational monopoly forms in {}; counter-mobilization stays viable",
                        ctx.country
                    ),
                    "Opposition demonstrations continue to match or exceed movement turnout at comparable events",
                    "Movement street presence becomes effectively uncontested",
                )
            }]
        }
        "arendt" => {
            vec![if sc(scores, "media") > 60.0 && sc(scores, "public_opinion") > 55.0 {
                emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "A demonstrably false regime narrative in {} survives public refutation among supporters",
                        ctx.country
                    ),
                    "Polling or equivalent evidence shows majority supporter belief in the narrative after prominent refutation",
                    "Supporter belief in the narrative collapses after refutation",
                )
            } else {
                emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Shared factual reference points persist across {}'s political camps",
                        ctx.country
                    ),
                    "Cross-camp agreement on basic contested facts remains demonstrable in the window",
                    "A closed movement information world emerges that is immune to external correction",
                )
            }]
        }
        "przeworski" => {
            let mut out = Vec::new();
            if sc(scores, "corporate_compliance") > 55.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::HalfYear,
                    format!(
                        "Major business associations in {} stay silent through the next escalation against institutions",
                        ctx.country
                    ),
                    "No peak business association publicly opposes the next documented institutional encroachment",
                    "At least one peak association publicly opposes the encroachment within two weeks",
                ));
            }
            if sc(scores, "state_capacity") > 60.0 {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Security-service leadership in {} is reshuffled toward personal loyalists",
                        ctx.country
                    ),
                    "Top security appointments in the window go to figures with personal rather than institutional ties to the incumbent",
                    "Security appointments follow institutional seniority norms",
                ));
            }
            if out.is_empty() {
                out.push(emit(
                    model_id,
                    ctx,
                    Horizon::Year,
                    format!(
                        "Pivotal elites in {} keep the cost of consolidation high",
                        ctx.country
                    ),
                    "Visible elite opposition (business, military, or party) meets the next consolidation move",
                    "The next consolidation move draws no pivotal elite opposition",
                ));
            }
            out
        }
        _ => {
            return Err(EngineError::UnknownModel {
                model_id: model_id.to_string(),
            })
        }
    };

    debug!(
        "Predictions generated - model={}, count={}, as_of={}",
        model_id,
        preds.len(),
        ctx.as_of
    );
    Ok(preds)
}
