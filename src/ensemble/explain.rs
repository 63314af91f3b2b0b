//! Deterministic model explanations.
//!
//! Each model id maps to a fixed two-branch template keyed on `score >= 50`.
//! The branches interpolate raw factor scores, not contributions. This is
//! rule-based text assembly with no model-call dependency; an id without a
//! template yields an empty string.

use crate::catalog::Scores;

fn val(scores: &Scores, id: &str) -> f64 {
    scores.get(id).copied().unwrap_or(0.0)
}

/// Render the explanation for one model's verdict.
pub fn model_explanation(model_id: &str, score: f64, scores: &Scores) -> String {
    let high = score >= 50.0;
    match model_id {
        "levitsky_ziblatt" => {
            if high {
                format!(
                    "The guardrails are failing together: judicial capture at {:.0} and media capture at {:.0} mean the referees and the scoreboard are both contested.",
                    val(scores, "judicial"),
                    val(scores, "media")
                )
            } else {
                format!(
                    "Norm erosion is visible but the referee institutions still function; judicial capture at {:.0} and election interference at {:.0} remain below this framework's alarm range.",
                    val(scores, "judicial"),
                    val(scores, "election_interference")
                )
            }
        }
        "levitsky_way" => {
            if high {
                format!(
                    "The playing field is tilting into competitive authoritarianism: election interference at {:.0} with media capture at {:.0} lets the incumbent win without banning the opposition.",
                    val(scores, "election_interference"),
                    val(scores, "media")
                )
            } else {
                format!(
                    "Elections remain genuinely competitive; interference at {:.0} and opposition suppression at {:.0} have not yet closed the field.",
                    val(scores, "election_interference"),
                    val(scores, "political")
                )
            }
        }
        "linz" => {
            if high {
                format!(
                    "Executive-opposition confrontation is escalating beyond the constitutional order: opposition suppression at {:.0} with judicial capture at {:.0} leaves no neutral arbiter for the standoff.",
                    val(scores, "political"),
                    val(scores, "judicial")
                )
            } else {
                format!(
                    "Inter-branch conflict stays inside normal politics; opposition suppression at {:.0} and subnational erosion at {:.0} leave the system's pressure valves open.",
                    val(scores, "political"),
                    val(scores, "federalism")
                )
            }
        }
        "bermeo" => {
            if high {
                format!(
                    "This is aggrandizement, not a coup: judicial capture at {:.0} and subnational erosion at {:.0} show legal instruments doing the work of seizure.",
                    val(scores, "judicial"),
                    val(scores, "federalism")
                )
            } else {
                format!(
                    "Executive reach is expanding slowly at most; judicial capture at {:.0} and election interference at {:.0} are not yet the signature of aggrandizement.",
                    val(scores, "judicial"),
                    val(scores, "election_interference")
                )
            }
        }
        "svolik" => {
            if high {
                format!(
                    "Polarized voters are trading democracy for partisan wins: mass acquiescence at {:.0} alongside election interference at {:.0} means the electoral check is not binding.",
                    val(scores, "public_opinion"),
                    val(scores, "election_interference")
                )
            } else {
                format!(
                    "Voters still punish rule-breaking; acquiescence at {:.0} and opposition suppression at {:.0} leave the electoral check intact.",
                    val(scores, "public_opinion"),
                    val(scores, "political")
                )
            }
        }
        "paxton" => {
            if high {
                format!(
                    "The movement holds the streets: mobilizational imbalance at {:.0} with civil society repression at {:.0} matches the stage where conservative elites start offering power.",
                    val(scores, "mobilization_balance"),
                    val(scores, "civil")
                )
            } else {
                format!(
                    "No mobilizational monopoly yet; imbalance at {:.0} and corporate compliance at {:.0} leave opposing civic forces room to organize.",
                    val(scores, "mobilization_balance"),
                    val(scores, "corporate_compliance")
                )
            }
        }
        "arendt" => {
            if high {
                format!(
                    "Movement and message are fusing: mobilizational imbalance at {:.0} with media capture at {:.0} approaches the closed information world totalism requires.",
                    val(scores, "mobilization_balance"),
                    val(scores, "media")
                )
            } else {
                format!(
                    "Plural publics persist; media capture at {:.0} and mass acquiescence at {:.0} are well short of a movement reality replacing shared facts.",
                    val(scores, "media"),
                    val(scores, "public_opinion")
                )
            }
        }
        "przeworski" => {
            if high {
                format!(
                    "The elites have stopped betting on alternation: corporate compliance at {:.0} and coercive capacity at {:.0} mean the actors who could raise the cost of consolidation are absorbing it instead.",
                    val(scores, "corporate_compliance"),
                    val(scores, "state_capacity")
                )
            } else {
                format!(
                    "Key elites still hedge toward alternation; corporate compliance at {:.0} and mass acquiescence at {:.0} keep defection affordable.",
                    val(scores, "corporate_compliance"),
                    val(scores, "public_opinion")
                )
            }
        }
        _ => String::new(),
    }
}
