//! Historical regime-transition cases.
//!
//! An immutable catalog of documented consolidation attempts, each tagged
//! with an outcome class, a severity score, and a full ten-factor vector
//! estimated for the decisive period. Used as comparison points by the
//! case-matching engine; never mutated after load.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::factors::Factor;

/// How a consolidation attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The incumbent locked in authoritarian rule.
    Consolidated,
    /// Institutions or voters turned the attempt back.
    Resisted,
    /// The polity moved from autocracy toward democracy.
    Democratized,
    /// The attempt is still unresolved.
    Ongoing,
}

/// One documented regime transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalCase {
    pub id: String,
    pub country: String,
    /// Human-readable period label, e.g. "Fidesz supermajority".
    pub period: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub outcome: Outcome,
    /// Severity of the outcome on [0, 100].
    pub outcome_score: f64,
    pub factors: BTreeMap<String, f64>,
    pub notes: String,
    pub sources: Vec<String>,
}

lazy_static::lazy_static! {
    /// Process-lifetime case store, shared by reference.
    pub static ref CASES: Vec<HistoricalCase> = case_store();
}

/// Factor ids in the order the per-case vectors below are written.
const VECTOR_ORDER: [&str; 10] = [
    "judicial",
    "media",
    "political",
    "federalism",
    "civil",
    "public_opinion",
    "mobilization_balance",
    "state_capacity",
    "corporate_compliance",
    "election_interference",
];

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    country: &str,
    period: &str,
    start_year: i32,
    end_year: Option<i32>,
    outcome: Outcome,
    outcome_score: f64,
    vector: [f64; 10],
    notes: &str,
    sources: &[&str],
) -> HistoricalCase {
    HistoricalCase {
        id: id.to_string(),
        country: country.to_string(),
        period: period.to_string(),
        start_year,
        end_year,
        outcome,
        outcome_score,
        factors: VECTOR_ORDER
            .iter()
            .zip(vector.iter())
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
        notes: notes.to_string(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in case store.
pub fn case_store() -> Vec<HistoricalCase> {
    vec![
        case(
            "weimar_1930",
            "Germany",
            "Weimar collapse",
            1930,
            Some(1933),
            Outcome::Consolidated,
            100.0,
            [70.0, 60.0, 75.0, 65.0, 80.0, 70.0, 90.0, 75.0, 70.0, 60.0],
            "Presidential emergency rule normalized government without parliament years before the seizure; paramilitary street dominance went unanswered by republican forces.",
            &["Evans, The Coming of the Third Reich", "Bracher, The German Dictatorship"],
        ),
        case(
            "italy_1922",
            "Italy",
            "March on Rome",
            1919,
            Some(1925),
            Outcome::Consolidated,
            95.0,
            [65.0, 55.0, 70.0, 60.0, 75.0, 65.0, 90.0, 60.0, 75.0, 55.0],
            "Squadrismo broke socialist organization province by province while conservative elites bargained Mussolini into office.",
            &["Paxton, The Anatomy of Fascism"],
        ),
        case(
            "chile_1973",
            "Chile",
            "Pinochet coup",
            1970,
            Some(1974),
            Outcome::Consolidated,
            90.0,
            [55.0, 50.0, 65.0, 40.0, 60.0, 55.0, 70.0, 85.0, 65.0, 45.0],
            "Polarization and economic siege ended in a military seizure; consolidation ran through the security services rather than elections.",
            &["Valenzuela, The Breakdown of Democratic Regimes: Chile"],
        ),
        case(
            "russia_2000",
            "Russia",
            "Putin consolidation",
            2000,
            Some(2008),
            Outcome::Consolidated,
            95.0,
            [80.0, 85.0, 75.0, 70.0, 70.0, 75.0, 65.0, 85.0, 85.0, 80.0],
            "Television first, oligarchs second, governors third. Formal institutions stayed in place while every independent power center was emptied.",
            &["Gessen, The Future Is History", "Fish, Democracy Derailed in Russia"],
        ),
        case(
            "venezuela_1999",
            "Venezuela",
            "Chavista refounding",
            1999,
            Some(2013),
            Outcome::Consolidated,
            90.0,
            [85.0, 75.0, 70.0, 75.0, 65.0, 70.0, 75.0, 60.0, 70.0, 75.0],
            "A constituent assembly rewrote the rules, then court packing and recall manipulation locked the new ones in.",
            &["Corrales & Penfold, Dragon in the Tropics"],
        ),
        case(
            "hungary_2010",
            "Hungary",
            "Fidesz supermajority",
            2010,
            Some(2022),
            Outcome::Consolidated,
            70.0,
            [75.0, 80.0, 60.0, 80.0, 55.0, 60.0, 55.0, 50.0, 70.0, 70.0],
            "A two-thirds parliamentary majority made the capture legal at every step: constitution, courts, media authority, districting.",
            &["Scheppele, Autocratic Legalism", "Magyar, Post-Communist Mafia State"],
        ),
        case(
            "turkey_2013",
            "Turkey",
            "Erdogan consolidation",
            2013,
            Some(2018),
            Outcome::Consolidated,
            80.0,
            [80.0, 75.0, 65.0, 60.0, 75.0, 65.0, 70.0, 75.0, 70.0, 65.0],
            "Gezi, the corruption probes, and the failed coup each became a purge opportunity; the 2017 referendum formalized the new executive.",
            &["Esen & Gumuscu, Rising Competitive Authoritarianism in Turkey"],
        ),
        case(
            "poland_2015",
            "Poland",
            "PiS court capture",
            2015,
            Some(2023),
            Outcome::Resisted,
            40.0,
            [70.0, 55.0, 45.0, 40.0, 35.0, 40.0, 35.0, 40.0, 40.0, 45.0],
            "Tribunal capture advanced fast, but local government, private media, and an eventually unified opposition held until the 2023 turnover.",
            &["Sadurski, Poland's Constitutional Breakdown"],
        ),
        case(
            "brazil_2019",
            "Brazil",
            "Bolsonaro presidency",
            2019,
            Some(2023),
            Outcome::Resisted,
            35.0,
            [35.0, 40.0, 40.0, 30.0, 35.0, 45.0, 45.0, 40.0, 35.0, 50.0],
            "Continuous attacks on the electoral system never became control of it; the superior courts and governors kept their footing.",
            &["Hunter & Power, Bolsonaro and Brazil's Illiberal Backlash"],
        ),
        case(
            "us_1950",
            "United States",
            "McCarthy era",
            1950,
            Some(1954),
            Outcome::Resisted,
            30.0,
            [30.0, 45.0, 35.0, 25.0, 55.0, 50.0, 30.0, 40.0, 50.0, 20.0],
            "Loyalty purges ran through civil society and the civil service, but courts, the Senate, and television eventually closed ranks against the method.",
            &["Schrecker, Many Are the Crimes"],
        ),
        case(
            "israel_2023",
            "Israel",
            "Judicial overhaul",
            2023,
            Some(2024),
            Outcome::Resisted,
            45.0,
            [65.0, 40.0, 35.0, 30.0, 30.0, 40.0, 35.0, 35.0, 40.0, 25.0],
            "A frontal move on judicial review met sustained mass mobilization, reservist refusal, and elite defection; the package stalled.",
            &["Israel Democracy Institute assessments, 2023"],
        ),
        case(
            "spain_1975",
            "Spain",
            "Transition",
            1975,
            Some(1982),
            Outcome::Democratized,
            15.0,
            [50.0, 45.0, 30.0, 40.0, 35.0, 30.0, 25.0, 55.0, 40.0, 20.0],
            "Pacted exit from dictatorship. Regime softliners and opposition moderates traded amnesty for elections, then survived the 1981 coup attempt.",
            &["Linz & Stepan, Problems of Democratic Transition and Consolidation"],
        ),
        case(
            "south_korea_1987",
            "South Korea",
            "June struggle",
            1987,
            Some(1993),
            Outcome::Democratized,
            20.0,
            [55.0, 50.0, 35.0, 45.0, 40.0, 30.0, 25.0, 60.0, 50.0, 30.0],
            "Mass protest plus Olympic exposure forced direct presidential elections; the security state stood down rather than fire.",
            &["Cumings, Korea's Place in the Sun"],
        ),
        case(
            "tunisia_2011",
            "Tunisia",
            "Jasmine transition",
            2011,
            Some(2014),
            Outcome::Democratized,
            25.0,
            [45.0, 40.0, 35.0, 40.0, 30.0, 35.0, 30.0, 40.0, 35.0, 30.0],
            "The one Arab Spring case where unions, bar associations, and parties brokered a constitutional bargain instead of a relapse.",
            &["Stepan, Tunisia's Transition and the Twin Tolerations"],
        ),
        case(
            "india_2014",
            "India",
            "BJP dominance",
            2014,
            None,
            Outcome::Ongoing,
            60.0,
            [55.0, 65.0, 50.0, 45.0, 55.0, 60.0, 65.0, 55.0, 60.0, 45.0],
            "Agency pressure on opposition and press, majoritarian mobilization, and compliant conglomerate media against a still-competitive federal electoral map.",
            &["Varshney, How India's Ruling Party Erodes Democracy"],
        ),
        case(
            "el_salvador_2019",
            "El Salvador",
            "Bukele presidency",
            2019,
            None,
            Outcome::Ongoing,
            65.0,
            [70.0, 55.0, 60.0, 55.0, 50.0, 75.0, 60.0, 65.0, 55.0, 50.0],
            "Court replacement and an indefinite state of exception, carried by overwhelming genuine popularity.",
            &["Meléndez-Sánchez, Latin America Erupts: Millennial Authoritarianism"],
        ),
    ]
}

/// Parse a case overlay from YAML, validating factor ids and score ranges
/// against the factor catalog.
pub fn cases_from_yaml(yaml: &str, factors: &[Factor]) -> anyhow::Result<Vec<HistoricalCase>> {
    let cases: Vec<HistoricalCase> =
        serde_yaml::from_str(yaml).context("failed to parse case overlay YAML")?;
    if cases.is_empty() {
        bail!("case overlay contains no cases");
    }
    for c in &cases {
        for (id, v) in &c.factors {
            if !factors.iter().any(|f| &f.id == id) {
                bail!("case '{}' references unknown factor '{}'", c.id, id);
            }
            if !(0.0..=100.0).contains(v) {
                bail!("case '{}' has out-of-range score {} for '{}'", c.id, v, id);
            }
        }
    }
    Ok(cases)
}

/// Load a case overlay file.
pub fn load_cases(path: impl AsRef<Path>, factors: &[Factor]) -> anyhow::Result<Vec<HistoricalCase>> {
    let raw = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read {:?}", path.as_ref()))?;
    cases_from_yaml(&raw, factors)
}
