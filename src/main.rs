//! Authoritarian Consolidation Risk Engine
//!
//! Thin command-line shell around the scoring core: load a scores payload
//! (and optionally a signals payload), run one assessment against the
//! built-in catalogs, and print a plain-text report. All scoring logic lives
//! in the library; this file is the orchestrating layer.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use regime_risk::assessment::{run_assessment, AssessmentContext};
use regime_risk::catalog::Scores;
use regime_risk::signals::SignalBundle;

struct CliArgs {
    scores_path: String,
    signals_path: Option<String>,
    country: String,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let scores_path = match args.next() {
        Some(p) => p,
        None => bail!("usage: regime_risk <scores.json> [signals.json] [country]"),
    };
    let signals_path = args.next();
    let country = args.next().unwrap_or_else(|| "the polity".to_string());
    Ok(CliArgs {
        scores_path,
        signals_path,
        country,
    })
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let cli = parse_args()?;

    let raw = std::fs::read_to_string(&cli.scores_path)
        .with_context(|| format!("failed to read {}", cli.scores_path))?;
    let scores: Scores = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scores payload {}", cli.scores_path))?;

    let signals: SignalBundle = match &cli.signals_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse signals payload {}", path))?
        }
        None => SignalBundle::default(),
    };

    let ctx = AssessmentContext {
        country: cli.country,
        as_of: Utc::now().date_naive(),
    };
    let assessment = run_assessment(&scores, &signals, &ctx)?;

    println!("\n{}", "═".repeat(60));
    println!(
        "Consolidation risk: {} ({})",
        assessment.country, assessment.as_of
    );
    println!("{}", "═".repeat(60));
    println!(
        "Composite: {:.1}  [{}]",
        assessment.composite_score,
        assessment.composite_risk.label()
    );

    if !assessment.adjustment_reasons.is_empty() {
        println!("\nSignal adjustments:");
        for reason in &assessment.adjustment_reasons {
            println!("  - {}", reason);
        }
    }

    if !assessment.danger_factors.is_empty() {
        println!("\nFactors past danger threshold: {}", assessment.danger_factors.join(", "));
    }

    println!("\nModel scores:");
    for ms in &assessment.model_scores {
        let outlier = if ms.is_outlier { " (outlier)" } else { "" };
        println!(
            "  {:<20} {:>6.1}  [{}]{}",
            ms.model_id,
            ms.score,
            ms.risk_level.label(),
            outlier
        );
        if !ms.explanation.is_empty() {
            println!("      {}", ms.explanation);
        }
    }

    println!("\nCluster averages:");
    for ca in &assessment.cluster_averages {
        println!("  {:<20} {:>6.1}  ({} models)", ca.cluster, ca.average, ca.models);
    }

    match &assessment.consensus {
        Some(c) => {
            println!(
                "\nHistorical consensus: mean top similarity {:.3} (range {:.3}-{:.3}, agreement {:?})",
                c.mean_top, c.min_top, c.max_top, c.agreement
            );
            for cited in &c.most_cited {
                println!("  cited by {}: {}", cited.cited_by.len(), cited.case_id);
            }
        }
        None => println!("\nNo historical case cleared the similarity threshold."),
    }

    println!("\nNew predictions ({}):", assessment.predictions.len());
    for p in &assessment.predictions {
        println!(
            "  [{}] {} (by {})",
            p.model_id, p.hypothesis, p.target_date
        );
    }
    println!();

    Ok(())
}
