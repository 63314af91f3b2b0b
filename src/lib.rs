//! Authoritarian Consolidation Risk Engine
//!
//! A pure scoring core with:
//! - Ensemble scoring across competing theoretical models
//! - Weighted cosine-similarity retrieval over historical transition cases
//! - Rule-based signal adjustment with an auditable reason trail
//! - Lakatosian prediction tracking and programme progressiveness

pub mod assessment;
pub mod catalog;
pub mod ensemble;
pub mod error;
pub mod lakatos;
pub mod matching;
pub mod signals;

// Re-exports for convenience
pub use assessment::{run_assessment, AssessmentContext, RiskAssessment};
pub use catalog::{Factor, HistoricalCase, Outcome, Scores, TheoreticalModel};
pub use ensemble::{classify_risk, score_ensemble, ModelScore, RiskLevel};
pub use error::{EngineError, Result};
pub use signals::SignalBundle;
