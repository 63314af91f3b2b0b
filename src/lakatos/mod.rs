//! Prediction Tracking Engine
//!
//! Each theoretical model is treated as a Lakatosian research programme: a
//! fixed hard core and protective belt, a stream of dated falsifiable
//! predictions generated from current scores, and a progressiveness verdict
//! computed from the confirmed/refuted track record.

pub mod predictions;
pub mod programme;
pub mod progressiveness;

pub use predictions::{generate_predictions, has_prediction_table, PredictionContext};
pub use programme::{
    programme_catalog, programme_for, Horizon, Novelty, Prediction, PredictionStatus,
    ResearchProgramme, ReviewOutcome,
};
pub use progressiveness::{
    calculate_progressiveness, evaluate_programmes, ProgrammeEvaluation, ProgrammeStanding,
    ProgrammeStatus,
};
