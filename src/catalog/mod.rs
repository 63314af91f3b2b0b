//! Static Reference Data
//!
//! Factor, model, and historical-case catalogs: immutable, process-lifetime
//! reference data constructed once and passed by reference into the pure
//! scoring functions. YAML overlays let deployments extend the built-in
//! model and case sets without recompiling.

pub mod cases;
pub mod factors;
pub mod models;

pub use cases::{case_store, cases_from_yaml, load_cases, HistoricalCase, Outcome, CASES};
pub use factors::{
    factor_catalog, factor_order, factors_in_danger, validate_scores, Factor, Scores, FACTORS,
};
pub use models::{load_models, model_catalog, models_from_yaml, TheoreticalModel, MODELS};
