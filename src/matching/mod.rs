//! Case-Matching Engine
//!
//! Projects the current Scores vector and every historical case through one
//! model's weights, ranks cases by cosine similarity, and aggregates the
//! per-model rankings into a cross-model consensus. Also carries the
//! descriptive statistics over the case store (outcome-group averages and
//! the discriminative-power ranking).

pub mod consensus;
pub mod similarity;

pub use consensus::{
    averages_by_outcome, consensus, factor_discriminative_power, find_similar_cases,
    AgreementLevel, CaseSimilarity, CitedCase, MatchConsensus, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use similarity::{cosine_similarity, weighted_vector};
