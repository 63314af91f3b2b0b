//! Signal Adjustment Engine
//!
//! Auxiliary connector payloads (search trends, editorial narrative,
//! coordination scores, social temperature) nudge the raw factor scores
//! through a fixed decision table, producing an adjusted vector plus a
//! human-readable audit trail. Absent payloads fire no conditions and are
//! never an error.

pub mod adjust;
pub mod payloads;

pub use adjust::{apply_signal_adjustments, SignalAdjustment};
pub use payloads::{
    CategoryTrend, CoordinationPayload, NarrativePayload, SignalBundle, SocialPayload,
    TrendsPayload,
};
