//! Top-level module for the vowel/consonant chain.
//!
//! - Character categories and the classifier (`category`)
//! - Count and probability tables (`transition`)
//! - The fitting pass (`chain_builder`)
//! - The scoring pass (`evaluator`)
//! - Driver-side gating and statistics (`gate`, `summary`, `simulation`)

/// Character categories and the classifier.
pub mod category;

/// 2x2 transition count and probability tables.
pub mod transition;

/// Single-pass transition counting and normalization.
pub mod chain_builder;

/// Replays a text against a fitted table and scores predictions.
pub mod evaluator;

/// Input checks a driver applies before and after fitting.
pub mod gate;

/// Character and transition statistics for a text.
pub mod summary;

/// Gate, fit, score and summarize in one call.
pub mod simulation;
