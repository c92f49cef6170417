//! Vowel/consonant Markov chain library.
//!
//! This crate fits a first-order Markov chain over two character
//! categories and replays the same text against it:
//! - Character classification (vowel, consonant, other)
//! - Transition counting and row normalization
//! - Self-evaluation of next-category predictions
//! - Gating checks, text summaries and text source handling for drivers
//!
//! Fitting and scoring are two independent passes over the text, so the
//! fitted table can be inspected or reused before it is scored.

/// Core chain model: classification, fitting, scoring.
pub mod model;

/// Text source configuration.
pub mod config;

/// Error types shared by the gating checks.
pub mod error;

/// Text loading with a fallback to the configured literal.
pub mod io;
