use log::info;
use serde::Serialize;

use crate::error::ChainError;

use super::chain_builder::fit;
use super::evaluator::{score, EvaluationResult};
use super::gate::{check_input, check_transitions};
use super::summary::TextSummary;
use super::transition::{TransitionCounts, TransitionProbabilities};

/// A fitted and self-evaluated chain for one text.
///
/// # Behavior
/// - Rejects texts with fewer than two letters before fitting
/// - Fits the chain, then rejects it if no transition was recorded
/// - Scores the fitted table against the same text
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Simulation {
	/// Raw transition counts from the fitting pass.
	pub counts: TransitionCounts,
	/// Row-normalized table derived from `counts`.
	pub probabilities: TransitionProbabilities,
	/// Self-evaluation of `probabilities` on the same text.
	pub evaluation: EvaluationResult,
	/// Character statistics of the text.
	pub summary: TextSummary,
}

impl Simulation {
	/// Runs the gated fit-then-score pipeline on `text`.
	///
	/// # Errors
	/// - `ChainError::InsufficientInput` if the text has fewer than two letters
	/// - `ChainError::NoTransitionsObserved` if fitting recorded nothing
	pub fn run(text: &str) -> Result<Self, ChainError> {
		let alphabetic = check_input(text)?;
		info!("{alphabetic} alphabetic characters in input");

		let (probabilities, counts) = fit(text);
		check_transitions(&counts)?;

		let evaluation = score(text, &probabilities);
		info!(
			"{} correct predictions out of {} ({:.2}%)",
			evaluation.correct, evaluation.total, evaluation.accuracy
		);

		Ok(Self {
			counts,
			probabilities,
			evaluation,
			summary: TextSummary::new(text, &counts),
		})
	}
}
