use log::debug;
use serde::Serialize;

use super::category;
use super::transition::TransitionProbabilities;

/// Outcome of replaying a text against a fitted chain.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct EvaluationResult {
	/// Percentage of correct predictions in `[0, 100]`, 0.0 when nothing was predicted.
	pub accuracy: f64,
	/// Number of correct predictions.
	pub correct: usize,
	/// Number of predictions made.
	pub total: usize,
}

impl EvaluationResult {
	/// Whether at least one prediction was made, i.e. `accuracy` is meaningful.
	pub fn is_defined(&self) -> bool {
		self.total > 0
	}
}

/// Scores `probabilities` by predicting each next category of `text`.
///
/// Uses the same traversal as fitting: every tracked character that has a
/// previous tracked category is predicted with
/// [`TransitionProbabilities::most_likely`] and compared to what it is.
///
/// This is self-evaluation when `probabilities` was fitted on the same text.
/// `total` then equals the number of fitted transitions.
pub fn score(text: &str, probabilities: &TransitionProbabilities) -> EvaluationResult {
	let mut correct = 0;
	let mut total = 0;
	let mut previous = None;

	for current in category::tracked(text) {
		if let Some(from) = previous {
			if probabilities.most_likely(from) == current {
				correct += 1;
			}
			total += 1;
		}
		previous = Some(current);
	}

	let accuracy = if total > 0 {
		correct as f64 / total as f64 * 100.0
	} else {
		0.0
	};

	debug!("scored {correct}/{total} predictions");

	EvaluationResult { accuracy, correct, total }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::chain_builder::fit;

	#[test]
	fn the_quick_brown_fox() {
		let text = "The quick brown fox";
		let (probs, _) = fit(text);
		let result = score(text, &probs);
		assert_eq!(result.correct, 10);
		assert_eq!(result.total, 15);
		assert!((result.accuracy - 200.0 / 3.0).abs() < 1e-9);
	}

	#[test]
	fn empty_text_is_undefined() {
		let result = score("", &TransitionProbabilities::default());
		assert_eq!(result.total, 0);
		assert_eq!(result.correct, 0);
		assert_eq!(result.accuracy, 0.0);
		assert!(!result.is_defined());
	}

	#[test]
	fn unfitted_table_predicts_vowel() {
		// "ab": the only prediction is from Vowel with an empty table -> Vowel, wrong.
		let result = score("ab", &TransitionProbabilities::default());
		assert_eq!(result.total, 1);
		assert_eq!(result.correct, 0);
		// "aa": same prediction, right.
		let result = score("aa", &TransitionProbabilities::default());
		assert_eq!(result.correct, 1);
		assert_eq!(result.accuracy, 100.0);
	}

	#[test]
	fn other_does_not_reset_cursor() {
		let (probs, _) = fit("ab");
		assert_eq!(score("a 1 b", &probs), score("ab", &probs));
	}

	#[test]
	fn scores_foreign_text() {
		// Fitted on alternating letters, scored on a run of consonants.
		let (probs, _) = fit("abab");
		let result = score("bbbb", &probs);
		assert_eq!(result.total, 3);
		assert_eq!(result.correct, 0);
	}
}
