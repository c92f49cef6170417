//! Gating checks a driver applies around fitting.
//!
//! The chain accepts any text. These checks turn too-short or letter-poor
//! inputs into a reported early stop before any results are shown.

use crate::error::ChainError;

use super::category::is_letter;
use super::transition::TransitionCounts;

/// Minimum number of alphabetic characters a text needs before fitting.
pub const MIN_ALPHABETIC: usize = 2;

/// Checks that `text` holds at least [`MIN_ALPHABETIC`] letters.
///
/// Returns the alphabetic character count.
pub fn check_input(text: &str) -> Result<usize, ChainError> {
	let found = text.chars().filter(|&c| is_letter(c)).count();
	if found < MIN_ALPHABETIC {
		return Err(ChainError::InsufficientInput { found, min: MIN_ALPHABETIC });
	}
	Ok(found)
}

/// Checks that fitting recorded at least one transition.
///
/// Returns the total number of transitions.
pub fn check_transitions(counts: &TransitionCounts) -> Result<usize, ChainError> {
	match counts.total() {
		0 => Err(ChainError::NoTransitionsObserved),
		total => Ok(total),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::chain_builder::fit;

	#[test]
	fn single_letter_is_insufficient() {
		assert_eq!(check_input("a"), Err(ChainError::InsufficientInput { found: 1, min: 2 }));
	}

	#[test]
	fn digits_only_is_insufficient() {
		assert_eq!(check_input("1 2 3"), Err(ChainError::InsufficientInput { found: 0, min: 2 }));
	}

	#[test]
	fn two_letters_pass() {
		assert_eq!(check_input("a b"), Ok(2));
		assert_eq!(check_input("héllo"), Ok(5));
	}

	#[test]
	fn letter_numbers_do_not_count() {
		assert_eq!(check_input("Ⅻa"), Err(ChainError::InsufficientInput { found: 1, min: 2 }));
	}

	#[test]
	fn combining_signs_do_not_count() {
		// क + vowel sign i: one letter, nothing to chain
		assert_eq!(check_input("कि"), Err(ChainError::InsufficientInput { found: 1, min: 2 }));
		assert_eq!(fit("कि").1.total(), 0);
	}

	#[test]
	fn transitions_required() {
		assert_eq!(check_transitions(&TransitionCounts::new()), Err(ChainError::NoTransitionsObserved));
		let (_, counts) = fit("a; b");
		assert_eq!(check_transitions(&counts), Ok(1));
	}
}
