use serde::Serialize;

use super::category::{classify, CharacterCategory};
use super::transition::TransitionCounts;

/// Character and transition statistics for a text.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSummary {
	/// Characters (Unicode scalar values) in the text.
	pub total_chars: usize,
	/// Letters, i.e. vowels plus consonants.
	pub alphabetic: usize,
	/// Characters classified `Vowel`.
	pub vowels: usize,
	/// Characters classified `Consonant`.
	pub consonants: usize,
	/// Transitions recorded while fitting.
	pub transitions: usize,
}

impl TextSummary {
	/// Counts the characters of `text`; `transitions` is taken from `counts`.
	pub fn new(text: &str, counts: &TransitionCounts) -> Self {
		let mut summary = Self {
			total_chars: 0,
			alphabetic: 0,
			vowels: 0,
			consonants: 0,
			transitions: counts.total(),
		};

		for c in text.chars() {
			summary.total_chars += 1;
			match classify(c) {
				CharacterCategory::Vowel => summary.vowels += 1,
				CharacterCategory::Consonant => summary.consonants += 1,
				CharacterCategory::Other => continue,
			}
			summary.alphabetic += 1;
		}

		summary
	}

	/// Vowels as a percentage of alphabetic characters.
	pub fn vowel_share(&self) -> f64 {
		Self::share(self.vowels, self.alphabetic)
	}

	/// Consonants as a percentage of alphabetic characters.
	pub fn consonant_share(&self) -> f64 {
		Self::share(self.consonants, self.alphabetic)
	}

	fn share(part: usize, whole: usize) -> f64 {
		if whole == 0 {
			return 0.0;
		}
		part as f64 / whole as f64 * 100.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::chain_builder::fit;

	#[test]
	fn counts_pangram() {
		let text = "The quick brown fox jumps over the lazy dog.";
		let (_, counts) = fit(text);
		let summary = TextSummary::new(text, &counts);
		assert_eq!(summary.total_chars, 44);
		assert_eq!(summary.alphabetic, 35);
		assert_eq!(summary.vowels, 11);
		assert_eq!(summary.consonants, 24);
		assert_eq!(summary.transitions, 34);
	}

	#[test]
	fn counts_code_points() {
		let summary = TextSummary::new("né!", &TransitionCounts::new());
		assert_eq!(summary.total_chars, 3);
		assert_eq!(summary.alphabetic, 2);
		assert_eq!(summary.consonants, 2);
	}

	#[test]
	fn shares_without_letters() {
		let summary = TextSummary::new("123", &TransitionCounts::new());
		assert_eq!(summary.vowel_share(), 0.0);
		assert_eq!(summary.consonant_share(), 0.0);
	}

	#[test]
	fn shares_sum_to_hundred() {
		let summary = TextSummary::new("abcde", &TransitionCounts::new());
		assert!((summary.vowel_share() - 40.0).abs() < 1e-9);
		assert!((summary.vowel_share() + summary.consonant_share() - 100.0).abs() < 1e-9);
	}
}
