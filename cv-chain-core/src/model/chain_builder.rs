use log::debug;

use super::category;
use super::transition::{TransitionCounts, TransitionProbabilities};

/// Fits a first-order vowel/consonant chain to `text`.
///
/// Walks the text once. Every tracked character records a transition from
/// the previous tracked category, if any, and then becomes the new previous
/// category. `Other` characters are skipped without touching the cursor, so
/// a transition may span punctuation, digits or whitespace.
///
/// Returns the normalized table together with the raw counts it came from.
/// Never fails: an empty or letter-free text yields all-zero tables, and the
/// caller decides whether `counts.total()` is enough to go on.
pub fn fit(text: &str) -> (TransitionProbabilities, TransitionCounts) {
	let mut counts = TransitionCounts::new();
	let mut previous = None;

	for current in category::tracked(text) {
		if let Some(from) = previous {
			counts.record(from, current);
		}
		previous = Some(current);
	}

	debug!("fitted chain from {} transitions", counts.total());

	(TransitionProbabilities::from_counts(&counts), counts)
}
