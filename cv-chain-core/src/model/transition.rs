use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::CharacterCategory;

/// One table row as a `{ "vowel": _, "consonant": _ }` map.
struct Row<'a, T>(&'a [T; 2]);

impl<T: Serialize> Serialize for Row<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(2))?;
		for (to, value) in CharacterCategory::TRACKED.iter().zip(self.0) {
			map.serialize_entry(to, value)?;
		}
		map.end()
	}
}

/// Serializes a 2x2 table as nested maps keyed by source, then target category.
fn serialize_table<T: Serialize, S: Serializer>(table: &[[T; 2]; 2], serializer: S) -> Result<S::Ok, S::Error> {
	let mut map = serializer.serialize_map(Some(2))?;
	for (from, row) in CharacterCategory::TRACKED.iter().zip(table) {
		map.serialize_entry(from, &Row(row))?;
	}
	map.end()
}

/// Observed transition counts between tracked categories.
///
/// A 2x2 table indexed `[from][to]` in `CharacterCategory::TRACKED` order.
///
/// # Invariants
/// - Created zeroed and only mutated by the fitting pass
/// - `Other` is never a source or target; accessors return 0 for it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionCounts {
	counts: [[usize; 2]; 2],
}

impl TransitionCounts {
	/// Creates an all-zero table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one `from -> to` transition.
	///
	/// Untracked categories are ignored.
	pub(crate) fn record(&mut self, from: CharacterCategory, to: CharacterCategory) {
		if let (Some(i), Some(j)) = (from.index(), to.index()) {
			self.counts[i][j] += 1;
		}
	}

	/// Number of observed `from -> to` transitions.
	pub fn get(&self, from: CharacterCategory, to: CharacterCategory) -> usize {
		match (from.index(), to.index()) {
			(Some(i), Some(j)) => self.counts[i][j],
			_ => 0,
		}
	}

	/// Number of transitions leaving `from`.
	pub fn row_total(&self, from: CharacterCategory) -> usize {
		from.index().map_or(0, |i| self.counts[i].iter().sum())
	}

	/// Sum of all four cells.
	pub fn total(&self) -> usize {
		self.counts.iter().flatten().sum()
	}
}

impl Serialize for TransitionCounts {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_table(&self.counts, serializer)
	}
}

/// Row-normalized transition probabilities.
///
/// Each row sums to 1.0 when its source category had at least one outgoing
/// transition. A source with no data keeps both cells at 0.0, which is a
/// "no data" marker and not a uniform prior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionProbabilities {
	probs: [[f64; 2]; 2],
}

impl TransitionProbabilities {
	/// Normalizes each row of `counts` by its total.
	pub fn from_counts(counts: &TransitionCounts) -> Self {
		let mut probs = [[0.0; 2]; 2];
		for (row, counted) in probs.iter_mut().zip(counts.counts.iter()) {
			let total: usize = counted.iter().sum();
			if total == 0 {
				continue;
			}
			for (p, &count) in row.iter_mut().zip(counted.iter()) {
				*p = count as f64 / total as f64;
			}
		}
		Self { probs }
	}

	/// Probability of moving from `from` to `to`.
	pub fn prob(&self, from: CharacterCategory, to: CharacterCategory) -> f64 {
		match (from.index(), to.index()) {
			(Some(i), Some(j)) => self.probs[i][j],
			_ => 0.0,
		}
	}

	/// Returns `[P(from -> Vowel), P(from -> Consonant)]`.
	pub fn row(&self, from: CharacterCategory) -> [f64; 2] {
		from.index().map_or([0.0; 2], |i| self.probs[i])
	}

	/// Whether the row for `from` was fitted from at least one transition.
	pub fn has_data(&self, from: CharacterCategory) -> bool {
		self.row(from).iter().sum::<f64>() > 0.0
	}

	/// Most likely category to follow `from`.
	///
	/// Ties (including an empty row) resolve to `Vowel`.
	pub fn most_likely(&self, from: CharacterCategory) -> CharacterCategory {
		let [vowel, consonant] = self.row(from);
		if vowel >= consonant {
			CharacterCategory::Vowel
		} else {
			CharacterCategory::Consonant
		}
	}
}

impl Serialize for TransitionProbabilities {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_table(&self.probs, serializer)
	}
}
