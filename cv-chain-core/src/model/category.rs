use std::fmt;

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Category assigned to a single character.
///
/// Only `Vowel` and `Consonant` take part in transitions. `Other` covers
/// every character that is not a letter (digits, whitespace, punctuation,
/// combining marks, letter numbers) and is transparent to the chain: it
/// neither records a transition nor moves the previous-category cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
	/// `a`, `e`, `i`, `o`, `u` in either case.
	Vowel,
	/// Any other letter.
	Consonant,
	/// Not a letter.
	Other,
}

impl CharacterCategory {
	/// Tracked categories in table index order.
	pub const TRACKED: [CharacterCategory; 2] = [Self::Vowel, Self::Consonant];

	/// Returns the table index of a tracked category, `None` for `Other`.
	pub fn index(self) -> Option<usize> {
		match self {
			Self::Vowel => Some(0),
			Self::Consonant => Some(1),
			Self::Other => None,
		}
	}

	/// Whether this category takes part in transitions (`Vowel` or `Consonant`).
	pub fn is_tracked(self) -> bool {
		self != Self::Other
	}
}

impl fmt::Display for CharacterCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Vowel => "Vowel",
			Self::Consonant => "Consonant",
			Self::Other => "Other",
		};
		f.write_str(name)
	}
}

/// Whether `c` is a letter, i.e. its general category is one of `L*`.
///
/// Narrower than `char::is_alphabetic`: letter numbers (`Ⅻ`) and combining
/// vowel signs (Devanagari `ि`) are not letters.
pub fn is_letter(c: char) -> bool {
	matches!(
		get_general_category(c),
		GeneralCategory::UppercaseLetter
			| GeneralCategory::LowercaseLetter
			| GeneralCategory::TitlecaseLetter
			| GeneralCategory::ModifierLetter
			| GeneralCategory::OtherLetter
	)
}

/// Classifies a character.
///
/// - Characters that are not letters (see [`is_letter`]) are `Other`
/// - `a`, `e`, `i`, `o`, `u` in either case are `Vowel`
/// - Every other letter, ASCII or not, is `Consonant`
pub fn classify(c: char) -> CharacterCategory {
	if !is_letter(c) {
		return CharacterCategory::Other;
	}

	match c.to_ascii_lowercase() {
		'a' | 'e' | 'i' | 'o' | 'u' => CharacterCategory::Vowel,
		_ => CharacterCategory::Consonant,
	}
}

/// Iterates the tracked categories of a text in order, skipping `Other`.
pub(crate) fn tracked(text: &str) -> impl Iterator<Item = CharacterCategory> + '_ {
	text.chars().map(classify).filter(|category| category.is_tracked())
}
