//! Error types for the cv-chain-core crate.

/// Conditions under which a driver refuses to fit or score a text.
///
/// Neither is a failure of the chain itself, which is total over any input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
	/// Returned when the text has too few alphabetic characters to form a chain.
	#[error("text must contain at least {min} alphabetic characters, got {found}")]
	InsufficientInput {
		/// Alphabetic characters found.
		found: usize,
		/// Minimum required.
		min: usize,
	},

	/// Returned when letters exist but no transition was recorded.
	#[error("no character transitions found in text")]
	NoTransitionsObserved,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_insufficient_input() {
		let e = ChainError::InsufficientInput { found: 1, min: 2 };
		assert_eq!(e.to_string(), "text must contain at least 2 alphabetic characters, got 1");
	}

	#[test]
	fn error_no_transitions() {
		assert_eq!(ChainError::NoTransitionsObserved.to_string(), "no character transitions found in text");
	}

	#[test]
	fn error_is_std_error() {
		fn assert_impl<T: std::error::Error + Send + Sync>() {}
		assert_impl::<ChainError>();
	}
}
