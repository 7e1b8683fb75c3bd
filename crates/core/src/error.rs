//! Error taxonomy shared by every pipeline stage.

use thiserror::Error;

/// Errors that abort a stage invocation.
///
/// Stages never degrade per item: any of these terminates the current
/// source, matcher, renderer or action call as a whole.
#[derive(Debug, Error)]
pub enum Error {
	/// The run-scoped cancel signal fired. Not a user-visible failure.
	#[error("operation cancelled")]
	Cancelled,

	/// A host call (eval, function call, plugin dispatch, key feed) failed or
	/// returned a value of the wrong shape.
	#[error("{operation} failed: {message}")]
	Collaborator {
		/// Short description of the host call, e.g. `dispatch kensaku.query`.
		operation: String,
		/// Failure reported by the host or the decoder.
		message: String,
	},

	/// A name passed a coarse filter but not the fine-grained capture grammar.
	#[error("{name:?} does not follow the grammar {grammar}")]
	GrammarViolation {
		/// The offending raw name.
		name: String,
		/// The capture pattern it was checked against.
		grammar: String,
	},

	/// A transformed query term is not a valid regular expression.
	#[error("search failed: term {term:?} produced an invalid pattern")]
	InvalidPattern {
		/// The raw query term before transformation.
		term: String,
		/// Compiler diagnostic.
		#[source]
		source: regex::Error,
	},

	/// An action received an item whose detail belongs to another namespace.
	#[error("expected a {expected} item, got a {found} item")]
	DetailMismatch {
		/// Namespace the action operates on.
		expected: String,
		/// Namespace carried by the item.
		found: String,
	},

	/// No action is registered under the requested name.
	#[error("unknown action: {0}")]
	UnknownAction(String),
}

impl Error {
	/// Builds a [`Error::Collaborator`] from any displayable failure.
	pub fn collaborator(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
		Self::Collaborator {
			operation: operation.into(),
			message: message.to_string(),
		}
	}

	/// Returns true for the silent cancellation variant.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
