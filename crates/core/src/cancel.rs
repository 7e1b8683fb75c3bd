use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Run-scoped cancellation signal threaded through every pipeline stage.
///
/// Clones share the same underlying token, so cancelling any clone cancels
/// the whole run.
#[derive(Debug, Default, Clone)]
pub struct CancelSignal {
	token: CancellationToken,
}

impl CancelSignal {
	/// Creates a new, untriggered signal.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true when cancellation is requested.
	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	/// Requests cancellation. Idempotent.
	pub fn cancel(&self) {
		self.token.cancel();
	}

	/// Fails with [`Error::Cancelled`] once cancellation is requested.
	pub fn check(&self) -> Result<()> {
		if self.token.is_cancelled() { Err(Error::Cancelled) } else { Ok(()) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn check_fails_after_cancel() {
		let signal = CancelSignal::new();
		assert!(signal.check().is_ok());
		signal.clone().cancel();
		assert!(matches!(signal.check(), Err(Error::Cancelled)));
	}

	#[test]
	fn clones_share_one_token() {
		let signal = CancelSignal::new();
		let other = signal.clone();
		assert!(!other.is_cancelled());
		signal.cancel();
		assert!(other.is_cancelled());
		assert!(other.check().unwrap_err().is_cancelled());
	}
}
