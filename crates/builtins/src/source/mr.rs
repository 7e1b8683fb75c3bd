use fall_extra_core::stream::{self, ItemStream};
use fall_extra_core::{CancelSignal, Host, Item, ItemIds, Source};

use crate::mr::{MrDetail, MrKind};

/// Paths recorded by vim-mr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mr {
	kind: MrKind,
}

impl Mr {
	pub fn new(kind: MrKind) -> Self {
		Self { kind }
	}

	pub fn kind(&self) -> MrKind {
		self.kind
	}
}

/// Source over the `kind` list; `None` selects most recently used files.
pub fn mr(kind: Option<MrKind>) -> Mr {
	Mr::new(kind.unwrap_or_default())
}

impl Source<MrDetail> for Mr {
	fn collect<'a>(&'a self, host: &'a dyn Host, signal: CancelSignal) -> ItemStream<'a, MrDetail> {
		let kind = self.kind;
		stream::deferred(signal, async move {
			let paths: Vec<String> = host.dispatch_as("mr", &kind.list_method(), Vec::new()).await?;
			tracing::debug!(%kind, paths = paths.len(), "mr.listed");

			let mut ids = ItemIds::new();
			Ok(paths
				.into_iter()
				.map(|path| Item::new(ids.next(), path.clone(), MrDetail { path, kind }))
				.collect())
		})
	}
}
