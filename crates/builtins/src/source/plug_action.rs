use fall_extra_core::stream::{self, ItemStream};
use fall_extra_core::{CancelSignal, Host, Item, ItemIds, Source};

use crate::plug::{PlugActionDetail, PlugNamespace, resolve_actions};

/// Lists the `<Plug>` actions a host plugin currently maps.
///
/// The mapping table is queried on every invocation since it can change
/// between uses.
#[derive(Debug, Clone)]
pub struct PlugActions {
	namespace: PlugNamespace,
}

impl PlugActions {
	pub fn new(namespace: PlugNamespace) -> Self {
		Self { namespace }
	}

	pub fn namespace(&self) -> &PlugNamespace {
		&self.namespace
	}
}

/// Actions of the vim-fern file explorer.
pub fn fern_action() -> PlugActions {
	PlugActions::new(PlugNamespace::fern())
}

/// Actions of the vim-gin git client.
pub fn gin_action() -> PlugActions {
	PlugActions::new(PlugNamespace::gin())
}

impl Source<PlugActionDetail> for PlugActions {
	fn collect<'a>(&'a self, host: &'a dyn Host, signal: CancelSignal) -> ItemStream<'a, PlugActionDetail> {
		let gate = signal.clone();
		stream::deferred(signal, async move {
			let maps: Vec<String> = host.eval_as(&self.namespace.list_expression()).await?;
			gate.check()?;

			let actions = resolve_actions(&self.namespace, &maps)?;
			tracing::debug!(namespace = self.namespace.prefix(), mappings = maps.len(), actions = actions.len(), "plug_actions.resolved");

			let mut ids = ItemIds::new();
			let items = actions
				.into_iter()
				.map(|action| {
					let detail = PlugActionDetail {
						namespace: self.namespace.prefix().to_string(),
						action_key: self.namespace.action_key(&action),
					};
					Item::new(ids.next(), action, detail)
				})
				.collect();
			Ok(items)
		})
	}
}
