//! Label prefix injection with decoration offset recomputation.

use async_trait::async_trait;

use crate::host::{HostCall, decode};
use crate::stage::{Detail, RenderParams, Renderer};
use crate::{CancelSignal, Error, Host, Item, Result};

/// Separator placed between a looked-up prefix and the original label.
pub const DEFAULT_SEPARATOR: &str = "  ";

/// Prepends `<lookup><separator>` to every item label, zipping lookups to
/// items in order.
///
/// The signal is checked between items, so each item is either fully
/// prefixed and shifted or left untouched.
pub fn prefix_items<D>(items: &mut [Item<D>], lookups: Vec<String>, separator: &str, signal: &CancelSignal) -> Result<()> {
	if lookups.len() != items.len() {
		return Err(Error::collaborator(
			"prefix lookup",
			format!("expected {} results, got {}", items.len(), lookups.len()),
		));
	}
	for (item, lookup) in items.iter_mut().zip(lookups) {
		signal.check()?;
		item.prepend_label(&format!("{lookup}{separator}"));
	}
	Ok(())
}

/// Builds the host call that resolves the label prefix of one item.
pub trait PrefixLookup<D>: Send + Sync {
	fn lookup(&self, item: &Item<D>) -> HostCall;
}

/// Renderer that batch-resolves one prefix per item and injects it.
///
/// A failed lookup aborts the whole invocation before any label changes.
#[derive(Debug, Clone)]
pub struct PrefixRenderer<L> {
	lookup: L,
	separator: String,
}

impl<L> PrefixRenderer<L> {
	pub fn new(lookup: L) -> Self {
		Self {
			lookup,
			separator: DEFAULT_SEPARATOR.to_string(),
		}
	}

	#[must_use]
	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}
}

#[async_trait]
impl<D, L> Renderer<D> for PrefixRenderer<L>
where
	D: Detail,
	L: PrefixLookup<D>,
{
	async fn render(&self, host: &dyn Host, params: RenderParams<'_, D>, signal: &CancelSignal) -> Result<()> {
		let calls: Vec<HostCall> = params.items.iter().map(|item| self.lookup.lookup(item)).collect();
		signal.check()?;
		let operation = calls.first().map(|c| c.function.clone()).unwrap_or_default();
		let values = host.batch(calls).await?;
		signal.check()?;

		let prefixes = values
			.into_iter()
			.map(|value| decode::<String>(&operation, value))
			.collect::<Result<Vec<_>>>()?;
		tracing::debug!(items = prefixes.len(), "renderer.prefix");
		prefix_items(params.items, prefixes, &self.separator, signal)
	}
}
