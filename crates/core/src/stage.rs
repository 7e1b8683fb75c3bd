//! Extension points of the pick pipeline.
//!
//! A [`Source`] produces the initial stream, each [`Matcher`] filters and
//! decorates it against the query, a [`Renderer`] rewrites the presentation
//! of the materialized list and an [`Action`] runs a side effect on the
//! selection. Every stage receives the run's [`CancelSignal`].

use async_trait::async_trait;

use crate::stream::{self, ItemStream};
use crate::{CancelSignal, Host, Item, Result};

/// Bound shared by all detail payloads.
pub trait Detail: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Detail for T {}

/// Input of one matcher invocation.
pub struct MatchParams<'a, D> {
	pub query: &'a str,
	pub items: ItemStream<'a, D>,
}

/// Input of one renderer invocation: the visible items, mutated in place.
pub struct RenderParams<'a, D> {
	pub items: &'a mut [Item<D>],
}

/// Input of one action invocation.
pub struct InvokeParams<'a, D> {
	/// Item under the cursor, if any.
	pub item: Option<&'a Item<D>>,
	/// Explicitly selected items; `None` when nothing was selected.
	pub selected: Option<&'a [Item<D>]>,
}

impl<'a, D> InvokeParams<'a, D> {
	/// Selected items, falling back to the cursor item.
	pub fn targets(&self) -> Vec<&'a Item<D>> {
		match self.selected {
			Some(selected) => selected.iter().collect(),
			None => self.item.into_iter().collect(),
		}
	}
}

/// Produces the initial item stream.
pub trait Source<D: Detail>: Send + Sync {
	fn collect<'a>(&'a self, host: &'a dyn Host, signal: CancelSignal) -> ItemStream<'a, D>;
}

/// Filters and decorates a stream against a query without reordering it.
pub trait Matcher<D: Detail>: Send + Sync {
	fn match_items<'a>(&'a self, host: &'a dyn Host, params: MatchParams<'a, D>, signal: CancelSignal) -> ItemStream<'a, D>;
}

/// Rewrites labels and decorations of a materialized list in place.
#[async_trait]
pub trait Renderer<D: Detail>: Send + Sync {
	async fn render(&self, host: &dyn Host, params: RenderParams<'_, D>, signal: &CancelSignal) -> Result<()>;
}

/// Performs a side effect on the user's selection.
#[async_trait]
pub trait Action<D: Detail>: Send + Sync {
	async fn invoke(&self, host: &dyn Host, params: InvokeParams<'_, D>, signal: &CancelSignal) -> Result<()>;
}

/// Source over a fixed list of items.
#[derive(Debug, Clone)]
pub struct ListSource<D> {
	items: Vec<Item<D>>,
}

impl<D> ListSource<D> {
	pub fn new(items: Vec<Item<D>>) -> Self {
		Self { items }
	}
}

impl<D: Detail + Clone> Source<D> for ListSource<D> {
	fn collect<'a>(&'a self, _host: &'a dyn Host, signal: CancelSignal) -> ItemStream<'a, D> {
		stream::from_items(signal, self.items.clone())
	}
}
