//! Pipeline runner wiring a source, matchers, renderers and actions.

use indexmap::IndexMap;

use crate::stage::{Action, Detail, InvokeParams, MatchParams, Matcher, RenderParams, Renderer, Source};
use crate::stream::{self, ItemStream};
use crate::{CancelSignal, Error, Host, Item, Result};


/// One configured pick pipeline.
///
/// Matchers are chained in registration order, each consuming the previous
/// one's stream. The first registered action is the default unless
/// [`Picker::default_action`] overrides it.
pub struct Picker<D: Detail> {
	source: Box<dyn Source<D>>,
	matchers: Vec<Box<dyn Matcher<D>>>,
	renderers: Vec<Box<dyn Renderer<D>>>,
	actions: IndexMap<String, Box<dyn Action<D>>>,
	default_action: Option<String>,
}

impl<D: Detail> Picker<D> {
	pub fn new(source: impl Source<D> + 'static) -> Self {
		Self {
			source: Box::new(source),
			matchers: Vec::new(),
			renderers: Vec::new(),
			actions: IndexMap::new(),
			default_action: None,
		}
	}

	#[must_use]
	pub fn matcher(mut self, matcher: impl Matcher<D> + 'static) -> Self {
		self.matchers.push(Box::new(matcher));
		self
	}

	#[must_use]
	pub fn renderer(mut self, renderer: impl Renderer<D> + 'static) -> Self {
		self.renderers.push(Box::new(renderer));
		self
	}

	#[must_use]
	pub fn renderer_boxed(mut self, renderer: Box<dyn Renderer<D>>) -> Self {
		self.renderers.push(renderer);
		self
	}

	#[must_use]
	pub fn action(self, name: impl Into<String>, action: impl Action<D> + 'static) -> Self {
		self.actions([(name.into(), Box::new(action) as Box<dyn Action<D>>)])
	}

	/// Registers a table of named actions, replacing same-named entries.
	#[must_use]
	pub fn actions(mut self, actions: impl IntoIterator<Item = (String, Box<dyn Action<D>>)>) -> Self {
		self.actions.extend(actions);
		self
	}

	#[must_use]
	pub fn default_action(mut self, name: impl Into<String>) -> Self {
		self.default_action = Some(name.into());
		self
	}

	/// Registered action names in registration order.
	pub fn action_names(&self) -> impl Iterator<Item = &str> {
		self.actions.keys().map(String::as_str)
	}

	fn default_action_name(&self) -> Option<&str> {
		self.default_action.as_deref().or_else(|| self.actions.keys().next().map(String::as_str))
	}

	/// Drains the source.
	pub async fn collect(&self, host: &dyn Host, signal: &CancelSignal) -> Result<Vec<Item<D>>> {
		let items = stream::collect(self.source.collect(host, signal.clone())).await?;
		tracing::debug!(items = items.len(), "picker.collect");
		Ok(items)
	}

	/// Runs collected items through every matcher.
	pub async fn filter(&self, host: &dyn Host, items: Vec<Item<D>>, query: &str, signal: &CancelSignal) -> Result<Vec<Item<D>>> {
		let total = items.len();
		let matched = stream::collect(self.chain(host, stream::from_items(signal.clone(), items), query, signal)).await?;
		tracing::debug!(total, matched = matched.len(), "picker.filter");
		Ok(matched)
	}

	/// Applies every renderer, in registration order, to the visible items.
	pub async fn render(&self, host: &dyn Host, items: &mut [Item<D>], signal: &CancelSignal) -> Result<()> {
		for renderer in &self.renderers {
			signal.check()?;
			renderer.render(host, RenderParams { items: &mut *items }, signal).await?;
		}
		Ok(())
	}

	/// Streams the source straight through the matchers and renders the result.
	pub async fn run(&self, host: &dyn Host, query: &str, signal: &CancelSignal) -> Result<Vec<Item<D>>> {
		let source = self.source.collect(host, signal.clone());
		let mut items = stream::collect(self.chain(host, source, query, signal)).await?;
		self.render(host, &mut items, signal).await?;
		tracing::debug!(items = items.len(), "picker.run");
		Ok(items)
	}

	/// Invokes `name`, or the default action when `name` is `None`.
	pub async fn invoke(
		&self,
		host: &dyn Host,
		name: Option<&str>,
		item: Option<&Item<D>>,
		selected: Option<&[Item<D>]>,
		signal: &CancelSignal,
	) -> Result<()> {
		let name = name.or_else(|| self.default_action_name()).ok_or_else(|| Error::UnknownAction("<default>".to_string()))?;
		let action = self.actions.get(name).ok_or_else(|| Error::UnknownAction(name.to_string()))?;
		signal.check()?;
		tracing::debug!(action = name, selected = selected.map_or(0, <[_]>::len), "picker.invoke");
		action.invoke(host, InvokeParams { item, selected }, signal).await
	}

	fn chain<'a>(&'a self, host: &'a dyn Host, items: ItemStream<'a, D>, query: &'a str, signal: &CancelSignal) -> ItemStream<'a, D> {
		self.matchers.iter().fold(items, |items, matcher| {
			matcher.match_items(host, MatchParams { query, items }, signal.clone())
		})
	}
}
