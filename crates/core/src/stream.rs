//! Lazy, pull-based item streams with cooperative cancellation.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};

use crate::{CancelSignal, Error, Item, Result};

/// Finite, non-restartable sequence of items produced by a stage.
///
/// The first `Err` terminates the stream; consumers should stop pulling.
pub type ItemStream<'a, D> = BoxStream<'a, Result<Item<D>>>;

/// Wraps `inner` so the signal is checked before every pull and after every
/// pulled item.
///
/// Once cancellation is observed the stream yields a single
/// [`Error::Cancelled`](crate::Error::Cancelled) and ends; the pending item is
/// dropped rather than emitted.
pub fn guarded<'a, D: Send + 'a>(signal: CancelSignal, inner: ItemStream<'a, D>) -> ItemStream<'a, D> {
	stream::unfold(Some(inner), move |state| {
		let signal = signal.clone();
		async move {
			let mut inner = state?;
			if let Err(err) = signal.check() {
				return Some((Err(err), None));
			}
			match inner.next().await? {
				Ok(item) => match signal.check() {
					Ok(()) => Some((Ok(item), Some(inner))),
					Err(err) => Some((Err(err), None)),
				},
				Err(err) => Some((Err(err), None)),
			}
		}
	})
	.boxed()
}

/// Lazy stream over the items produced by one async fetch.
///
/// Nothing runs until the first pull. The fetch itself is skipped when the
/// signal has already fired.
pub fn deferred<'a, D, F>(signal: CancelSignal, fetch: F) -> ItemStream<'a, D>
where
	D: Send + 'a,
	F: Future<Output = Result<Vec<Item<D>>>> + Send + 'a,
{
	let gate = signal.clone();
	let items = stream::once(async move {
		gate.check()?;
		fetch.await
	})
	.map(|batch| match batch {
		Ok(items) => stream::iter(items.into_iter().map(Ok::<_, Error>)).left_stream(),
		Err(err) => stream::iter([Err(err)]).right_stream(),
	})
	.flatten()
	.boxed();
	guarded(signal, items)
}

/// Stream over already materialized items.
pub fn from_items<'a, D: Send + 'a>(signal: CancelSignal, items: Vec<Item<D>>) -> ItemStream<'a, D> {
	guarded(signal, stream::iter(items.into_iter().map(Ok)).boxed())
}

/// Drains a stream, stopping at the first error.
pub async fn collect<D>(mut items: ItemStream<'_, D>) -> Result<Vec<Item<D>>> {
	let mut out = Vec::new();
	while let Some(item) = items.next().await {
		out.push(item?);
	}
	Ok(out)
}
