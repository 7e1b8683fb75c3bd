//! Multi-term regular expression matching.
//!
//! The query is split into whitespace-delimited terms, each term is turned
//! into a pattern by a [`QueryTransform`], and an item survives only when
//! every pattern matches its value. The first match of each pattern becomes
//! a decoration appended to the item's existing ones.

use fall_extra_core::query::split_terms;
use fall_extra_core::stream::{self as item_stream, ItemStream};
use fall_extra_core::{CancelSignal, Decoration, Detail, Error, Host, MatchParams, Matcher, Result};
use futures::future::{self, try_join_all};
use futures::stream::{self, StreamExt, TryStreamExt};
use regex::Regex;

mod transform;


pub use transform::{Kensaku, Literal, QueryTransform, Verbatim};

/// Conjunctive term matcher parameterized by its term transform.
#[derive(Debug, Clone, Default)]
pub struct TermMatcher<T> {
	transform: T,
}

impl<T: QueryTransform> TermMatcher<T> {
	pub fn new(transform: T) -> Self {
		Self { transform }
	}

	/// Transforms and compiles every query term, in query order.
	pub async fn patterns(&self, host: &dyn Host, query: &str, signal: &CancelSignal) -> Result<Vec<Regex>> {
		let terms = split_terms(query);
		let sources = try_join_all(terms.iter().map(|term| async move {
			signal.check()?;
			self.transform.transform(host, term).await
		}))
		.await?;
		signal.check()?;

		terms
			.iter()
			.zip(sources)
			.map(|(term, source)| {
				Regex::new(&source).map_err(|source| Error::InvalidPattern {
					term: term.to_string(),
					source,
				})
			})
			.collect()
	}
}

/// Matcher expanding romaji terms through vim-kensaku.
pub fn kensaku() -> TermMatcher<Kensaku> {
	TermMatcher::new(Kensaku::default())
}

/// Matcher treating each term as literal text.
pub fn literal() -> TermMatcher<Literal> {
	TermMatcher::new(Literal)
}

/// Matcher treating each term as a regular expression.
pub fn regexp() -> TermMatcher<Verbatim> {
	TermMatcher::new(Verbatim)
}

/// Decorations for the first match of every pattern in `value`, or `None`
/// when any pattern fails to match.
pub fn match_decorations(patterns: &[Regex], value: &str) -> Option<Vec<Decoration>> {
	patterns
		.iter()
		.map(|pattern| pattern.find(value).map(|m| Decoration::new(m.start() + 1, m.len())))
		.collect()
}

impl<D: Detail, T: QueryTransform> Matcher<D> for TermMatcher<T> {
	fn match_items<'a>(&'a self, host: &'a dyn Host, params: MatchParams<'a, D>, signal: CancelSignal) -> ItemStream<'a, D> {
		let MatchParams { query, items } = params;
		let gate = signal.clone();
		let matched = stream::once(async move {
			match self.patterns(host, query, &gate).await {
				Ok(patterns) => {
					tracing::debug!(terms = patterns.len(), "matcher.terms");
					items
						.try_filter_map(move |mut item| {
							let matched = match_decorations(&patterns, &item.value).map(|decorations| {
								item.decorations.extend(decorations);
								item
							});
							future::ready(Ok(matched))
						})
						.left_stream()
				}
				Err(err) => stream::iter([Err(err)]).right_stream(),
			}
		})
		.flatten()
		.boxed();
		item_stream::guarded(signal, matched)
	}
}
