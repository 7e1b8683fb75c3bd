//! `<Plug>` action namespaces exposed by host plugins such as fern and gin.
//!
//! A plugin publishes each action as a mapping named
//! `<Plug>(<prefix>-action-<action>)`. An action ending in [`DEFAULT_MARKER`]
//! is the default-invocation variant of the bare action and is subsumed by
//! it when both are listed.

use fall_extra_core::{Error, RawKeys, Result};
use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Trailing marker of default-invocation action variants.
pub const DEFAULT_MARKER: char = '=';

/// Mapping-name prefix of one host plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlugNamespace {
	prefix: String,
}

impl PlugNamespace {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self { prefix: prefix.into() }
	}

	pub fn fern() -> Self {
		Self::new("fern")
	}

	pub fn gin() -> Self {
		Self::new("gin")
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Leading text shared by every mapping of this namespace.
	pub fn mapping_prefix(&self) -> String {
		format!("<Plug>({}-action-", self.prefix)
	}

	/// Host expression listing the left-hand sides of this namespace's mappings.
	pub fn list_expression(&self) -> String {
		format!(
			"maplist()->filter({{_, v -> stridx(v.lhs, '{}') == 0}})->map({{_, v -> v.lhs}})",
			self.mapping_prefix()
		)
	}

	/// Capture pattern extracting `<action>` from a mapping name.
	pub fn grammar(&self) -> Result<Regex> {
		let source = format!(r"^{}(.*)\)", regex::escape(&self.mapping_prefix()));
		Regex::new(&source).map_err(|error| Error::GrammarViolation {
			name: self.prefix.clone(),
			grammar: format!("{source} ({error})"),
		})
	}

	/// Key notation that triggers `action`.
	pub fn action_key(&self, action: &str) -> RawKeys {
		RawKeys::new(format!(r"\<Plug>({}-action-{action})", self.prefix))
	}
}

/// Detail carried by plug action items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugActionDetail {
	/// Prefix of the namespace the action belongs to.
	pub namespace: String,
	pub action_key: RawKeys,
}

impl AsRef<PlugActionDetail> for PlugActionDetail {
	fn as_ref(&self) -> &PlugActionDetail {
		self
	}
}

/// Derives the de-duplicated action set from raw mapping names.
///
/// Actions keep first-occurrence order. A marked `name=` is dropped when the
/// bare `name` is listed too, and kept as its own action otherwise. A name
/// outside the namespace grammar is a [`Error::GrammarViolation`].
pub fn resolve_actions<S: AsRef<str>>(namespace: &PlugNamespace, names: &[S]) -> Result<Vec<String>> {
	let grammar = namespace.grammar()?;
	let all = names
		.iter()
		.map(|name| {
			let name = name.as_ref();
			grammar
				.captures(name)
				.and_then(|caps| caps.get(1))
				.map(|action| action.as_str().to_string())
				.ok_or_else(|| Error::GrammarViolation {
					name: name.to_string(),
					grammar: grammar.as_str().to_string(),
				})
		})
		.collect::<Result<Vec<_>>>()?;

	let mut actions: IndexSet<String> = all.iter().cloned().collect();
	for marked in &all {
		if let Some(bare) = marked.strip_suffix(DEFAULT_MARKER)
			&& actions.contains(bare)
		{
			actions.shift_remove(marked);
		}
	}
	Ok(actions.into_iter().collect())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn names(ns: &PlugNamespace, actions: &[&str]) -> Vec<String> {
		actions.iter().map(|a| format!("{}{a})", ns.mapping_prefix())).collect()
	}

	#[test]
	fn marked_variant_is_subsumed_by_bare_name() {
		let ns = PlugNamespace::fern();
		let actions = resolve_actions(&ns, &names(&ns, &["open", "open=", "close"])).unwrap();
		assert_eq!(actions, vec!["open", "close"]);
	}

	#[test]
	fn lone_marked_variant_is_kept() {
		let ns = PlugNamespace::gin();
		let actions = resolve_actions(&ns, &names(&ns, &["preview="])).unwrap();
		assert_eq!(actions, vec!["preview="]);
	}

	#[test]
	fn marked_before_bare_is_still_subsumed() {
		let ns = PlugNamespace::fern();
		let actions = resolve_actions(&ns, &names(&ns, &["mark=", "open", "mark", "open"])).unwrap();
		assert_eq!(actions, vec!["open", "mark"]);
	}

	#[rstest]
	#[case("fern", "open:left", "<Plug>(fern-action-open:left)")]
	#[case("gin", "diff:smart:vsplit", "<Plug>(gin-action-diff:smart:vsplit)")]
	#[case("fern", "yank:label=", "<Plug>(fern-action-yank:label=)")]
	fn extracts_action_names(#[case] prefix: &str, #[case] action: &str, #[case] raw: &str) {
		let ns = PlugNamespace::new(prefix);
		assert_eq!(resolve_actions(&ns, &[raw]).unwrap(), vec![action]);
	}

	#[test]
	fn foreign_name_is_grammar_violation() {
		let ns = PlugNamespace::fern();
		let err = resolve_actions(&ns, &["<Plug>(gin-action-open)"]).unwrap_err();
		assert!(matches!(err, Error::GrammarViolation { ref name, .. } if name == "<Plug>(gin-action-open)"));
	}

	#[test]
	fn prefix_is_matched_literally() {
		let ns = PlugNamespace::new("a.b");
		assert!(resolve_actions(&ns, &["<Plug>(aXb-action-open)"]).is_err());
		assert_eq!(resolve_actions(&ns, &["<Plug>(a.b-action-open)"]).unwrap(), vec!["open"]);
	}

	#[test]
	fn grammar_escapes_the_prefix() {
		let grammar = PlugNamespace::new("a.b(c)").grammar().unwrap();
		assert!(grammar.is_match("<Plug>(a.b(c)-action-open)"));
		assert!(!grammar.is_match("<Plug>(aXb(c)-action-open)"));
	}

	#[test]
	fn list_expression_filters_by_mapping_prefix() {
		assert_eq!(
			PlugNamespace::fern().list_expression(),
			"maplist()->filter({_, v -> stridx(v.lhs, '<Plug>(fern-action-') == 0})->map({_, v -> v.lhs})"
		);
	}

	#[test]
	fn action_key_uses_key_notation() {
		assert_eq!(PlugNamespace::gin().action_key("edit").as_str(), r"\<Plug>(gin-action-edit)");
	}

	proptest! {
		#[test]
		fn resolution_is_deterministic_and_duplicate_free(actions in prop::collection::vec("[a-z:]{1,6}=?", 0..12)) {
			let ns = PlugNamespace::fern();
			let raw = names(&ns, &actions.iter().map(String::as_str).collect::<Vec<_>>());
			let first = resolve_actions(&ns, &raw).unwrap();
			prop_assert_eq!(&first, &resolve_actions(&ns, &raw).unwrap());

			let unique: IndexSet<&String> = first.iter().collect();
			prop_assert_eq!(unique.len(), first.len());
			for action in &first {
				if let Some(bare) = action.strip_suffix(DEFAULT_MARKER) {
					prop_assert!(!first.iter().any(|a| a == bare));
				}
			}
		}
	}
}
