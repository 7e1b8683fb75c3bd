//! Pick-list rows and their byte-indexed highlight regions.

use serde::{Deserialize, Serialize};

/// Highlight region over an item label.
///
/// `column` is 1-based and both fields count bytes of the current label, so
/// regions stay correct for multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decoration {
	pub column: usize,
	pub length: usize,
	/// Highlight group; `None` lets the host pick its match highlight.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub highlight: Option<String>,
}

impl Decoration {
	pub const fn new(column: usize, length: usize) -> Self {
		Self {
			column,
			length,
			highlight: None,
		}
	}

	pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
		self.highlight = Some(highlight.into());
		self
	}

	/// Same region moved `offset` bytes to the right.
	#[must_use]
	pub fn shifted(&self, offset: usize) -> Self {
		Self {
			column: self.column + offset,
			length: self.length,
			highlight: self.highlight.clone(),
		}
	}

	/// Byte index one past the region end, 0-based.
	pub const fn end(&self) -> usize {
		self.column.saturating_sub(1) + self.length
	}
}

/// One candidate row flowing through the pick pipeline.
///
/// `D` is the stage-specific detail payload (file path, action key, ...).
/// Stages that do not understand it carry it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<D> {
	pub id: u64,
	pub value: String,
	pub label: String,
	#[serde(default)]
	pub decorations: Vec<Decoration>,
	pub detail: D,
}

impl<D> Item<D> {
	/// Creates an undecorated item whose label equals its value.
	pub fn new(id: u64, value: impl Into<String>, detail: D) -> Self {
		let value = value.into();
		Self {
			id,
			label: value.clone(),
			value,
			decorations: Vec::new(),
			detail,
		}
	}

	#[must_use]
	pub fn with_decorations(mut self, decorations: impl IntoIterator<Item = Decoration>) -> Self {
		self.decorations = decorations.into_iter().collect();
		self
	}

	/// Prepends `prefix` to the label and shifts every decoration by its byte
	/// length. Decoration order and lengths are preserved.
	pub fn prepend_label(&mut self, prefix: &str) {
		let offset = prefix.len();
		let decorations = self.decorations.iter().map(|d| d.shifted(offset)).collect();
		self.label.insert_str(0, prefix);
		self.decorations = decorations;
	}

	/// True when every decoration lies within the label bytes.
	pub fn decorations_in_bounds(&self) -> bool {
		self.decorations.iter().all(|d| d.column >= 1 && d.end() <= self.label.len())
	}
}

/// Sequential id generator for items produced by one source invocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemIds(u64);

impl ItemIds {
	#[must_use]
	pub const fn new() -> Self {
		Self(0)
	}

	/// Returns the next id and advances the counter.
	#[allow(clippy::should_implement_trait, reason = "infinite counter; an Iterator would wrap every id in Option")]
	pub fn next(&mut self) -> u64 {
		let id = self.0;
		self.0 += 1;
		id
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn label_starts_as_value() {
		let item = Item::new(3, "src/main.rs", ());
		assert_eq!(item.label, "src/main.rs");
		assert!(item.decorations.is_empty());
	}

	#[test]
	fn prepend_label_shifts_by_bytes_not_chars() {
		let mut item = Item::new(0, "main.rs", ()).with_decorations([Decoration::new(1, 4), Decoration::new(6, 2).with_highlight("Special")]);
		item.prepend_label("\u{e7a8}  ");

		assert_eq!(item.label, "\u{e7a8}  main.rs");
		assert_eq!(
			item.decorations,
			vec![Decoration::new(6, 4), Decoration::new(11, 2).with_highlight("Special")]
		);
		assert!(item.decorations_in_bounds());
	}

	#[test]
	fn out_of_bounds_decoration_is_detected() {
		let item = Item::new(0, "abc", ()).with_decorations([Decoration::new(2, 3)]);
		assert!(!item.decorations_in_bounds());
	}

	#[test]
	fn ids_are_sequential() {
		let mut ids = ItemIds::new();
		assert_eq!((ids.next(), ids.next(), ids.next()), (0, 1, 2));
	}
}
