//! Shared types for the vim-mr integration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::renderer::PathDetail;

/// Which vim-mr list to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MrKind {
	/// Most recently used files.
	#[default]
	Mru,
	/// Most recently written files.
	Mrw,
	/// Most recent repositories.
	Mrr,
	/// Most recent directories.
	Mrd,
}

impl MrKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Mru => "mru",
			Self::Mrw => "mrw",
			Self::Mrr => "mrr",
			Self::Mrd => "mrd",
		}
	}

	/// Plugin method listing this kind's paths.
	pub fn list_method(self) -> String {
		format!("{}:list", self.as_str())
	}

	/// Host function removing a path from this kind's list.
	pub fn delete_function(self) -> String {
		format!("mr#{}#delete", self.as_str())
	}
}

impl fmt::Display for MrKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Detail carried by MR items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrDetail {
	pub path: String,
	pub kind: MrKind,
}

impl AsRef<MrDetail> for MrDetail {
	fn as_ref(&self) -> &MrDetail {
		self
	}
}

impl PathDetail for MrDetail {
	fn path(&self) -> &str {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn host_names_follow_kind() {
		assert_eq!(MrKind::Mrw.list_method(), "mrw:list");
		assert_eq!(MrKind::Mrd.delete_function(), "mr#mrd#delete");
		assert_eq!(MrKind::default(), MrKind::Mru);
	}
}
