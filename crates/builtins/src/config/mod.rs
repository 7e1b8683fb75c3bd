//! Extension configuration.
//!
//! Configuration is written in TOML. Every section and field is optional:
//!
//! ```toml
//! [mr]
//! kind = "mrw"            # mru | mrw | mrr | mrd
//!
//! [icons]
//! provider = "nerdfont"   # nerdfont | devicons | nvim-web-devicons
//! separator = "  "
//!
//! [kensaku]
//! plugin = "kensaku"
//! method = "query"
//! ```

use std::path::Path;
use std::str::FromStr;

use fall_extra_core::adjust::{DEFAULT_SEPARATOR, PrefixRenderer};
use fall_extra_core::{Detail, Renderer};
use serde::{Deserialize, Serialize};

mod error;

pub use error::{ConfigError, Result};

use crate::matcher::{Kensaku, TermMatcher};
use crate::mr::MrKind;
use crate::renderer::{Devicons, Nerdfont, NvimWebDevicons, PathDetail};
use crate::source::Mr;

/// Top-level configuration of the bundled extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtrasConfig {
	pub mr: MrConfig,
	pub icons: IconsConfig,
	pub kensaku: KensakuConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MrConfig {
	pub kind: MrKind,
}

/// Icon backend used by the file renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconProvider {
	#[default]
	Nerdfont,
	Devicons,
	NvimWebDevicons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsConfig {
	pub provider: IconProvider,
	pub separator: String,
}

impl Default for IconsConfig {
	fn default() -> Self {
		Self {
			provider: IconProvider::default(),
			separator: DEFAULT_SEPARATOR.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KensakuConfig {
	pub plugin: String,
	pub method: String,
}

impl Default for KensakuConfig {
	fn default() -> Self {
		Self {
			plugin: "kensaku".to_string(),
			method: "query".to_string(),
		}
	}
}

impl ExtrasConfig {
	/// Reads and validates a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config: Self = text.parse()?;
		tracing::debug!(path = %path.display(), "config.loaded");
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.icons.separator.contains(['\n', '\r']) {
			return Err(ConfigError::InvalidValue {
				field: "icons.separator",
				reason: "must be a single line".to_string(),
			});
		}
		for (field, value) in [("kensaku.plugin", &self.kensaku.plugin), ("kensaku.method", &self.kensaku.method)] {
			if value.trim().is_empty() {
				return Err(ConfigError::InvalidValue {
					field,
					reason: "must not be empty".to_string(),
				});
			}
		}
		Ok(())
	}

	pub fn mr_source(&self) -> Mr {
		Mr::new(self.mr.kind)
	}

	pub fn kensaku_matcher(&self) -> TermMatcher<Kensaku> {
		TermMatcher::new(Kensaku::new(&self.kensaku.plugin, &self.kensaku.method))
	}

	/// File icon renderer for the configured provider and separator.
	pub fn icon_renderer<D: Detail + PathDetail>(&self) -> Box<dyn Renderer<D>> {
		let separator = self.icons.separator.clone();
		match self.icons.provider {
			IconProvider::Nerdfont => Box::new(PrefixRenderer::new(Nerdfont).with_separator(separator)),
			IconProvider::Devicons => Box::new(PrefixRenderer::new(Devicons).with_separator(separator)),
			IconProvider::NvimWebDevicons => Box::new(PrefixRenderer::new(NvimWebDevicons).with_separator(separator)),
		}
	}
}

impl FromStr for ExtrasConfig {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		let config: Self = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}
}
