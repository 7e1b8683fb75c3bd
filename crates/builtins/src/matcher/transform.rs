use async_trait::async_trait;
use fall_extra_core::{Host, Result};
use serde_json::Value;

/// Turns one raw query term into a regular expression source.
///
/// The returned string must compile; a broken pattern fails the whole
/// matcher invocation.
#[async_trait]
pub trait QueryTransform: Send + Sync {
	async fn transform(&self, host: &dyn Host, term: &str) -> Result<String>;
}

/// Romaji-to-Japanese expansion through the vim-kensaku plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kensaku {
	plugin: String,
	method: String,
}

impl Kensaku {
	pub fn new(plugin: impl Into<String>, method: impl Into<String>) -> Self {
		Self {
			plugin: plugin.into(),
			method: method.into(),
		}
	}
}

impl Default for Kensaku {
	fn default() -> Self {
		Self::new("kensaku", "query")
	}
}

#[async_trait]
impl QueryTransform for Kensaku {
	async fn transform(&self, host: &dyn Host, term: &str) -> Result<String> {
		host.dispatch_as(&self.plugin, &self.method, vec![Value::from(term)]).await
	}
}

/// Matches the term as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Literal;

#[async_trait]
impl QueryTransform for Literal {
	async fn transform(&self, _host: &dyn Host, term: &str) -> Result<String> {
		Ok(regex::escape(term))
	}
}

/// Uses the term as a regular expression unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

#[async_trait]
impl QueryTransform for Verbatim {
	async fn transform(&self, _host: &dyn Host, term: &str) -> Result<String> {
		Ok(term.to_string())
	}
}
