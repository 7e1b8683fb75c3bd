//! Contract the pipeline needs from the host editor and its plugins.
//!
//! Every method is a suspension point: stages check their [`CancelSignal`]
//! before issuing a call, and a failing call aborts the stage invocation.
//!
//! [`CancelSignal`]: crate::CancelSignal

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// One named host function call, used for batched lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCall {
	pub function: String,
	pub args: Vec<Value>,
}

impl HostCall {
	pub fn new(function: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
		Self {
			function: function.into(),
			args: args.into_iter().collect(),
		}
	}
}

/// Key sequence in the host's key notation, e.g. `\<Plug>(fern-action-open)`.
///
/// The notation is unevaluated; [`Host::feed_keys`] implementations resolve
/// it to actual keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawKeys(String);

impl RawKeys {
	pub fn new(notation: impl Into<String>) -> Self {
		Self(notation.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for RawKeys {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Host editor surface: expression evaluation, function calls, plugin
/// dispatch and key feeding.
#[async_trait]
pub trait Host: Send + Sync {
	/// Evaluates an expression in the host scripting language.
	async fn eval(&self, expr: &str) -> Result<Value>;

	/// Calls a named host function.
	async fn call(&self, function: &str, args: Vec<Value>) -> Result<Value>;

	/// Dispatches a request to another loaded plugin.
	async fn dispatch(&self, plugin: &str, method: &str, args: Vec<Value>) -> Result<Value>;

	/// Injects keys into the input queue as though typed.
	async fn feed_keys(&self, keys: &RawKeys, mode: &str) -> Result<()>;

	/// Issues independent calls and returns their results in request order.
	async fn batch(&self, calls: Vec<HostCall>) -> Result<Vec<Value>> {
		try_join_all(calls.into_iter().map(|c| async move { self.call(&c.function, c.args).await })).await
	}
}

impl<'h> dyn Host + 'h {
	/// [`Host::eval`] decoded into `T`.
	pub async fn eval_as<T: DeserializeOwned>(&self, expr: &str) -> Result<T> {
		tracing::trace!(expr, "host.eval");
		let value = self.eval(expr).await?;
		decode("eval", value)
	}

	/// [`Host::call`] decoded into `T`.
	pub async fn call_as<T: DeserializeOwned>(&self, function: &str, args: Vec<Value>) -> Result<T> {
		tracing::trace!(function, "host.call");
		let value = self.call(function, args).await?;
		decode(function, value)
	}

	/// [`Host::dispatch`] decoded into `T`.
	pub async fn dispatch_as<T: DeserializeOwned>(&self, plugin: &str, method: &str, args: Vec<Value>) -> Result<T> {
		tracing::trace!(plugin, method, "host.dispatch");
		let value = self.dispatch(plugin, method, args).await?;
		decode(&format!("{plugin}.{method}"), value)
	}
}

/// Decodes a host value, reporting shape mismatches as collaborator failures.
pub fn decode<T: DeserializeOwned>(operation: &str, value: Value) -> Result<T> {
	serde_json::from_value(value).map_err(|e| Error::collaborator(operation, e))
}
