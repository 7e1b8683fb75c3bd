//! In-memory host for exercising stages without a live editor.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::{Error, Host, RawKeys, Result};

type Responder = Box<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Host request as recorded by [`ScriptedHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
	Eval(String),
	Call { function: String, args: Vec<Value> },
	Dispatch { plugin: String, method: String, args: Vec<Value> },
	FeedKeys { keys: RawKeys, mode: String },
}

/// Host answering from scripted responders and recording every request.
///
/// Unscripted requests fail as collaborator errors.
#[derive(Default)]
pub struct ScriptedHost {
	evals: HashMap<String, Value>,
	functions: HashMap<String, Responder>,
	plugins: HashMap<(String, String), Responder>,
	feed_error: Option<String>,
	requests: Mutex<Vec<HostRequest>>,
}

impl ScriptedHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Answers `expr` with `value`.
	#[must_use]
	pub fn on_eval(mut self, expr: impl Into<String>, value: impl Into<Value>) -> Self {
		self.evals.insert(expr.into(), value.into());
		self
	}

	/// Answers calls to `function` with `respond(args)`.
	#[must_use]
	pub fn on_call(mut self, function: impl Into<String>, respond: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static) -> Self {
		self.functions.insert(function.into(), Box::new(respond));
		self
	}

	/// Answers `plugin.method` dispatches with `respond(args)`.
	#[must_use]
	pub fn on_dispatch(
		mut self,
		plugin: impl Into<String>,
		method: impl Into<String>,
		respond: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	) -> Self {
		self.plugins.insert((plugin.into(), method.into()), Box::new(respond));
		self
	}

	/// Makes every key feed fail with `message`.
	#[must_use]
	pub fn failing_feed_keys(mut self, message: impl Into<String>) -> Self {
		self.feed_error = Some(message.into());
		self
	}

	/// Requests received so far, in arrival order.
	pub fn requests(&self) -> Vec<HostRequest> {
		self.requests.lock().map(|r| r.clone()).unwrap_or_default()
	}

	fn record(&self, request: HostRequest) {
		if let Ok(mut requests) = self.requests.lock() {
			requests.push(request);
		}
	}
}

#[async_trait]
impl Host for ScriptedHost {
	async fn eval(&self, expr: &str) -> Result<Value> {
		self.record(HostRequest::Eval(expr.to_string()));
		self.evals.get(expr).cloned().ok_or_else(|| Error::collaborator("eval", format!("no scripted value for {expr:?}")))
	}

	async fn call(&self, function: &str, args: Vec<Value>) -> Result<Value> {
		self.record(HostRequest::Call {
			function: function.to_string(),
			args: args.clone(),
		});
		let respond = self.functions.get(function).ok_or_else(|| Error::collaborator(function, "unknown function"))?;
		respond(&args)
	}

	async fn dispatch(&self, plugin: &str, method: &str, args: Vec<Value>) -> Result<Value> {
		self.record(HostRequest::Dispatch {
			plugin: plugin.to_string(),
			method: method.to_string(),
			args: args.clone(),
		});
		let respond = self
			.plugins
			.get(&(plugin.to_string(), method.to_string()))
			.ok_or_else(|| Error::collaborator(format!("{plugin}.{method}"), "plugin not loaded"))?;
		respond(&args)
	}

	async fn feed_keys(&self, keys: &RawKeys, mode: &str) -> Result<()> {
		self.record(HostRequest::FeedKeys {
			keys: keys.clone(),
			mode: mode.to_string(),
		});
		match &self.feed_error {
			Some(message) => Err(Error::collaborator("feedkeys", message)),
			None => Ok(()),
		}
	}
}
