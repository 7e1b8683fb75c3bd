use async_trait::async_trait;
use fall_extra_core::{Action, CancelSignal, Detail, Error, Host, InvokeParams, Result};

use crate::plug::{PlugActionDetail, PlugNamespace};

/// Feeds the `<Plug>` mapping of the cursor item so the host plugin runs
/// that action on its current buffer.
#[derive(Debug, Clone)]
pub struct PlugActionExecute {
	namespace: PlugNamespace,
}

impl PlugActionExecute {
	pub fn new(namespace: PlugNamespace) -> Self {
		Self { namespace }
	}
}

pub fn fern_action_execute() -> PlugActionExecute {
	PlugActionExecute::new(PlugNamespace::fern())
}

pub fn gin_action_execute() -> PlugActionExecute {
	PlugActionExecute::new(PlugNamespace::gin())
}

#[async_trait]
impl<D> Action<D> for PlugActionExecute
where
	D: Detail + AsRef<PlugActionDetail>,
{
	async fn invoke(&self, host: &dyn Host, params: InvokeParams<'_, D>, signal: &CancelSignal) -> Result<()> {
		let Some(item) = params.item else {
			return Ok(());
		};
		let detail = item.detail.as_ref();
		if detail.namespace != self.namespace.prefix() {
			return Err(Error::DetailMismatch {
				expected: self.namespace.prefix().to_string(),
				found: detail.namespace.clone(),
			});
		}
		signal.check()?;
		tracing::debug!(keys = %detail.action_key, "plug_actions.execute");
		host.feed_keys(&detail.action_key, "i").await
	}
}

#[cfg(test)]
mod tests {
	use fall_extra_core::Item;
	use fall_extra_core::testing::{HostRequest, ScriptedHost};
	use pretty_assertions::assert_eq;

	use super::*;

	fn item(ns: &PlugNamespace, action: &str) -> Item<PlugActionDetail> {
		Item::new(
			0,
			action,
			PlugActionDetail {
				namespace: ns.prefix().to_string(),
				action_key: ns.action_key(action),
			},
		)
	}

	fn params(item: Option<&Item<PlugActionDetail>>) -> InvokeParams<'_, PlugActionDetail> {
		InvokeParams { item, selected: None }
	}

	#[tokio::test]
	async fn feeds_action_key_in_insert_mode() {
		let host = ScriptedHost::new();
		let open = item(&PlugNamespace::fern(), "open:left");
		fern_action_execute().invoke(&host, params(Some(&open)), &CancelSignal::new()).await.unwrap();

		assert_eq!(
			host.requests(),
			vec![HostRequest::FeedKeys {
				keys: PlugNamespace::fern().action_key("open:left"),
				mode: "i".into()
			}]
		);
	}

	#[tokio::test]
	async fn without_cursor_item_does_nothing() {
		let host = ScriptedHost::new();
		gin_action_execute().invoke(&host, params(None), &CancelSignal::new()).await.unwrap();
		assert!(host.requests().is_empty());
	}

	#[tokio::test]
	async fn rejects_items_of_another_namespace() {
		let host = ScriptedHost::new();
		let edit = item(&PlugNamespace::gin(), "edit");
		let err = fern_action_execute().invoke(&host, params(Some(&edit)), &CancelSignal::new()).await.unwrap_err();
		assert!(matches!(err, Error::DetailMismatch { ref expected, ref found } if expected == "fern" && found == "gin"));
		assert!(host.requests().is_empty());
	}

	#[tokio::test]
	async fn feed_failure_surfaces() {
		let host = ScriptedHost::new().failing_feed_keys("E492");
		let open = item(&PlugNamespace::fern(), "open");
		let err = fern_action_execute().invoke(&host, params(Some(&open)), &CancelSignal::new()).await.unwrap_err();
		assert!(matches!(err, Error::Collaborator { .. }));
	}

	#[tokio::test]
	async fn cancelled_invocation_feeds_nothing() {
		let host = ScriptedHost::new();
		let signal = CancelSignal::new();
		signal.cancel();
		let open = item(&PlugNamespace::fern(), "open");
		assert!(fern_action_execute().invoke(&host, params(Some(&open)), &signal).await.unwrap_err().is_cancelled());
		assert!(host.requests().is_empty());
	}
}
