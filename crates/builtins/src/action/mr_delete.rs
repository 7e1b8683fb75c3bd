use async_trait::async_trait;
use fall_extra_core::{Action, CancelSignal, Detail, Host, InvokeParams, Result};
use serde_json::Value;

use crate::mr::MrDetail;

/// Removes the selected paths (or the cursor path) from their vim-mr list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrDelete;

pub fn mr_delete() -> MrDelete {
	MrDelete
}

#[async_trait]
impl<D> Action<D> for MrDelete
where
	D: Detail + AsRef<MrDetail>,
{
	async fn invoke(&self, host: &dyn Host, params: InvokeParams<'_, D>, signal: &CancelSignal) -> Result<()> {
		for item in params.targets() {
			signal.check()?;
			let detail = item.detail.as_ref();
			tracing::debug!(kind = %detail.kind, path = %detail.path, "mr.delete");
			host.call(&detail.kind.delete_function(), vec![Value::from(detail.path.as_str())]).await?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use fall_extra_core::testing::{HostRequest, ScriptedHost};
	use fall_extra_core::{Error, Item};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;
	use crate::mr::MrKind;

	fn entry(id: u64, path: &str, kind: MrKind) -> Item<MrDetail> {
		Item::new(id, path, MrDetail { path: path.into(), kind })
	}

	fn host() -> ScriptedHost {
		ScriptedHost::new()
			.on_call("mr#mru#delete", |_| Ok(json!(0)))
			.on_call("mr#mrw#delete", |_| Ok(json!(0)))
	}

	fn deleted(host: &ScriptedHost) -> Vec<(String, String)> {
		host.requests()
			.into_iter()
			.filter_map(|r| match r {
				HostRequest::Call { function, args } => Some((function, args[0].as_str().unwrap_or_default().to_string())),
				_ => None,
			})
			.collect()
	}

	#[tokio::test]
	async fn deletes_every_selected_item_by_kind() {
		let host = host();
		let cursor = entry(0, "/a", MrKind::Mru);
		let selected = vec![entry(1, "/b", MrKind::Mru), entry(2, "/c", MrKind::Mrw)];
		let params = InvokeParams {
			item: Some(&cursor),
			selected: Some(&selected),
		};
		mr_delete().invoke(&host, params, &CancelSignal::new()).await.unwrap();

		assert_eq!(
			deleted(&host),
			vec![("mr#mru#delete".to_string(), "/b".to_string()), ("mr#mrw#delete".to_string(), "/c".to_string())]
		);
	}

	#[tokio::test]
	async fn falls_back_to_cursor_item() {
		let host = host();
		let cursor = entry(0, "/a", MrKind::Mru);
		let params = InvokeParams {
			item: Some(&cursor),
			selected: None,
		};
		mr_delete().invoke(&host, params, &CancelSignal::new()).await.unwrap();
		assert_eq!(deleted(&host), vec![("mr#mru#delete".to_string(), "/a".to_string())]);
	}

	#[tokio::test]
	async fn stops_at_first_failure() {
		let host = ScriptedHost::new().on_call("mr#mru#delete", |_| Ok(json!(0)));
		let selected = vec![entry(0, "/a", MrKind::Mrd), entry(1, "/b", MrKind::Mru)];
		let params = InvokeParams {
			item: None,
			selected: Some(&selected),
		};
		let err = mr_delete().invoke(&host, params, &CancelSignal::new()).await.unwrap_err();
		assert!(matches!(err, Error::Collaborator { .. }));
		assert_eq!(deleted(&host), vec![("mr#mrd#delete".to_string(), "/a".to_string())]);
	}
}
