#![allow(unused_crate_dependencies)]

use fall_extra_builtins::action::{default_fern_action_execute_actions, default_mr_delete_actions};
use fall_extra_builtins::matcher::{kensaku, literal};
use fall_extra_builtins::plug::PlugNamespace;
use fall_extra_builtins::source::{fern_action, mr};
use fall_extra_builtins::{ExtrasConfig, mr::MrKind};
use fall_extra_core::testing::{HostRequest, ScriptedHost};
use fall_extra_core::{CancelSignal, Decoration, Picker};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

#[tokio::test]
async fn fern_actions_end_to_end() {
	init_tracing();
	let host = ScriptedHost::new().on_eval(
		PlugNamespace::fern().list_expression(),
		json!([
			"<Plug>(fern-action-open)",
			"<Plug>(fern-action-open=)",
			"<Plug>(fern-action-open:split)",
			"<Plug>(fern-action-mark)",
		]),
	);
	let picker = Picker::new(fern_action()).matcher(literal()).actions(default_fern_action_execute_actions());
	let signal = CancelSignal::new();

	let items = picker.run(&host, "open", &signal).await.unwrap();
	let values: Vec<_> = items.iter().map(|i| i.value.as_str()).collect();
	assert_eq!(values, vec!["open", "open:split"]);
	assert_eq!(items[1].decorations, vec![Decoration::new(1, 4)]);

	picker.invoke(&host, None, items.get(1), None, &signal).await.unwrap();
	assert_eq!(
		host.requests().last(),
		Some(&HostRequest::FeedKeys {
			keys: PlugNamespace::fern().action_key("open:split"),
			mode: "i".into()
		})
	);
}

#[tokio::test]
async fn mr_files_with_icons_and_kensaku() {
	init_tracing();
	let config: ExtrasConfig = "[mr]\nkind = \"mrw\"\n[icons]\nprovider = \"devicons\"".parse().unwrap();
	let host = ScriptedHost::new()
		.on_dispatch("mr", "mrw:list", |_| Ok(json!(["/notes/日本語.md", "/src/main.rs", "/notes/english.md"])))
		.on_dispatch("kensaku", "query", |args| {
			Ok(match args[0].as_str() {
				Some("nihon") => json!("(?:nihon|日本)"),
				Some(other) => json!(regex::escape(other)),
				None => Value::Null,
			})
		})
		.on_call("WebDevIconsGetFileTypeSymbol", |_| Ok(json!("\u{f48a}")))
		.on_call("mr#mrw#delete", |_| Ok(json!(0)));

	let picker = Picker::new(config.mr_source())
		.matcher(config.kensaku_matcher())
		.renderer_boxed(config.icon_renderer())
		.actions(default_mr_delete_actions());
	let signal = CancelSignal::new();

	let items = picker.run(&host, "notes nihon", &signal).await.unwrap();
	assert_eq!(items.len(), 1);
	let item = &items[0];
	assert_eq!(item.label, "\u{f48a}  /notes/日本語.md");
	// "notes" at byte 1, "日本" at byte 7, both shifted by the 5-byte prefix.
	assert_eq!(item.decorations, vec![Decoration::new(7, 5), Decoration::new(13, 6)]);
	assert!(item.decorations_in_bounds());

	picker.invoke(&host, Some("mr-delete"), Some(item), None, &signal).await.unwrap();
	assert_eq!(
		host.requests().last(),
		Some(&HostRequest::Call {
			function: "mr#mrw#delete".into(),
			args: vec![json!("/notes/日本語.md")]
		})
	);
}

#[tokio::test]
async fn cancelled_pipeline_is_silent_and_inert() {
	init_tracing();
	let host = ScriptedHost::new().on_dispatch("mr", "mru:list", |_| Ok(json!(["/a"])));
	let picker = Picker::new(mr(Some(MrKind::Mru))).matcher(kensaku());
	let signal = CancelSignal::new();
	signal.cancel();

	let err = picker.run(&host, "a", &signal).await.unwrap_err();
	assert!(err.is_cancelled());
	assert!(host.requests().is_empty());
}
