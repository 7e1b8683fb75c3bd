//! File icon renderers.
//!
//! Each renderer batch-resolves one icon per item path through a host
//! function and prepends `<icon><separator>` to the label, shifting the
//! item's decorations by the prefix byte length.

use std::path::Path;

use fall_extra_core::adjust::{PrefixLookup, PrefixRenderer};
use fall_extra_core::{HostCall, Item};
use serde_json::{Value, json};

/// Access to the file path an item stands for.
pub trait PathDetail {
	fn path(&self) -> &str;
}

impl PathDetail for String {
	fn path(&self) -> &str {
		self
	}
}

/// Icons from vim-devicons (`WebDevIconsGetFileTypeSymbol`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Devicons;

impl<D: PathDetail> PrefixLookup<D> for Devicons {
	fn lookup(&self, item: &Item<D>) -> HostCall {
		HostCall::new("WebDevIconsGetFileTypeSymbol", [Value::from(item.detail.path()), json!(0)])
	}
}

/// Icons from vim-nerdfont (`nerdfont#find`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Nerdfont;

impl<D: PathDetail> PrefixLookup<D> for Nerdfont {
	fn lookup(&self, item: &Item<D>) -> HostCall {
		HostCall::new("nerdfont#find", [Value::from(item.detail.path()), json!(false)])
	}
}

/// Icons from nvim-web-devicons, looked up by path and extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct NvimWebDevicons;

/// Lua chunk evaluated by `luaeval`; `_A` holds `[path, extension]`.
pub const NVIM_WEB_DEVICONS_CHUNK: &str = "require'nvim-web-devicons'.get_icon(_A[1], _A[2], { default = true })";

impl<D: PathDetail> PrefixLookup<D> for NvimWebDevicons {
	fn lookup(&self, item: &Item<D>) -> HostCall {
		let path = item.detail.path();
		let extension = Path::new(path).extension().and_then(|ext| ext.to_str()).unwrap_or_default();
		HostCall::new("luaeval", [Value::from(NVIM_WEB_DEVICONS_CHUNK), json!([path, extension])])
	}
}

pub fn devicons() -> PrefixRenderer<Devicons> {
	PrefixRenderer::new(Devicons)
}

pub fn nerdfont() -> PrefixRenderer<Nerdfont> {
	PrefixRenderer::new(Nerdfont)
}

pub fn nvim_web_devicons() -> PrefixRenderer<NvimWebDevicons> {
	PrefixRenderer::new(NvimWebDevicons)
}
