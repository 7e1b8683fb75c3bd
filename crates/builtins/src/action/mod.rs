//! Actions run on the user's final selection, plus their default tables.

use fall_extra_core::{Action, Detail};
use indexmap::IndexMap;

mod mr_delete;
mod plug_execute;

pub use mr_delete::{MrDelete, mr_delete};
pub use plug_execute::{PlugActionExecute, fern_action_execute, gin_action_execute};

use crate::mr::MrDetail;
use crate::plug::PlugActionDetail;

/// Named action table handed to a picker.
pub type Actions<D> = IndexMap<String, Box<dyn Action<D>>>;

pub fn default_fern_action_execute_actions<D: Detail + AsRef<PlugActionDetail>>() -> Actions<D> {
	table("fern-action-execute", fern_action_execute())
}

pub fn default_gin_action_execute_actions<D: Detail + AsRef<PlugActionDetail>>() -> Actions<D> {
	table("gin-action-execute", gin_action_execute())
}

pub fn default_mr_delete_actions<D: Detail + AsRef<MrDetail>>() -> Actions<D> {
	table("mr-delete", mr_delete())
}

fn table<D: Detail>(name: &str, action: impl Action<D> + 'static) -> Actions<D> {
	IndexMap::from([(name.to_string(), Box::new(action) as Box<dyn Action<D>>)])
}
