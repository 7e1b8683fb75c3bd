//! Item sources.

mod mr;
mod plug_action;

pub use mr::{Mr, mr};
pub use plug_action::{PlugActions, fern_action, gin_action};
