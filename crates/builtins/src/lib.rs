//! Bundled fall extensions.
//!
//! * [`source`]: `<Plug>` action listings of fern and gin, vim-mr paths
//! * [`matcher`]: conjunctive regex term matching (kensaku, literal, regexp)
//! * [`renderer`]: file icons via nerdfont, devicons or nvim-web-devicons
//! * [`action`]: `<Plug>` action execution and vim-mr deletion
//! * [`config`]: TOML configuration for the above

#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod action;
pub mod config;
pub mod matcher;
pub mod mr;
pub mod plug;
pub mod renderer;
pub mod source;

pub use config::ExtrasConfig;
