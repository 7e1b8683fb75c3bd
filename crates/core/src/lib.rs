//! Item pipeline model shared by fall extensions.
//!
//! * [`Item`] and [`Decoration`]: rows with byte-indexed highlight regions
//! * [`CancelSignal`]: run-scoped cooperative cancellation
//! * [`Host`]: the editor/plugin surface stages talk to
//! * [`stage`]: source, matcher, renderer and action extension points
//! * [`adjust`]: label prefix injection used by renderers
//! * [`Picker`]: runs one configured pipeline end to end

pub mod adjust;
mod cancel;
mod error;
pub mod host;
mod item;
mod picker;
pub mod query;
pub mod stage;
pub mod stream;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use cancel::CancelSignal;
pub use error::{Error, Result};
pub use host::{Host, HostCall, RawKeys};
pub use item::{Decoration, Item, ItemIds};
pub use picker::Picker;
pub use stage::{Action, Detail, InvokeParams, ListSource, MatchParams, Matcher, RenderParams, Renderer, Source};
pub use stream::ItemStream;
