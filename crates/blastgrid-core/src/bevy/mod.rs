//! Bevy ECS integration.
//!
//! Hosts the pure grid/round/framing logic as resources, messages and
//! systems. Everything here builds and runs headless; a windowed client
//! adds [`plugin::BlastgridUnifiedPlugin`] to pick up real viewport
//! notifications.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::*;
pub use resources::*;
