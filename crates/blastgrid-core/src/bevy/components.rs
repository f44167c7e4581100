//! ECS components.

use bevy::prelude::*;

use crate::framing::{DistanceParams, FramingController};
use crate::grid::{ActorKind, Cell};

/// Marker for the camera entity driven by the auto-framing systems.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// Auto-framing state attached to the main camera.
#[derive(Component, Debug, Clone)]
pub struct FramingCamera {
    /// Field of view used for distance calculations, degrees.
    pub fov_degrees: f32,
    pub controller: FramingController,
}

impl Default for FramingCamera {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            controller: FramingController::default(),
        }
    }
}

impl FramingCamera {
    pub fn with_params(params: DistanceParams) -> Self {
        Self {
            controller: FramingController::new(params),
            ..Self::default()
        }
    }
}

/// A level actor that registers itself on the shared level grid.
///
/// `cell` is assigned by the grid systems once the actor's transform has
/// been snapped onto the grid; it stays `None` for off-grid actors.
#[derive(Component, Debug, Clone, Copy)]
pub struct GridActor {
    pub kind: ActorKind,
    pub cell: Option<Cell>,
}

impl GridActor {
    pub fn new(kind: ActorKind) -> Self {
        Self { kind, cell: None }
    }
}
