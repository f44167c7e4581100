//! ECS resources.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::game::RoundFlow;
use crate::grid::{Cell, LevelGrid};
use crate::viewport::{AspectConstraint, AspectResolver};

/// The shared level grid.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelGridRes(pub LevelGrid);

/// Round phase flow.
#[derive(Resource, Debug, Clone, Default)]
pub struct RoundState(pub RoundFlow);

/// Last known viewport classification.
///
/// Headless hosts never update this, so framing math runs with the
/// default constraint — the documented degraded behavior.
#[derive(Resource, Debug, Clone, Default)]
pub struct ViewportState {
    pub resolver: AspectResolver,
    pub constraint: AspectConstraint,
    /// Ratio from the latest change notification, if any was seen.
    pub last_ratio: Option<f32>,
}

/// Which grid cell each registered actor entity occupies.
///
/// Needed to clear cells when an actor entity despawns, since its
/// components are already gone by the time removal is observed.
#[derive(Resource, Debug, Clone, Default)]
pub struct GridEntityIndex(pub HashMap<Entity, Cell>);
