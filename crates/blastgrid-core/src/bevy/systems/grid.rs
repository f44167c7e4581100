//! Level grid registration systems.
//!
//! Actors carrying a [`GridActor`] component register themselves at the
//! grid cell nearest to their world position, re-register when they move
//! and free their cell when they despawn.

use bevy::prelude::*;

use crate::bevy::{GridActor, GridEntityIndex, LevelGridRes};

/// Registers newly spawned grid actors on the level grid.
pub fn register_grid_actors(
    mut grid: ResMut<LevelGridRes>,
    mut index: ResMut<GridEntityIndex>,
    mut actors: Query<(Entity, &Transform, &mut GridActor), Added<GridActor>>,
) {
    for (entity, transform, mut actor) in &mut actors {
        let Some(cell) = grid.0.snap_to_cell(transform.translation) else {
            tracing::warn!(
                "[grid] {:?} spawned off-grid at {:?}",
                actor.kind,
                transform.translation
            );
            continue;
        };
        if let Err(err) = grid.0.add_actor(cell, actor.kind) {
            tracing::warn!("[grid] failed to register {:?}: {err}", actor.kind);
            continue;
        }
        actor.cell = Some(cell);
        index.0.insert(entity, cell);
        tracing::debug!("[grid] {:?} registered at ({}, {})", actor.kind, cell.col, cell.row);
    }
}

/// Re-registers actors whose transform moved them onto another cell.
pub fn sync_moved_actors(
    mut grid: ResMut<LevelGridRes>,
    mut index: ResMut<GridEntityIndex>,
    mut actors: Query<(Entity, &Transform, &mut GridActor), Changed<Transform>>,
) {
    for (entity, transform, mut actor) in &mut actors {
        let snapped = grid.0.snap_to_cell(transform.translation);
        if snapped == actor.cell {
            continue;
        }
        if let Some(previous) = actor.cell {
            grid.0.remove_actor(previous);
        }
        match snapped {
            Some(cell) => {
                if let Err(err) = grid.0.add_actor(cell, actor.kind) {
                    tracing::warn!("[grid] failed to move {:?}: {err}", actor.kind);
                    continue;
                }
                actor.cell = Some(cell);
                index.0.insert(entity, cell);
            }
            None => {
                tracing::warn!(
                    "[grid] {:?} moved off-grid to {:?}",
                    actor.kind,
                    transform.translation
                );
                actor.cell = None;
                index.0.remove(&entity);
            }
        }
    }
}

/// Frees the cells of despawned grid actors.
pub fn unregister_departed_actors(
    mut grid: ResMut<LevelGridRes>,
    mut index: ResMut<GridEntityIndex>,
    mut departed: RemovedComponents<GridActor>,
) {
    for entity in departed.read() {
        if let Some(cell) = index.0.remove(&entity) {
            grid.0.remove_actor(cell);
            tracing::debug!("[grid] cell ({}, {}) freed", cell.col, cell.row);
        }
    }
}
