//! Auto-framing camera systems.
//!
//! Notification messages re-arm each framing controller; the per-tick
//! update system then eases the camera transform toward the current
//! target and goes quiet once the controller reports it has arrived.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bevy::{
    AspectRatioChangedEvent, FramingCamera, GamePhaseChangedEvent, GridActor, LevelGridRes,
    MainCamera, SetCameraLockEvent, SetDistanceParamsEvent, ViewportState,
};
use crate::framing::{FramingInput, FramingState};
use crate::grid::ActorKind;

/// Applies phase, aspect-ratio, lock and distance-param notifications to
/// every framing camera.
pub fn handle_camera_notifications(
    mut phase_events: MessageReader<GamePhaseChangedEvent>,
    mut aspect_events: MessageReader<AspectRatioChangedEvent>,
    mut lock_events: MessageReader<SetCameraLockEvent>,
    mut params_events: MessageReader<SetDistanceParamsEvent>,
    mut viewport: ResMut<ViewportState>,
    mut cameras: Query<&mut FramingCamera, With<MainCamera>>,
) {
    let phases: Vec<_> = phase_events.read().copied().collect();
    let aspects: Vec<_> = aspect_events.read().copied().collect();
    let locks: Vec<_> = lock_events.read().copied().collect();
    let params: Vec<_> = params_events.read().copied().collect();

    for aspect in &aspects {
        viewport.constraint = viewport.resolver.resolve_ratio(aspect.ratio);
        viewport.last_ratio = Some(aspect.ratio);
        tracing::info!(
            "[camera] aspect ratio {:.3} -> {:?}",
            aspect.ratio,
            viewport.constraint
        );
    }

    for mut camera in &mut cameras {
        for event in &phases {
            camera.controller.on_game_phase_changed(event.phase);
        }
        if !aspects.is_empty() {
            camera.controller.on_aspect_ratio_changed();
        }
        for event in &locks {
            camera.controller.set_locked_on_center(event.locked);
        }
        for event in &params {
            camera.controller.set_distance_params(event.params);
        }
    }
}

/// Re-arms suspended controllers whenever a player changes cell or a grid
/// actor despawns, so a camera that settled keeps up with the arena.
pub fn rearm_on_player_motion(
    moved: Query<&GridActor, Changed<GridActor>>,
    mut departed: RemovedComponents<GridActor>,
    mut cameras: Query<&mut FramingCamera, With<MainCamera>>,
) {
    let player_moved = moved.iter().any(|actor| actor.kind == ActorKind::Player);
    if !player_moved && departed.read().next().is_none() {
        return;
    }
    for mut camera in &mut cameras {
        camera.controller.request_update();
    }
}

/// Per-tick evaluation: eases each framing camera toward its target.
pub fn update_framing_camera(
    time: Res<Time>,
    grid: Res<LevelGridRes>,
    viewport: Res<ViewportState>,
    mut cameras: Query<(&mut FramingCamera, &mut Transform), With<MainCamera>>,
) {
    for (mut camera, mut transform) in &mut cameras {
        if !camera.controller.needs_update() {
            continue;
        }

        let tracked = grid.0.locations_with(ActorKind::Player);
        let locked = grid.0.corner_locations();

        if tracked.is_empty() && camera.controller.state() == FramingState::Tracking {
            tracing::debug!("[camera] no live players, framing the whole level");
        }

        let input = FramingInput {
            fov_degrees: camera.fov_degrees,
            constraint: viewport.constraint,
            tracked: &tracked,
            locked: &locked,
        };
        transform.translation =
            camera
                .controller
                .update(transform.translation, time.delta_secs(), &input);
    }
}

/// Watches the primary window and emits an aspect-ratio notification on
/// every ratio change. Registered by the unified plugin only; headless
/// hosts have no window to watch.
pub fn detect_aspect_ratio_change(
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<ViewportState>,
    mut aspect_events: MessageWriter<AspectRatioChangedEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if window.height() <= 0.0 {
        return;
    }
    let ratio = window.width() / window.height();
    let changed = viewport
        .last_ratio
        .is_none_or(|last| (last - ratio).abs() > f32::EPSILON);
    if changed {
        aspect_events.write(AspectRatioChangedEvent { ratio });
    }
}
