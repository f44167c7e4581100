//! Bevy plugins.
//!
//! Provides:
//! - `BlastgridHeadlessPlugin`: grid, round and camera logic with no
//!   window or rendering dependencies, for servers and headless tests
//! - `BlastgridUnifiedPlugin`: the headless plugin plus the systems that
//!   need a real window

use bevy::prelude::*;

use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::systems;
use crate::grid::{LevelGrid, LevelGridConfig};

/// All game logic, runnable without a windowing or rendering backend.
#[derive(Debug, Clone, Default)]
pub struct BlastgridHeadlessPlugin {
    /// Level layout to load; `None` uses the default 9x9 arena.
    pub grid_config: Option<LevelGridConfig>,
}

impl Plugin for BlastgridHeadlessPlugin {
    fn build(&self, app: &mut App) {
        let grid = match &self.grid_config {
            Some(config) => LevelGrid::from_config(config).unwrap_or_else(|err| {
                tracing::warn!("[plugin] invalid grid config ({err}), using default arena");
                LevelGrid::default()
            }),
            None => LevelGrid::default(),
        };

        // Resources
        app.insert_resource(LevelGridRes(grid))
            .init_resource::<RoundState>()
            .init_resource::<ViewportState>()
            .init_resource::<GridEntityIndex>();

        // Messages
        app.add_message::<GamePhaseChangedEvent>()
            .add_message::<AspectRatioChangedEvent>()
            .add_message::<SetCameraLockEvent>()
            .add_message::<SetDistanceParamsEvent>()
            .add_message::<StartRoundEvent>()
            .add_message::<FinishRoundEvent>()
            .add_message::<ReturnToMenuEvent>();

        // Grid registration runs first so the camera sees fresh cells;
        // phase transitions announced this frame reach the camera within
        // the same frame.
        app.add_systems(
            Update,
            (
                (
                    systems::register_grid_actors,
                    systems::sync_moved_actors,
                    systems::unregister_departed_actors,
                )
                    .chain(),
                (systems::handle_round_events, systems::tick_round).chain(),
                (
                    systems::handle_camera_notifications,
                    systems::rearm_on_player_motion,
                    systems::update_framing_camera,
                )
                    .chain(),
            )
                .chain(),
        );
    }
}

/// Headless logic plus the window-dependent viewport watcher.
#[derive(Debug, Clone, Default)]
pub struct BlastgridUnifiedPlugin {
    pub grid_config: Option<LevelGridConfig>,
}

impl Plugin for BlastgridUnifiedPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(BlastgridHeadlessPlugin {
            grid_config: self.grid_config.clone(),
        });

        app.add_systems(
            Update,
            systems::detect_aspect_ratio_change.before(systems::handle_camera_notifications),
        );
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::bevy::test_utils::TestApp;
    use crate::bevy::{
        AspectRatioChangedEvent, SetDistanceParamsEvent, StartRoundEvent, ViewportState,
    };
    use crate::framing::DistanceParams;
    use crate::game::GamePhase;
    use crate::grid::{ActorKind, Cell};
    use crate::viewport::AspectConstraint;

    // Default 9x9 arena, 200-unit cells, corners at (+-800, +-800):
    // the locked placement at 90 degrees FOV sits at (0, 0, 800).
    const LOCKED_Z: f32 = 800.0;

    #[test]
    fn test_round_messages_drive_the_phase_flow() {
        let mut app = TestApp::new();
        assert_eq!(app.round().0.phase(), GamePhase::Menu);

        app.send(StartRoundEvent);
        app.advance(0.1);
        assert_eq!(app.round().0.phase(), GamePhase::Starting);

        app.advance(1.5);
        app.advance(1.5);
        assert_eq!(app.round().0.phase(), GamePhase::InGame);
    }

    #[test]
    fn test_camera_eases_to_locked_placement_and_suspends() {
        let mut app = TestApp::new();
        let camera = app.spawn_camera();

        app.send(StartRoundEvent);
        // Half-second frame: camera covers half the remaining distance.
        app.advance(0.5);
        let location = app.camera_location(camera);
        assert!((location.z - LOCKED_Z / 2.0).abs() < 1.0, "z was {}", location.z);
        assert!(app.framing(camera).controller.needs_update());

        // Full-second frame lands on the target, the next one suspends.
        app.advance(1.0);
        assert!((app.camera_location(camera).z - LOCKED_Z).abs() < 1.0);
        app.advance(0.5);
        assert!(!app.framing(camera).controller.needs_update());
    }

    #[test]
    fn test_camera_tracks_players_and_falls_back_when_they_despawn() {
        let mut app = TestApp::new();
        let camera = app.spawn_camera();
        // Cell centers (-200, -200) and (200, 200): framed center is the
        // origin, 400x400 extent needs 200 units of distance at 90 degrees.
        let p1 = app.spawn_player(-200.0, -200.0);
        let p2 = app.spawn_player(200.0, 200.0);

        app.send(StartRoundEvent);
        for _ in 0..3 {
            app.advance(1.0);
        }
        assert_eq!(app.round().0.phase(), GamePhase::InGame);

        app.advance(1.0);
        let tracked = app.camera_location(camera);
        assert!((tracked - Vec3::new(0.0, 0.0, 200.0)).length() < 1.0);

        // No players left: the camera returns to the whole-level framing.
        app.app.world_mut().despawn(p1);
        app.app.world_mut().despawn(p2);
        app.advance(1.0);
        app.advance(1.0);
        assert!((app.camera_location(camera).z - LOCKED_Z).abs() < 1.0);
    }

    #[test]
    fn test_player_motion_rearms_a_settled_camera() {
        let mut app = TestApp::new();
        let camera = app.spawn_camera();
        let player = app.spawn_player(-200.0, -200.0);

        app.send(StartRoundEvent);
        for _ in 0..3 {
            app.advance(1.0);
        }
        app.advance(1.0);
        app.advance(0.5);
        assert!(!app.framing(camera).controller.needs_update());
        let settled = app.camera_location(camera);

        // Move the player two cells over; the camera wakes up and follows.
        app.app
            .world_mut()
            .entity_mut(player)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(200.0, 200.0, 0.0);
        app.advance(1.0);
        assert_ne!(app.camera_location(camera), settled);
    }

    #[test]
    fn test_aspect_ratio_message_updates_viewport_state() {
        let mut app = TestApp::new();
        app.spawn_camera();

        app.send(AspectRatioChangedEvent { ratio: 0.5 });
        app.advance(0.1);
        let viewport = app.app.world().resource::<ViewportState>();
        assert_eq!(viewport.constraint, AspectConstraint::VerticalDominant);
        assert_eq!(viewport.last_ratio, Some(0.5));
    }

    #[test]
    fn test_distance_params_message_retargets_a_settled_camera() {
        let mut app = TestApp::new();
        let camera = app.spawn_camera();

        app.send(StartRoundEvent);
        app.advance(1.0);
        app.advance(1.0);
        assert!(!app.framing(camera).controller.needs_update());

        app.send(SetDistanceParamsEvent {
            params: DistanceParams {
                min_distance: Some(2000.0),
                ..DistanceParams::default()
            },
        });
        app.advance(1.0);
        assert!((app.camera_location(camera).z - 2000.0).abs() < 1.0);
    }

    #[test]
    fn test_grid_actors_register_and_unregister_through_the_ecs() {
        let mut app = TestApp::new();
        let wall = app
            .app
            .world_mut()
            .spawn((
                crate::bevy::GridActor::new(ActorKind::Wall),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ))
            .id();
        app.spawn_player(-800.0, -800.0);

        app.advance(0.1);
        assert_eq!(app.grid().actor_at(Cell::new(4, 4)), Some(ActorKind::Wall));
        assert_eq!(
            app.grid().actor_at(Cell::new(0, 0)),
            Some(ActorKind::Player)
        );

        app.app.world_mut().despawn(wall);
        app.advance(0.1);
        assert_eq!(app.grid().actor_at(Cell::new(4, 4)), None);
    }
}
