//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `BlastgridHeadlessPlugin` and manual time stepping,
//! so camera easing is exercised with exact, deterministic deltas.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::bevy::plugin::BlastgridHeadlessPlugin;
use crate::bevy::{FramingCamera, GridActor, LevelGridRes, MainCamera, RoundState};
use crate::grid::{ActorKind, LevelGrid};

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Default 9x9 arena.
    pub fn new() -> Self {
        Self::with_plugin(BlastgridHeadlessPlugin::default())
    }

    pub fn with_plugin(plugin: BlastgridHeadlessPlugin) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(plugin);
        // Manual time: each update advances by exactly the step set in
        // `advance`, nothing else.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        // Lift the virtual-time clamp so large manual steps pass through
        // unclamped (the default max_delta is 250ms).
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_max_delta(Duration::MAX);
        // Run one update to initialize resources and swallow the zero
        // startup delta.
        app.update();
        Self { app }
    }

    /// Run one frame with exactly `seconds` of elapsed time.
    pub fn advance(&mut self, seconds: f32) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
                seconds,
            )));
        self.app.update();
    }

    /// Write a message as an external host would.
    pub fn send<M: Message>(&mut self, message: M) {
        self.app.world_mut().resource_mut::<Messages<M>>().write(message);
    }

    pub fn spawn_camera(&mut self) -> Entity {
        self.app
            .world_mut()
            .spawn((MainCamera, FramingCamera::default(), Transform::default()))
            .id()
    }

    pub fn spawn_player(&mut self, x: f32, y: f32) -> Entity {
        self.app
            .world_mut()
            .spawn((
                GridActor::new(ActorKind::Player),
                Transform::from_xyz(x, y, 0.0),
            ))
            .id()
    }

    pub fn camera_location(&self, entity: Entity) -> Vec3 {
        self.app
            .world()
            .entity(entity)
            .get::<Transform>()
            .expect("camera has a transform")
            .translation
    }

    pub fn framing(&self, entity: Entity) -> &FramingCamera {
        self.app
            .world()
            .entity(entity)
            .get::<FramingCamera>()
            .expect("camera has framing state")
    }

    pub fn grid(&self) -> &LevelGrid {
        &self.app.world().resource::<LevelGridRes>().0
    }

    pub fn round(&self) -> &RoundState {
        self.app.world().resource::<RoundState>()
    }
}
