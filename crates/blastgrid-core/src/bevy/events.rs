//! ECS messages.
//!
//! The "notifications" the framing controller reacts to, plus the round
//! flow requests a host UI or netcode layer would issue.

use bevy::prelude::*;

use crate::framing::DistanceParams;
use crate::game::GamePhase;

/// Fired on every round phase transition.
#[derive(Message, Debug, Clone, Copy)]
pub struct GamePhaseChangedEvent {
    pub phase: GamePhase,
}

/// Fired when the screen aspect ratio changes.
#[derive(Message, Debug, Clone, Copy)]
pub struct AspectRatioChangedEvent {
    /// New width/height ratio.
    pub ratio: f32,
}

/// Forces or releases the camera's center lock.
#[derive(Message, Debug, Clone, Copy)]
pub struct SetCameraLockEvent {
    pub locked: bool,
}

/// Replaces the camera distance tweaks at runtime.
#[derive(Message, Debug, Clone, Copy)]
pub struct SetDistanceParamsEvent {
    pub params: DistanceParams,
}

/// Requests Menu -> Starting.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct StartRoundEvent;

/// Requests InGame -> EndGame.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct FinishRoundEvent;

/// Requests EndGame -> Menu.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ReturnToMenuEvent;
