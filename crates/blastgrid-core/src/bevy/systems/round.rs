//! Round flow systems.
//!
//! Consume round requests, advance the starting countdown and announce
//! every phase transition to the rest of the app.

use bevy::prelude::*;

use crate::bevy::{
    FinishRoundEvent, GamePhaseChangedEvent, ReturnToMenuEvent, RoundState, StartRoundEvent,
};

/// Applies round requests to the round flow.
pub fn handle_round_events(
    mut round: ResMut<RoundState>,
    mut start_events: MessageReader<StartRoundEvent>,
    mut finish_events: MessageReader<FinishRoundEvent>,
    mut menu_events: MessageReader<ReturnToMenuEvent>,
    mut phase_changed: MessageWriter<GamePhaseChangedEvent>,
) {
    if start_events.read().next().is_some() && round.0.start_round() {
        tracing::info!(
            "[round] starting, countdown {:.1}s",
            round.0.starting_countdown
        );
        phase_changed.write(GamePhaseChangedEvent {
            phase: round.0.phase(),
        });
    }

    if finish_events.read().next().is_some() && round.0.finish_round() {
        tracing::info!("[round] finished");
        phase_changed.write(GamePhaseChangedEvent {
            phase: round.0.phase(),
        });
    }

    if menu_events.read().next().is_some() && round.0.return_to_menu() {
        tracing::info!("[round] back to menu");
        phase_changed.write(GamePhaseChangedEvent {
            phase: round.0.phase(),
        });
    }
}

/// Advances the starting countdown with elapsed time.
pub fn tick_round(
    time: Res<Time>,
    mut round: ResMut<RoundState>,
    mut phase_changed: MessageWriter<GamePhaseChangedEvent>,
) {
    if let Some(phase) = round.0.tick(time.delta_secs()) {
        tracing::info!("[round] countdown over, round live");
        phase_changed.write(GamePhaseChangedEvent { phase });
    }
}
