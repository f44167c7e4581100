//! Round phase flow.
//!
//! A round moves Menu -> Starting -> InGame -> EndGame -> Menu. The
//! Starting phase runs a short countdown before play begins; the camera
//! keys its locked/tracking behavior off these phases.

use serde::{Deserialize, Serialize};

/// Seconds of countdown before a round goes live.
pub const DEFAULT_STARTING_COUNTDOWN: f32 = 3.0;

/// Current phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Out of a round; nothing to frame.
    #[default]
    Menu,
    /// Pre-round countdown.
    Starting,
    /// Round is live.
    InGame,
    /// Round finished, results on screen.
    EndGame,
}

/// Drives the phase transitions of a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundFlow {
    phase: GamePhase,
    /// Countdown length armed on every round start.
    pub starting_countdown: f32,
    remaining: f32,
}

impl Default for RoundFlow {
    fn default() -> Self {
        Self {
            phase: GamePhase::Menu,
            starting_countdown: DEFAULT_STARTING_COUNTDOWN,
            remaining: 0.0,
        }
    }
}

impl RoundFlow {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Seconds left in the starting countdown.
    pub fn remaining_countdown(&self) -> f32 {
        self.remaining
    }

    /// Menu -> Starting. Returns false from any other phase.
    pub fn start_round(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.phase = GamePhase::Starting;
        self.remaining = self.starting_countdown;
        true
    }

    /// InGame -> EndGame. Returns false from any other phase.
    pub fn finish_round(&mut self) -> bool {
        if self.phase != GamePhase::InGame {
            return false;
        }
        self.phase = GamePhase::EndGame;
        true
    }

    /// EndGame -> Menu. Returns false from any other phase.
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase != GamePhase::EndGame {
            return false;
        }
        self.phase = GamePhase::Menu;
        true
    }

    /// Advances the countdown. Returns the new phase when a transition
    /// fires (Starting -> InGame once the countdown expires).
    pub fn tick(&mut self, delta_seconds: f32) -> Option<GamePhase> {
        if self.phase != GamePhase::Starting {
            return None;
        }
        self.remaining -= delta_seconds;
        if self.remaining > 0.0 {
            return None;
        }
        self.remaining = 0.0;
        self.phase = GamePhase::InGame;
        Some(GamePhase::InGame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_round_cycle() {
        let mut flow = RoundFlow::default();
        assert_eq!(flow.phase(), GamePhase::Menu);

        assert!(flow.start_round());
        assert_eq!(flow.phase(), GamePhase::Starting);
        assert_eq!(flow.remaining_countdown(), DEFAULT_STARTING_COUNTDOWN);

        // Countdown runs out after three seconds.
        assert_eq!(flow.tick(1.0), None);
        assert_eq!(flow.tick(1.0), None);
        assert_eq!(flow.tick(1.5), Some(GamePhase::InGame));
        assert_eq!(flow.phase(), GamePhase::InGame);

        assert!(flow.finish_round());
        assert_eq!(flow.phase(), GamePhase::EndGame);

        assert!(flow.return_to_menu());
        assert_eq!(flow.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_invalid_transitions_change_nothing() {
        let mut flow = RoundFlow::default();
        assert!(!flow.finish_round());
        assert!(!flow.return_to_menu());
        assert_eq!(flow.phase(), GamePhase::Menu);

        flow.start_round();
        assert!(!flow.start_round());
        assert_eq!(flow.phase(), GamePhase::Starting);
    }

    #[test]
    fn test_tick_outside_starting_is_inert() {
        let mut flow = RoundFlow::default();
        assert_eq!(flow.tick(10.0), None);
        assert_eq!(flow.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_custom_countdown() {
        let mut flow = RoundFlow {
            starting_countdown: 0.5,
            ..RoundFlow::default()
        };
        flow.start_round();
        assert_eq!(flow.tick(0.25), None);
        assert_eq!(flow.tick(0.25), Some(GamePhase::InGame));
    }
}
