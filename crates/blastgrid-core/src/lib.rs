//! Blastgrid Core Library
//!
//! Game logic for a grid-based multiplayer arena game: the shared level
//! grid, the round phase flow, and the auto-framing camera that keeps all
//! players (or the whole level) in view at any screen aspect ratio.
//!
//! Pure logic lives in the top-level modules; the `bevy` module hosts it
//! as ECS resources, messages and systems.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod framing;
pub mod game;
pub mod grid;
pub mod viewport;

// Bevy integration
pub mod bevy;

pub use framing::{
    APPROACH_TOLERANCE, DistanceParams, FramingController, FramingError, FramingInput,
    FramingState, distance_to_fit_view, location_between,
};
pub use game::{DEFAULT_STARTING_COUNTDOWN, GamePhase, RoundFlow};
pub use grid::{ActorKind, CELL_SIZE, Cell, GridError, LevelGrid, LevelGridConfig};
pub use viewport::{AspectConstraint, AspectResolver};
