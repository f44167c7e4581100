//! Gameplay systems.

pub mod camera;
pub mod grid;
pub mod round;

pub use camera::*;
pub use grid::*;
pub use round::*;
