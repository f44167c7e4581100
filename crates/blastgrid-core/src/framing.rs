//! Camera auto-framing: distance calculation, location composition and the
//! locked/tracking controller.
//!
//! Instead of changing the real FOV (and getting a fisheye look), the
//! camera is pushed away from the level far enough that the widest and
//! tallest extents of a point set both fit the frustum at the current FOV.
//! The controller eases the camera toward that placement and tells the
//! host whether it still needs per-tick updates.

use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::GamePhase;
use crate::viewport::AspectConstraint;

/// Distance (world units) below which the camera counts as arrived.
pub const APPROACH_TOLERANCE: f32 = 10.0;

/// Tweaks applied to every distance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistanceParams {
    /// Extra angle (degrees) folded into the effective FOV before the
    /// distance is computed. Sign depends on the aspect constraint, see
    /// [`AspectConstraint::additive_angle_multiplier`].
    pub fit_view_additive_angle: Option<f32>,
    /// Lower bound on the computed distance, in world units.
    pub min_distance: Option<f32>,
}

impl DistanceParams {
    /// FOV after the additive fit-view angle is applied, if set.
    fn effective_fov(&self, fov_degrees: f32, constraint: AspectConstraint) -> f32 {
        match self.fit_view_additive_angle {
            Some(angle) => fov_degrees - angle * constraint.additive_angle_multiplier(),
            None => fov_degrees,
        }
    }

    /// Truncates the distance to the allowed minimal one, if set.
    fn limit_to_min_distance(&self, distance: f32) -> f32 {
        match self.min_distance {
            Some(min) => distance.max(min),
            None => distance,
        }
    }
}

/// How far away the camera must be for `view_size` (world units) to fit
/// the frustum at `fov_degrees`.
///
/// Both the widest and the tallest extents are guaranteed to fit: the
/// result is the larger of the two per-axis candidate distances.
///
/// A non-positive effective FOV is a precondition violation; release
/// builds degrade to the min-distance floor instead of propagating NaN.
pub fn distance_to_fit_view(
    view_size: Vec2,
    fov_degrees: f32,
    constraint: AspectConstraint,
    params: &DistanceParams,
) -> f32 {
    let fov = params.effective_fov(fov_degrees, constraint);
    debug_assert!(fov > 0.0, "non-positive effective FOV: {fov}");

    let half_tangent = (fov.to_radians() / 2.0).tan();
    if !half_tangent.is_finite() || half_tangent <= 0.0 {
        return params.limit_to_min_distance(0.0);
    }

    let horizontal = view_size.x / (2.0 * half_tangent);
    let vertical = view_size.y / (2.0 * half_tangent);
    params.limit_to_min_distance(horizontal.max(vertical))
}

/// Errors from the framing calculations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    /// A bounding box cannot be derived from zero points.
    #[error("cannot frame an empty point set")]
    EmptyPointSet,
}

/// Camera placement that frames all `points` at the given FOV.
///
/// Takes the planar (X/Y) center of the axis-aligned bounding box and
/// offsets it along +Z (the top-down viewing axis) by the fitting
/// distance. Pure: identical inputs always yield the identical location.
pub fn location_between(
    points: &[Vec3],
    fov_degrees: f32,
    constraint: AspectConstraint,
    params: &DistanceParams,
) -> Result<Vec3, FramingError> {
    let Some((first, rest)) = points.split_first() else {
        return Err(FramingError::EmptyPointSet);
    };

    let mut min = *first;
    let mut max = *first;
    for point in rest {
        min = min.min(*point);
        max = max.max(*point);
    }

    let size = max - min;
    let distance = distance_to_fit_view(Vec2::new(size.x, size.y), fov_degrees, constraint, params);

    let mut location = (min + max) / 2.0;
    location.z += distance;
    Ok(location)
}

/// Which placement the camera is easing toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingState {
    /// Fixed reference placement framing the whole level.
    #[default]
    Locked,
    /// Dynamic placement framing the current player positions.
    Tracking,
}

/// Per-evaluation inputs gathered by the host.
///
/// The controller never retains these between ticks; collaborators supply
/// them fresh on every call.
#[derive(Debug, Clone, Copy)]
pub struct FramingInput<'a> {
    /// Current camera field of view, degrees.
    pub fov_degrees: f32,
    /// Current viewport classification.
    pub constraint: AspectConstraint,
    /// Live player positions (may be empty).
    pub tracked: &'a [Vec3],
    /// Level reference positions, typically the four grid corners.
    pub locked: &'a [Vec3],
}

/// Eases the camera between the locked and tracking placements.
///
/// Mutated only from the host's update thread; notification entry points
/// re-arm the per-tick evaluation so a suspended camera reacts to phase
/// and aspect-ratio changes immediately.
#[derive(Debug, Clone, Default)]
pub struct FramingController {
    state: FramingState,
    /// Forces the locked placement even mid-round.
    locked_on_center: bool,
    params: DistanceParams,
    /// Whether the per-tick evaluation still has work to do.
    active: bool,
}

impl FramingController {
    pub fn new(params: DistanceParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn state(&self) -> FramingState {
        self.state
    }

    pub fn params(&self) -> &DistanceParams {
        &self.params
    }

    pub fn is_locked_on_center(&self) -> bool {
        self.locked_on_center
    }

    /// True while the host should keep scheduling per-tick updates.
    pub fn needs_update(&self) -> bool {
        self.active
    }

    /// Re-arms the per-tick evaluation without changing the target.
    pub fn request_update(&mut self) {
        self.active = true;
    }

    /// Host notification: the round phase changed.
    ///
    /// Pre-round and post-round phases lock the camera on the level
    /// center; only the active round tracks players. In the menu the
    /// controller goes fully idle.
    pub fn on_game_phase_changed(&mut self, phase: GamePhase) {
        self.state = match phase {
            GamePhase::InGame => FramingState::Tracking,
            GamePhase::Menu | GamePhase::Starting | GamePhase::EndGame => FramingState::Locked,
        };
        self.active = phase != GamePhase::Menu;
    }

    /// Host notification: the screen aspect ratio changed.
    pub fn on_aspect_ratio_changed(&mut self) {
        self.active = true;
    }

    /// Forces or releases the center lock. Releasing re-arms the
    /// evaluation so tracking resumes without waiting for a notification.
    pub fn set_locked_on_center(&mut self, locked: bool) {
        self.locked_on_center = locked;
        self.active = true;
    }

    /// Replaces the distance tweaks and retargets immediately.
    pub fn set_distance_params(&mut self, params: DistanceParams) {
        self.params = params;
        self.active = true;
    }

    /// Placement the camera is currently easing toward, if any point set
    /// can supply one.
    ///
    /// Tracking degrades to the locked placement when no tracked points
    /// are available; `None` only when the locked set is empty too.
    pub fn target_location(&self, input: &FramingInput<'_>) -> Option<Vec3> {
        let use_locked = self.locked_on_center
            || self.state == FramingState::Locked
            || input.tracked.is_empty();

        if !use_locked {
            if let Ok(location) =
                location_between(input.tracked, input.fov_degrees, input.constraint, &self.params)
            {
                return Some(location);
            }
        }

        location_between(input.locked, input.fov_degrees, input.constraint, &self.params).ok()
    }

    /// One evaluation step. Returns the new camera location.
    ///
    /// Within [`APPROACH_TOLERANCE`] of the target the camera stays put
    /// and [`Self::needs_update`] turns false until the next notification
    /// re-arms it. Otherwise the camera moves a `delta_seconds` fraction
    /// of the remaining distance; a zero delta snaps to the target.
    pub fn update(&mut self, current: Vec3, delta_seconds: f32, input: &FramingInput<'_>) -> Vec3 {
        if !self.active {
            return current;
        }

        let Some(target) = self.target_location(input) else {
            // No usable point set at all; hold position until re-armed.
            self.active = false;
            return current;
        };

        if current.distance(target) <= APPROACH_TOLERANCE {
            self.active = false;
            return current;
        }

        if delta_seconds <= 0.0 {
            return target;
        }
        current.lerp(target, delta_seconds.min(1.0))
    }
}
