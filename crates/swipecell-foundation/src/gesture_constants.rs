//! Shared gesture thresholds, in logical pixels.
//!
//! The row swipe and the container's vertical scroll must agree on these,
//! otherwise one of them starts tracking while the other still waits.

/// Distance a pointer must travel from its press position before a drag
/// is recognised as a swipe (or handed to the container).
///
/// Matches common touch-slop conventions (Android uses ~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Horizontal movement must exceed vertical movement by this much for the
/// row to claim the gesture. Ties go to the container.
pub const DIRECTION_EPSILON: f32 = 1.0;

/// Release velocities are capped to this many px/s before threshold math.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
