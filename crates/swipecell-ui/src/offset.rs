//! Pure mapping from drag distance to row offset and release outcome.

use swipecell_foundation::RubberBand;

use crate::orientation::SwipeOrientation;

/// Signed content offset for a raw drag position.
///
/// `travel` is the natural travel limit for `orientation` (the total action
/// width, or the row width for expanding styles). Up to it the drag maps
/// one to one; past it the excess is banded so the result never exceeds
/// `travel * (1 + elasticity)`. Dragging against the orientation yields `0`.
pub fn swipe_offset(
    drag_delta_x: f32,
    orientation: SwipeOrientation,
    travel: f32,
    elasticity: f32,
) -> f32 {
    let scale = orientation.scale();
    let distance = drag_delta_x * scale;
    if !(distance > 0.0) || !(travel > 0.0) {
        return 0.0;
    }
    let band = RubberBand::new(travel * elasticity);
    band.clamp(distance, travel) * scale
}

/// Orientation a raw signed position reveals.
///
/// At exactly zero the `preferred` side is kept. A side without actions
/// resolves to `None`; the drag is then inert and the offset stays `0`.
pub fn resolve_orientation(
    raw_offset: f32,
    has_left: bool,
    has_right: bool,
    preferred: Option<SwipeOrientation>,
) -> Option<SwipeOrientation> {
    let natural = SwipeOrientation::for_offset(raw_offset).or(preferred)?;
    let available = match natural {
        SwipeOrientation::Left => has_left,
        SwipeOrientation::Right => has_right,
    };
    available.then_some(natural)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Open,
    Close,
}

/// Whether a released row settles open or closed.
///
/// A fling faster than `fling_velocity` wins in either direction; otherwise
/// the row stays open once it was dragged at least `threshold` of the
/// action width.
pub fn release_decision(
    offset: f32,
    velocity_x: f32,
    orientation: SwipeOrientation,
    actions_width: f32,
    threshold: f32,
    fling_velocity: f32,
) -> ReleaseDecision {
    let opening_velocity = velocity_x * orientation.scale();
    if opening_velocity < -fling_velocity {
        return ReleaseDecision::Close;
    }
    if opening_velocity > fling_velocity {
        return ReleaseDecision::Open;
    }
    let distance = offset * orientation.scale();
    if distance > 0.0 && distance >= threshold * actions_width {
        ReleaseDecision::Open
    } else {
        ReleaseDecision::Close
    }
}

#[cfg(test)]
#[path = "tests/offset_tests.rs"]
mod tests;
