//! Drag sample stream fed to the swipe gesture coordinator.

use swipecell_ui_graphics::Point;

/// Lifecycle phase of one pointer drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Begin,
    Change,
    End,
    Cancel,
}

impl DragPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, DragPhase::End | DragPhase::Cancel)
    }
}

/// One pointer sample in container coordinates.
///
/// `velocity` is in px/s and only needs to be filled when the platform
/// already measured it; otherwise the coordinator estimates it from the
/// stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub phase: DragPhase,
    pub position: Point,
    pub time_ms: i64,
    pub velocity: Option<Point>,
}

impl DragSample {
    pub fn new(phase: DragPhase, position: Point, time_ms: i64) -> Self {
        Self {
            phase,
            position,
            time_ms,
            velocity: None,
        }
    }

    pub fn begin(position: Point, time_ms: i64) -> Self {
        Self::new(DragPhase::Begin, position, time_ms)
    }

    pub fn change(position: Point, time_ms: i64) -> Self {
        Self::new(DragPhase::Change, position, time_ms)
    }

    pub fn end(position: Point, time_ms: i64) -> Self {
        Self::new(DragPhase::End, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: i64) -> Self {
        Self::new(DragPhase::Cancel, position, time_ms)
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!DragPhase::Begin.is_terminal());
        assert!(!DragPhase::Change.is_terminal());
        assert!(DragPhase::End.is_terminal());
        assert!(DragPhase::Cancel.is_terminal());
    }

    #[test]
    fn velocity_is_optional() {
        let sample = DragSample::end(Point::new(10.0, 4.0), 120);
        assert_eq!(sample.velocity, None);
        let sample = sample.with_velocity(Point::new(-900.0, 0.0));
        assert_eq!(sample.velocity, Some(Point::new(-900.0, 0.0)));
    }
}
