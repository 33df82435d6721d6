//! Turns a drag sample stream into ownership, tracking and release steps.

use swipecell_foundation::gesture_constants::{
    DIRECTION_EPSILON, DRAG_THRESHOLD, MAX_FLING_VELOCITY,
};
use swipecell_foundation::{DragPhase, DragSample, Point, VelocityTracker};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tracking {
    Idle,
    /// Pressed, still inside the deadzone.
    Pending { origin: Point },
    /// The container owns this gesture instance.
    Yielded,
    /// The row owns it; `start_offset` is the offset it was grabbed at.
    Owned { origin: Point, start_offset: f32 },
}

/// What the row should do with a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureStep {
    /// Nothing to do yet.
    Wait,
    /// The drag left the deadzone horizontally. The row must answer with
    /// [`GestureCoordinator::accept`] or [`GestureCoordinator::reject`].
    Claim { translation_x: f32 },
    /// The drag left the deadzone vertically.
    Yield,
    /// Owned drag moved; `raw_offset` is grab offset plus translation.
    Move { raw_offset: f32 },
    /// Owned drag finished.
    Release { velocity_x: f32, cancelled: bool },
    /// Sample belongs to a gesture the row does not own.
    Ignore,
}

/// Result of feeding one sample to a row, for the container's benefit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureDisposition {
    /// Waiting to see which way the drag goes.
    Pending,
    /// The row is tracking the drag.
    Tracking,
    /// The container should handle the gesture (usually to scroll).
    Yielded,
    /// The row finished a drag it owned.
    Released,
    /// The sample was not part of a live gesture.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct GestureCoordinator {
    tracking: Tracking,
    velocity: VelocityTracker,
}

impl Default for GestureCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureCoordinator {
    pub fn new() -> Self {
        Self {
            tracking: Tracking::Idle,
            velocity: VelocityTracker::new(),
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.tracking, Tracking::Owned { .. })
    }

    pub fn on_sample(&mut self, sample: &DragSample) -> GestureStep {
        if sample.phase == DragPhase::Begin {
            self.velocity.reset();
            self.velocity.add_position(sample.time_ms, sample.position);
            self.tracking = Tracking::Pending {
                origin: sample.position,
            };
            return GestureStep::Wait;
        }

        if !matches!(self.tracking, Tracking::Idle) {
            self.velocity.add_position(sample.time_ms, sample.position);
        }

        match (self.tracking, sample.phase) {
            (Tracking::Pending { origin }, DragPhase::Change) => {
                let delta = sample.position - origin;
                if delta.x.hypot(delta.y) < DRAG_THRESHOLD {
                    return GestureStep::Wait;
                }
                if delta.x.abs() > delta.y.abs() + DIRECTION_EPSILON {
                    GestureStep::Claim {
                        translation_x: delta.x,
                    }
                } else {
                    log::trace!("drag went vertical ({}, {}); yielding", delta.x, delta.y);
                    self.tracking = Tracking::Yielded;
                    GestureStep::Yield
                }
            }
            (
                Tracking::Owned {
                    origin,
                    start_offset,
                },
                DragPhase::Change,
            ) => {
                let raw_offset = start_offset + sample.position.x - origin.x;
                log::trace!("drag raw offset {raw_offset}");
                GestureStep::Move { raw_offset }
            }
            (Tracking::Owned { .. }, DragPhase::End | DragPhase::Cancel) => {
                let cancelled = sample.phase == DragPhase::Cancel;
                let velocity_x = sample
                    .velocity
                    .map(|velocity| velocity.x.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY))
                    .unwrap_or_else(|| self.velocity.calculate_velocity(MAX_FLING_VELOCITY).x);
                self.finish();
                GestureStep::Release {
                    velocity_x,
                    cancelled,
                }
            }
            (Tracking::Yielded, DragPhase::Change) => GestureStep::Yield,
            (_, DragPhase::End | DragPhase::Cancel) => {
                self.finish();
                GestureStep::Ignore
            }
            _ => GestureStep::Ignore,
        }
    }

    /// Takes ownership of a claimed drag that started at `start_offset`.
    pub fn accept(&mut self, start_offset: f32) {
        if let Tracking::Pending { origin } = self.tracking {
            self.tracking = Tracking::Owned {
                origin,
                start_offset,
            };
        }
    }

    /// Hands a claimed drag to the container.
    pub fn reject(&mut self) {
        if matches!(self.tracking, Tracking::Pending { .. }) {
            self.tracking = Tracking::Yielded;
        }
    }

    /// Forgets any live gesture.
    pub fn finish(&mut self) {
        self.tracking = Tracking::Idle;
        self.velocity.reset();
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
