//! Scripted drags for driving a row the way a pointer would.
//!
//! ```ignore
//! let outcome = rule.drag(&row).move_by(-90.0, 0.0).hold(100).release();
//! assert_eq!(outcome.last(), Some(&GestureDisposition::Released));
//! ```

use swipecell_foundation::DragSample;
use swipecell_ui::{GestureDisposition, SwipeRow};
use swipecell_ui_graphics::Point;

/// Milliseconds between two move samples.
pub const SAMPLE_INTERVAL_MS: i64 = 16;

/// Longest single move sample, in pixels.
pub const MAX_STEP: f32 = 10.0;

/// A drag gesture under construction. Each call feeds samples to the row
/// immediately; the finishing calls return every disposition the row gave.
///
/// Moves are split into steps of at most [`MAX_STEP`] pixels, one every
/// [`SAMPLE_INTERVAL_MS`]. That pace is above the default fling velocity,
/// so [`release`](Self::release) right after a move counts as a fling; call
/// [`hold`](Self::hold) first for a slow release.
pub struct DragScript<'a> {
    row: &'a SwipeRow,
    position: Point,
    time_ms: i64,
    dispositions: Vec<GestureDisposition>,
}

impl<'a> DragScript<'a> {
    /// Presses at `start`.
    pub fn new(row: &'a SwipeRow, start: Point) -> Self {
        let first = row.handle_drag(DragSample::begin(start, 0));
        Self {
            row,
            position: start,
            time_ms: 0,
            dispositions: vec![first],
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn dispositions(&self) -> &[GestureDisposition] {
        &self.dispositions
    }

    pub fn last_disposition(&self) -> Option<GestureDisposition> {
        self.dispositions.last().copied()
    }

    /// Moves by `(dx, dy)` in evenly spaced samples.
    pub fn move_by(mut self, dx: f32, dy: f32) -> Self {
        let distance = dx.hypot(dy);
        let steps = (distance / MAX_STEP).ceil().max(1.0) as usize;
        let start = self.position;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.time_ms += SAMPLE_INTERVAL_MS;
            self.position = Point::new(start.x + dx * t, start.y + dy * t);
            let disposition = self
                .row
                .handle_drag(DragSample::change(self.position, self.time_ms));
            self.dispositions.push(disposition);
        }
        self
    }

    /// Moves to an absolute position.
    pub fn move_to(self, target: Point) -> Self {
        let (dx, dy) = (target.x - self.position.x, target.y - self.position.y);
        self.move_by(dx, dy)
    }

    /// Keeps the pointer still for `millis`.
    pub fn hold(mut self, millis: i64) -> Self {
        self.time_ms += millis;
        self
    }

    /// Lifts the pointer; the row estimates the release velocity.
    pub fn release(self) -> Vec<GestureDisposition> {
        let sample = DragSample::end(self.position, self.time_ms + SAMPLE_INTERVAL_MS);
        self.finish(sample)
    }

    /// Lifts the pointer with an explicit horizontal velocity in px/s.
    pub fn release_with_velocity(self, velocity_x: f32) -> Vec<GestureDisposition> {
        let sample = DragSample::end(self.position, self.time_ms + SAMPLE_INTERVAL_MS)
            .with_velocity(Point::new(velocity_x, 0.0));
        self.finish(sample)
    }

    /// The system took the gesture away.
    pub fn cancel(self) -> Vec<GestureDisposition> {
        let sample = DragSample::cancel(self.position, self.time_ms + SAMPLE_INTERVAL_MS);
        self.finish(sample)
    }

    fn finish(mut self, sample: DragSample) -> Vec<GestureDisposition> {
        let disposition = self.row.handle_drag(sample);
        self.dispositions.push(disposition);
        self.dispositions
    }
}
