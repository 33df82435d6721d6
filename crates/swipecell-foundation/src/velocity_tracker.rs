//! Release velocity estimation for swipe gestures.
//!
//! Uses the impulse strategy: the pointer is treated as a unit mass and the
//! velocity is derived from the kinetic energy the recent movement imparted.
//! This is far less noisy on the last one or two samples than a plain
//! `distance / time` over the final move.

use swipecell_ui_graphics::Point;

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Velocity along one axis.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Recent samples, newest first, cut at the horizon or at a stop.
    fn recent(&self) -> Vec<Sample> {
        let mut recent = Vec::with_capacity(HISTORY_SIZE);
        let Some(newest) = self.samples[self.newest] else {
            return recent;
        };
        let mut later = newest;
        for step in 0..HISTORY_SIZE {
            let index = (self.newest + HISTORY_SIZE - step) % HISTORY_SIZE;
            let Some(sample) = self.samples[index] else {
                break;
            };
            if newest.time_ms - sample.time_ms > HORIZON_MS
                || later.time_ms - sample.time_ms > ASSUME_STOPPED_MS
            {
                break;
            }
            recent.push(sample);
            later = sample;
        }
        recent
    }

    /// Velocity in units per second; `0.0` with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let recent = self.recent();
        if recent.len() < 2 {
            return 0.0;
        }

        // Walk from the oldest sample forward, accumulating work.
        let mut work = 0.0f32;
        let oldest = recent.len() - 1;
        for i in (1..=oldest).rev() {
            let earlier = recent[i];
            let later = recent[i - 1];
            let dt = (later.time_ms - earlier.time_ms) as f32;
            if dt == 0.0 {
                continue;
            }
            let v_curr = (later.position - earlier.position) / dt;
            let v_prev = energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if i == oldest {
                work *= 0.5;
            }
        }

        energy_to_velocity(work) * 1000.0
    }

    /// Velocity capped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// `E = v² / 2` for unit mass, keeping the sign of the energy.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two-axis tracker fed with pointer positions.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Velocity in px/s, each axis capped to `±max_velocity`.
    pub fn calculate_velocity(&self, max_velocity: f32) -> Point {
        Point::new(
            self.x.calculate_velocity_with_max(max_velocity),
            self.y.calculate_velocity_with_max(max_velocity),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_sample_report_zero() {
        let mut tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
        tracker.add_data_point(0, 40.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn steady_swipe_left_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        // 30 px every 10 ms to the left: -3000 px/s.
        for step in 0..5 {
            tracker.add_data_point(step * 10, 300.0 - step as f32 * 30.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity + 3000.0).abs() < 300.0,
            "expected about -3000, got {velocity}"
        );
    }

    #[test]
    fn pause_before_release_kills_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 50.0);
        tracker.add_data_point(10 + ASSUME_STOPPED_MS + 1, 50.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 1000.0);
        tracker.add_data_point(200, 0.0);
        tracker.add_data_point(210, 10.0);
        tracker.add_data_point(220, 20.0);
        let velocity = tracker.calculate_velocity();
        assert!(velocity > 0.0, "old sample leaked into {velocity}");
    }

    #[test]
    fn capped_velocity_respects_sign() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 5_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
    }

    #[test]
    fn two_axis_tracker_reports_both_components() {
        let mut tracker = VelocityTracker::new();
        for step in 0..4 {
            let t = step as f32;
            tracker.add_position(step * 10, Point::new(t * -20.0, t * 5.0));
        }
        let velocity = tracker.calculate_velocity(8_000.0);
        assert!(velocity.x < 0.0);
        assert!(velocity.y > 0.0);
        assert!(velocity.x.abs() > velocity.y.abs());

        tracker.reset();
        assert_eq!(tracker.calculate_velocity(8_000.0), Point::ZERO);
    }
}
