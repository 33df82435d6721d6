//! Easing curves and animation specs.

/// Easing curves used by settle animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    /// Material standard curve: quick start, long deceleration.
    FastOutSlowIn,
    /// Decelerate-only curve, suited to motion continuing a fling.
    LinearOutSlowIn,
    Custom(CubicBezier),
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).transform(fraction),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).transform(fraction),
            Easing::LinearOutSlowIn => CubicBezier::new(0.0, 0.0, 0.2, 1.0).transform(fraction),
            Easing::Custom(curve) => curve.transform(fraction),
        }
    }
}

/// Cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(coefficients: (f32, f32, f32), t: f32) -> f32 {
        let (a, b, c) = coefficients;
        ((a * t + b) * t + c) * t
    }

    fn slope(coefficients: (f32, f32, f32), t: f32) -> f32 {
        let (a, b, c) = coefficients;
        (3.0 * a * t + 2.0 * b) * t + c
    }

    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let xs = Self::coefficients(self.x1, self.x2);
        let ys = Self::coefficients(self.y1, self.y2);

        // Newton-Raphson on x(t) = fraction, bisection if the slope flattens out.
        let mut t = fraction;
        for _ in 0..8 {
            let error = Self::sample(xs, t) - fraction;
            if error.abs() < 1e-6 {
                return Self::sample(ys, t);
            }
            let slope = Self::slope(xs, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..20 {
            let x = Self::sample(xs, t);
            if (x - fraction).abs() < 1e-6 {
                break;
            }
            if x > fraction {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        Self::sample(ys, t)
    }
}

/// Duration-based animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring configuration.
///
/// `damping_ratio` of 1.0 is critically damped; below 1.0 the spring
/// overshoots. Thresholds decide when the spring counts as settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_their_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn fast_out_slow_in_is_ahead_of_linear_midway() {
        let eased = Easing::FastOutSlowIn.transform(0.5);
        assert!(eased > 0.5 && eased < 1.0, "got {eased}");
    }

    #[test]
    fn eased_progress_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=50 {
            let value = Easing::FastOutSlowIn.transform(step as f32 / 50.0);
            assert!(value + 1e-4 >= previous);
            previous = value;
        }
    }
}
