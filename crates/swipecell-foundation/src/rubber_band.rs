//! Diminishing resistance past a travel limit.

/// Maps overshoot distance onto `[0, limit)` with `f(0) = 0` and `f'(0) = 1`.
///
/// `band(x) = limit * (1 - e^(-x / limit))`. Matching the slope at zero lets
/// a drag cross from free travel into the band without a visible kink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RubberBand {
    limit: f32,
}

impl RubberBand {
    /// Negative or non-finite limits collapse to a hard stop.
    pub fn new(limit: f32) -> Self {
        let limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        Self { limit }
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Resisted distance for a non-negative `overshoot`.
    pub fn band(&self, overshoot: f32) -> f32 {
        if overshoot <= 0.0 || self.limit <= 0.0 {
            return 0.0;
        }
        self.limit * (1.0 - (-overshoot / self.limit).exp())
    }

    /// Applies the band to whatever part of `distance` exceeds `travel`.
    pub fn clamp(&self, distance: f32, travel: f32) -> f32 {
        if distance <= travel {
            distance
        } else {
            travel + self.band(distance - travel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_starts_flat_at_unit_slope() {
        let band = RubberBand::new(32.0);
        assert_eq!(band.band(0.0), 0.0);
        let tiny = band.band(0.01);
        assert!((tiny - 0.01).abs() < 1e-4);
    }

    #[test]
    fn band_is_monotonic_and_bounded() {
        let band = RubberBand::new(32.0);
        let mut previous = 0.0;
        for step in 0..400 {
            let value = band.band(step as f32);
            assert!(value >= previous);
            assert!(value < 32.0 + 1e-3);
            previous = value;
        }
    }

    #[test]
    fn zero_limit_is_a_hard_stop() {
        let band = RubberBand::new(0.0);
        assert_eq!(band.clamp(500.0, 160.0), 160.0);
        assert_eq!(RubberBand::new(-4.0).limit(), 0.0);
        assert_eq!(RubberBand::new(f32::NAN).limit(), 0.0);
    }

    #[test]
    fn clamp_passes_through_inside_travel() {
        let band = RubberBand::new(32.0);
        assert_eq!(band.clamp(120.0, 160.0), 120.0);
        let past = band.clamp(200.0, 160.0);
        assert!(past > 160.0 && past < 192.0);
    }
}
