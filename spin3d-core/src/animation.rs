/// Rotation angle accumulated across frames
use std::f32::consts::{FRAC_PI_2, TAU};

/// Default spin rate: a quarter turn per second
pub const DEFAULT_RATE: f32 = FRAC_PI_2;

/// Advance `angle` by `rate * elapsed` and wrap the result into [0, 2π).
///
/// Negative or non-finite `elapsed` values leave the angle where it was.
pub fn advance(angle: f32, rate: f32, elapsed: f32) -> f32 {
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
    let wrapped = (angle + rate * elapsed).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Animation state owned by the render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    angle: f32,
    rate: f32,
}

impl Animation {
    pub fn new(rate: f32) -> Self {
        Self { angle: 0.0, rate }
    }

    /// Step forward by `elapsed` seconds and return the new angle
    pub fn tick(&mut self, elapsed: f32) -> f32 {
        self.angle = advance(self.angle, self.rate, elapsed);
        self.angle
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_accumulates_elapsed_time() {
        let mut animation = Animation::new(PI * 0.5);
        for elapsed in [0.016, 0.016, 0.016] {
            animation.tick(elapsed);
        }
        assert!((animation.angle() - 3.0 * 0.016 * PI * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_order_independent() {
        let steps = [0.010, 0.033, 0.002, 0.016];
        let forward = steps.iter().fold(0.0, |a, &dt| advance(a, 1.3, dt));
        let backward = steps.iter().rev().fold(0.0, |a, &dt| advance(a, 1.3, dt));
        assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn test_wraps_into_one_turn() {
        let angle = advance(6.0, 1.0, 1.0);
        assert!((angle - (7.0 - TAU)).abs() < 1e-5);

        let mut animation = Animation::new(100.0);
        for _ in 0..1000 {
            let angle = animation.tick(0.37);
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn test_ignores_invalid_elapsed() {
        assert_eq!(advance(1.0, 2.0, -0.5), 1.0);
        assert_eq!(advance(1.0, 2.0, f32::NAN), 1.0);
        assert_eq!(advance(1.0, 2.0, f32::INFINITY), 1.0);
    }

    #[test]
    fn test_negative_rate_stays_in_range() {
        let angle = advance(0.1, -1.0, 0.5);
        assert!((angle - (TAU - 0.4)).abs() < 1e-5);
    }

    #[test]
    fn test_set_rate() {
        let mut animation = Animation::default();
        assert_eq!(animation.rate(), DEFAULT_RATE);
        animation.set_rate(0.0);
        animation.tick(10.0);
        assert_eq!(animation.angle(), 0.0);
    }
}
