//! Incremental sine/cosine generator.
//!
//! Walks an arithmetic progression of angles `start, start + step, ...` using the
//! angle-addition identities, so only the constructor evaluates `sin`/`cos`.
//! See <http://iquilezles.org/www/articles/sincos/sincos.htm>.

/// Current orientation plus a fixed per-step rotation, both as (sin, cos) pairs.
///
/// Repeated [`advance`](Self::advance) calls accumulate rounding error, so
/// `sin² + cos²` slowly drifts away from 1. Use [`drift`](Self::drift) to measure it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncrementalRotator {
    step_sin: f32,
    step_cos: f32,
    current_sin: f32,
    current_cos: f32,
}

impl IncrementalRotator {
    /// Starts at angle 0.
    pub fn new(step_angle: f32) -> Self {
        let (step_sin, step_cos) = step_angle.sin_cos();
        Self {
            step_sin,
            step_cos,
            current_sin: 0.0,
            current_cos: 1.0,
        }
    }

    pub fn with_start(step_angle: f32, start_angle: f32) -> Self {
        let (current_sin, current_cos) = start_angle.sin_cos();
        Self {
            current_sin,
            current_cos,
            ..Self::new(step_angle)
        }
    }

    #[inline]
    pub fn sin(&self) -> f32 {
        self.current_sin
    }

    #[inline]
    pub fn cos(&self) -> f32 {
        self.current_cos
    }

    #[inline]
    pub fn sin_cos(&self) -> (f32, f32) {
        (self.current_sin, self.current_cos)
    }

    /// Distance of the current pair from the unit circle, `|sin² + cos² - 1|`.
    pub fn drift(&self) -> f32 {
        (self.current_sin * self.current_sin + self.current_cos * self.current_cos - 1.0).abs()
    }

    /// theta += step
    #[inline]
    pub fn advance(&mut self) {
        let new_sin = self.current_sin * self.step_cos + self.current_cos * self.step_sin;
        let new_cos = self.current_cos * self.step_cos - self.current_sin * self.step_sin;
        self.current_sin = new_sin;
        self.current_cos = new_cos;
    }
}

/// Yields the current (sin, cos) and then advances. Never ends.
impl Iterator for IncrementalRotator {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.sin_cos();
        self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn assert_matches_direct(step: f32, start: f32, steps: usize, epsilon: f64) {
        let mut rotator = IncrementalRotator::with_start(step, start);
        for k in 0..steps {
            let angle = start as f64 + k as f64 * step as f64;
            assert_abs_diff_eq!(rotator.sin() as f64, angle.sin(), epsilon = epsilon);
            assert_abs_diff_eq!(rotator.cos() as f64, angle.cos(), epsilon = epsilon);
            rotator.advance();
        }
    }

    #[test]
    fn default_start_is_angle_zero() {
        let rotator = IncrementalRotator::new(0.3);
        assert_eq!(rotator.sin(), 0.0);
        assert_eq!(rotator.cos(), 1.0);
    }

    #[test]
    fn start_angle_sets_orientation() {
        let rotator = IncrementalRotator::with_start(0.1, 1.2);
        assert_eq!(rotator.sin_cos(), 1.2f32.sin_cos());
        assert_eq!((rotator.step_sin, rotator.step_cos), 0.1f32.sin_cos());
    }

    #[test]
    fn quarter_turns() {
        let mut rotator = IncrementalRotator::with_start(FRAC_PI_2, 0.0);
        let expected = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)];
        for (sin, cos) in expected {
            assert_abs_diff_eq!(rotator.sin(), sin, epsilon = 1e-4);
            assert_abs_diff_eq!(rotator.cos(), cos, epsilon = 1e-4);
            rotator.advance();
        }
    }

    #[test]
    fn matches_direct_evaluation() {
        assert_matches_direct(0.01, 0.0, 2000, 1e-4);
        assert_matches_direct(TAU / 128.0, PI / 6.0, 1000, 1e-4);
        assert_matches_direct(-0.25, 2.0, 1000, 1e-4);
    }

    #[test]
    fn matches_direct_evaluation_for_random_angles() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let step = rng.gen_range(-0.5f32..0.5);
            let start = rng.gen_range(-PI..PI);
            assert_matches_direct(step, start, 500, 1e-4);
        }
    }

    #[test]
    fn full_circle_returns_to_start() {
        for n in [3usize, 7, 128, 256] {
            let start = 0.4;
            let mut rotator = IncrementalRotator::with_start(TAU / n as f32, start);
            let initial = rotator.sin_cos();
            for _ in 0..n {
                rotator.advance();
            }
            assert_abs_diff_eq!(rotator.sin(), initial.0, epsilon = 1e-4);
            assert_abs_diff_eq!(rotator.cos(), initial.1, epsilon = 1e-4);
        }
    }

    #[test]
    fn zero_step_keeps_orientation() {
        let mut rotator = IncrementalRotator::with_start(0.0, 0.7);
        let initial = rotator.sin_cos();
        for _ in 0..1000 {
            rotator.advance();
        }
        assert_eq!(rotator.sin_cos(), initial);

        let mut at_origin = IncrementalRotator::new(0.0);
        at_origin.advance();
        assert_eq!(at_origin.sin_cos(), (0.0, 1.0));
    }

    #[test]
    fn drift_stays_bounded() {
        let mut rotator = IncrementalRotator::with_start(0.01, 0.5);
        assert!(rotator.drift() < 1e-6);
        let step_norm = rotator.step_sin * rotator.step_sin + rotator.step_cos * rotator.step_cos;
        assert!((step_norm - 1.0).abs() < 1e-6);

        let mut checkpoints = Vec::new();
        for k in 1..=10_000 {
            rotator.advance();
            if k % 2_500 == 0 {
                checkpoints.push(rotator.drift());
            }
        }
        let last = *checkpoints.last().unwrap();
        assert!(last <= 1e-3, "drift after 10000 steps: {last}");
        // Linear budget at each checkpoint.
        for (i, drift) in checkpoints.iter().enumerate() {
            let share = (i + 1) as f32 / checkpoints.len() as f32;
            assert!(*drift <= 1e-3 * share, "checkpoint {i}: {drift}");
        }
    }

    #[test]
    fn iterator_yields_before_advancing() {
        let step = TAU / 4.0;
        let points: Vec<_> = IncrementalRotator::new(step).take(3).collect();
        assert_eq!(points[0], (0.0, 1.0));
        assert_abs_diff_eq!(points[1].0, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(points[2].1, -1.0, epsilon = 1e-6);
    }
}
