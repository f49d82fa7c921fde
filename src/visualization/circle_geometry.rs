use crate::math::{IncrementalRotator, LinearTransform};
use crate::visualization::renderer::ColoredVertex;
use std::f32::consts::TAU;

/// How the points around the circle get their sine and cosine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Angle-addition recurrence, two transcendental calls in total.
    #[default]
    Incremental,
    /// `sin`/`cos` evaluated afresh at every point.
    Direct,
}

// Index -> blend factor in [0, 1]; colour goes from (1, .5, 0) to (0, .5, 1).
fn gradient_color(i2c: &LinearTransform, index: usize) -> [f32; 3] {
    let c = i2c.evaluate(index as f32);
    [1.0 - c, 0.5, c]
}

/// `count` equally spaced points on the unit circle in the XY plane, starting at `start_theta`.
pub fn generate_circle_points(
    strategy: SamplingStrategy,
    count: usize,
    start_theta: f32,
) -> Vec<ColoredVertex> {
    if count == 0 {
        return Vec::new();
    }

    let delta = TAU / count as f32;
    let i2c = LinearTransform::new(0.0, (count - 1) as f32, 0.0, 1.0);
    let mut points = Vec::with_capacity(count);

    match strategy {
        SamplingStrategy::Incremental => {
            let mut circle = IncrementalRotator::with_start(delta, start_theta);
            for i in 0..count {
                let x = circle.cos();
                let y = circle.sin();
                points.push(ColoredVertex::new([x, y, 0.0], gradient_color(&i2c, i)));
                circle.advance();
            }
        }
        SamplingStrategy::Direct => {
            for i in 0..count {
                let (y, x) = (start_theta + i as f32 * delta).sin_cos();
                points.push(ColoredVertex::new([x, y, 0.0], gradient_color(&i2c, i)));
            }
        }
    }

    points
}

/// Unit-circle drift of the last point the incremental strategy would produce.
pub fn incremental_drift(count: usize, start_theta: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let mut circle = IncrementalRotator::with_start(TAU / count as f32, start_theta);
    for _ in 1..count {
        circle.advance();
    }
    circle.drift()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn strategies_agree_for_every_panel_count() {
        for count in 3..=256 {
            let start = (0.37 * count as f32) % TAU;
            let fast = generate_circle_points(SamplingStrategy::Incremental, count, start);
            let slow = generate_circle_points(SamplingStrategy::Direct, count, start);
            assert_eq!(fast.len(), count);
            assert_eq!(slow.len(), count);
            for (a, b) in fast.iter().zip(&slow) {
                assert_abs_diff_eq!(a.position[0], b.position[0], epsilon = 1e-4);
                assert_abs_diff_eq!(a.position[1], b.position[1], epsilon = 1e-4);
                assert_eq!(a.color, b.color);
            }
        }
    }

    #[test]
    fn points_lie_on_unit_circle_in_xy_plane() {
        for point in generate_circle_points(SamplingStrategy::Incremental, 128, 1.0) {
            let [x, y, z] = point.position;
            assert_eq!(z, 0.0);
            assert_abs_diff_eq!(x * x + y * y, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn first_point_sits_at_start_angle() {
        let points = generate_circle_points(SamplingStrategy::Incremental, 16, 0.0);
        assert_eq!(points[0].position, [1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(points[4].position[0], 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(points[4].position[1], 1.0, epsilon = 1e-5);
    }

    #[test]
    fn color_ramp_spans_first_to_last() {
        let points = generate_circle_points(SamplingStrategy::Direct, 5, 0.0);
        assert_eq!(points[0].color, [1.0, 0.5, 0.0]);
        assert_eq!(points[2].color, [0.5, 0.5, 0.5]);
        assert_abs_diff_eq!(points[4].color[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(points[4].color[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_and_single_point() {
        assert!(generate_circle_points(SamplingStrategy::Incremental, 0, 0.0).is_empty());
        let single = generate_circle_points(SamplingStrategy::Incremental, 1, 0.0);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].color, [1.0, 0.5, 0.0]);
        assert_eq!(incremental_drift(0, 0.0), 0.0);
    }

    #[test]
    fn drift_is_small_for_panel_counts() {
        assert!(incremental_drift(256, 2.0) < 1e-4);
        assert!(incremental_drift(3, 0.0) < 1e-4);
    }
}
