use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Directed angle used by the boundary tracer to order outgoing edges.
///
/// Returns the clockwise angle in `[0, 2π)` from the reversed incoming
/// direction (`current` → `previous`) to the outgoing direction
/// (`current` → `candidate`). The smallest value is the most
/// counterclockwise turn the walk can take; a candidate straight ahead
/// measures exactly π.
#[must_use]
pub fn dirangle(previous: &Point2, current: &Point2, candidate: &Point2) -> f64 {
    let back = Vector2::new(previous.x - current.x, previous.y - current.y);
    let out = Vector2::new(candidate.x - current.x, candidate.y - current.y);
    let ccw = (back.x * out.y - back.y * out.x).atan2(back.dot(&out));
    if ccw <= 0.0 {
        -ccw
    } else {
        TAU - ccw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rotate(v: &Point2, angle: f64) -> Point2 {
        Point2::new(
            v.x * angle.cos() - v.y * angle.sin(),
            v.x * angle.sin() + v.y * angle.cos(),
        )
    }

    #[test]
    fn straight_ahead_is_pi() {
        // Arriving from the west, continuing east.
        let a = dirangle(&p(-1.0, 0.0), &p(0.0, 0.0), &p(1.0, 0.0));
        assert!((a - PI).abs() < TOL, "a={a}");
    }

    #[test]
    fn left_turn_is_sharper_than_right_turn() {
        // Arriving from the west at the origin: a turn to the north (left)
        // must order before a turn to the south (right).
        let left = dirangle(&p(-1.0, 0.0), &p(0.0, 0.0), &p(0.0, 1.0));
        let right = dirangle(&p(-1.0, 0.0), &p(0.0, 0.0), &p(0.0, -1.0));
        assert!((left - PI / 2.0).abs() < TOL, "left={left}");
        assert!((right - 3.0 * PI / 2.0).abs() < TOL, "right={right}");
        assert!(left < right);
    }

    #[test]
    fn full_backtrack_is_zero() {
        let a = dirangle(&p(-1.0, 0.0), &p(0.0, 0.0), &p(-2.0, 0.0));
        assert!(a.abs() < TOL, "a={a}");
    }

    #[test]
    fn range_is_zero_to_tau() {
        for i in 0..16 {
            let theta = f64::from(i) * PI / 8.0;
            let cand = p(theta.cos(), theta.sin());
            let a = dirangle(&p(-1.0, 0.0), &p(0.0, 0.0), &cand);
            assert!((0.0..std::f64::consts::TAU).contains(&a), "a={a}");
        }
    }

    #[test]
    fn rotation_invariance() {
        // The directed angle must not change when the whole configuration is
        // rotated about the pivot.
        let prev = p(-3.0, 0.5);
        let cand = p(1.5, -2.0);
        let base = dirangle(&prev, &p(0.0, 0.0), &cand);
        for i in 1..24 {
            let theta = f64::from(i) * PI / 12.0;
            let a = dirangle(&rotate(&prev, theta), &p(0.0, 0.0), &rotate(&cand, theta));
            assert!((a - base).abs() < 1e-6, "theta={theta} a={a} base={base}");
        }
    }
}
