use super::{points_equal, Point2, Vector2};

/// Bounded segment-segment intersection in 2D.
///
/// Returns the intersection point when it lies within both finite segments,
/// inclusive of endpoints within `eps`. Parallel and colinear pairs intersect
/// only when they touch at exactly one tolerance-equal endpoint; overlap
/// along a stretch is treated as no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<Point2> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);
    let la = da.norm();
    let lb = db.norm();
    if la < eps || lb < eps {
        // Zero-length segments cannot found an intersection.
        return None;
    }

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < eps * la * lb {
        return colinear_touch(a0, a1, b0, b1, eps);
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Endpoint-inclusive bounds: `eps` is a distance, so scale it into each
    // segment's parameter space.
    let et = eps / la;
    let eu = eps / lb;
    if t >= -et && t <= 1.0 + et && u >= -eu && u <= 1.0 + eu {
        let t_clamped = t.clamp(0.0, 1.0);
        Some(Point2::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped))
    } else {
        None
    }
}

/// Single-point contact between parallel segments.
///
/// Two colinear segments meeting end-to-end share one point; the same pair
/// extended past each other shares a stretch and yields nothing.
fn colinear_touch(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<Point2> {
    let pairs = [(a0, a1, b0, b1), (a0, a1, b1, b0), (a1, a0, b0, b1), (a1, a0, b1, b0)];
    let mut touch: Option<Point2> = None;
    for (shared_a, far_a, shared_b, far_b) in pairs {
        if !points_equal(shared_a, shared_b, eps) {
            continue;
        }
        // The segments must extend away from the shared point, otherwise the
        // overlap is a stretch rather than a point.
        let ra = Vector2::new(far_a.x - shared_a.x, far_a.y - shared_a.y);
        let rb = Vector2::new(far_b.x - shared_b.x, far_b.y - shared_b.y);
        if ra.dot(&rb) > eps {
            return None;
        }
        match touch {
            Some(prev) if !points_equal(&prev, shared_a, eps) => return None,
            _ => touch = Some(*shared_a),
        }
    }
    touch
}
